//! Slug derivation shared by every slug-bearing collection.
//!
//! A slug is derived once at creation and re-derived only when an update
//! explicitly changes the title. Uniqueness is per scope (one scope per
//! collection); the backing store's UNIQUE constraint remains the final
//! gate against concurrent writers.

use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Base used when a title normalizes to the empty string (all punctuation).
const FALLBACK_BASE: &str = "untitled";

/// Upper bound on uniqueness probes. Exceeding it means pathological data,
/// not a normal collision race.
const MAX_PROBES: u32 = 10_000;

/// Uniqueness domain for slugs. Each variant maps to one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlugScope {
    Blog,
    Idea,
    Media,
    Event,
}

impl SlugScope {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blog => "blogs",
            Self::Idea => "ideas",
            Self::Media => "media",
            Self::Event => "events",
        }
    }
}

impl fmt::Display for SlugScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Title> for String {
    fn from(value: Title) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Reduce a title to its slug base: lowercase, keep only ASCII letters,
/// digits, whitespace and hyphens, collapse whitespace and hyphen runs into
/// a single hyphen, and strip edge hyphens. Idempotent; may return the
/// empty string for titles with no eligible characters.
pub fn normalize(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut eligible = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch.is_whitespace() || ch == '-' {
            eligible.push(ch);
        }
    }

    let mut base = String::with_capacity(eligible.len());
    for ch in eligible.trim().chars() {
        if ch.is_whitespace() || ch == '-' {
            if !base.ends_with('-') {
                base.push('-');
            }
        } else {
            base.push(ch);
        }
    }

    base.trim_matches('-').to_string()
}

/// Storage-lookup capability injected into [`SlugAssigner`], keeping it
/// independent of any concrete store.
#[async_trait]
pub trait SlugLookup: Send + Sync {
    /// Whether an entity other than `exclude_id` already holds `candidate`
    /// within `scope`.
    async fn exists(
        &self,
        scope: SlugScope,
        candidate: &str,
        exclude_id: Option<i64>,
    ) -> DomainResult<bool>;
}

/// Domain service producing collision-free slugs for a collection scope.
pub struct SlugAssigner {
    lookup: Arc<dyn SlugLookup>,
}

impl SlugAssigner {
    pub fn new(lookup: Arc<dyn SlugLookup>) -> Self {
        Self { lookup }
    }

    /// Derive a unique slug for `title` within `scope`. Pass `exclude_id`
    /// on updates so the entity's own slug does not count as a collision.
    ///
    /// Probing walks `base`, `base-1`, `base-2`, ... and returns the first
    /// free candidate. The counter starts at 1 and never reuses a skipped
    /// number. The check-then-insert sequence is not atomic; a losing racer
    /// surfaces as `DomainError::Conflict` from the store's unique gate.
    pub async fn assign(
        &self,
        title: &Title,
        scope: SlugScope,
        exclude_id: Option<i64>,
    ) -> DomainResult<Slug> {
        let base = match normalize(title.as_str()) {
            b if b.is_empty() => FALLBACK_BASE.to_string(),
            b => b,
        };

        let mut candidate = base.clone();
        let mut counter = 1u32;

        loop {
            if !self.lookup.exists(scope, &candidate, exclude_id).await? {
                return Slug::new(candidate);
            }
            if counter > MAX_PROBES {
                return Err(DomainError::SlugProbeExhausted {
                    scope: scope.as_str(),
                    attempts: counter,
                });
            }
            candidate = format!("{base}-{counter}");
            counter += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_basic_title() {
        assert_eq!(
            normalize("Trans Awareness Workshop!"),
            "trans-awareness-workshop"
        );
    }

    #[test]
    fn normalize_collapses_spaces_and_hyphen_runs() {
        assert_eq!(normalize("  Multiple   Spaces -- Here  "), "multiple-spaces-here");
    }

    #[test]
    fn normalize_strips_everything_outside_alphabet() {
        assert_eq!(normalize("Café #1: déjà-vu?"), "caf-1-dj-vu");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn normalize_has_no_edge_or_doubled_hyphens() {
        for input in ["-lead", "trail-", "--both--", "a  -  b", "Pride 2024!!"] {
            let out = normalize(input);
            assert!(!out.starts_with('-'), "{out:?}");
            assert!(!out.ends_with('-'), "{out:?}");
            assert!(!out.contains("--"), "{out:?}");
            assert!(out.chars().all(|c| c.is_ascii_lowercase()
                || c.is_ascii_digit()
                || c == '-'));
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in [
            "Trans Awareness Workshop!",
            "  Multiple   Spaces -- Here  ",
            "!!!",
            "already-a-slug",
            "MiXeD CaSe 42",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn title_rejects_blank() {
        assert!(Title::new("   ").is_err());
        assert!(Title::new("ok").is_ok());
    }

    #[test]
    fn slug_rejects_empty() {
        assert!(Slug::new("").is_err());
    }
}
