use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, Title};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdeaId(pub i64);

impl IdeaId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("idea id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<IdeaId> for i64 {
    fn from(value: IdeaId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum IdeaStatus {
    Open,
    InProgress,
    Completed,
    Rejected,
}

impl IdeaStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }
}

impl Default for IdeaStatus {
    fn default() -> Self {
        Self::Open
    }
}

impl FromStr for IdeaStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "open" => Ok(Self::Open),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "rejected" => Ok(Self::Rejected),
            other => Err(DomainError::Validation(format!(
                "unknown idea status: {other}"
            ))),
        }
    }
}

impl fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Idea {
    pub id: IdeaId,
    pub title: Title,
    pub slug: Slug,
    pub description: String,
    pub category: String,
    pub status: IdeaStatus,
    pub author: String,
    pub likes: i64,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewIdea {
    pub title: Title,
    pub slug: Slug,
    pub description: String,
    pub category: String,
    pub status: IdeaStatus,
    pub author: String,
    pub published: bool,
}

#[derive(Debug, Clone, Default)]
pub struct IdeaUpdate {
    pub title: Option<Title>,
    pub slug: Option<Slug>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<IdeaStatus>,
    pub author: Option<String>,
    pub published: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct IdeaFilter {
    pub category: Option<String>,
    pub status: Option<IdeaStatus>,
    pub published: Option<bool>,
}

#[async_trait]
pub trait IdeaRepository: Send + Sync {
    async fn insert(&self, idea: NewIdea) -> DomainResult<Idea>;
    async fn update(&self, id: IdeaId, update: IdeaUpdate) -> DomainResult<Idea>;
    async fn delete(&self, id: IdeaId) -> DomainResult<()>;
    async fn find_by_id(&self, id: IdeaId) -> DomainResult<Option<Idea>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Idea>>;
    async fn list(
        &self,
        filter: &IdeaFilter,
        limit: Option<u32>,
        offset: u32,
    ) -> DomainResult<(Vec<Idea>, u64)>;
    async fn distinct_categories(&self) -> DomainResult<Vec<String>>;
    /// Atomic like-counter bump; returns the updated idea.
    async fn increment_likes(&self, id: IdeaId) -> DomainResult<Idea>;
}
