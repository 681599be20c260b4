use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, Title};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaId(pub i64);

impl MediaId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("media id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<MediaId> for i64 {
    fn from(value: MediaId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct MediaItem {
    pub id: MediaId,
    pub title: Title,
    pub slug: Slug,
    pub description: String,
    /// Free-form media type, e.g. "video" or "podcast".
    pub kind: String,
    pub views: i64,
    pub duration: String,
    pub creator: String,
    pub featured: bool,
    pub published: bool,
    pub category: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewMediaItem {
    pub title: Title,
    pub slug: Slug,
    pub description: String,
    pub kind: String,
    pub duration: String,
    pub creator: String,
    pub featured: bool,
    pub published: bool,
    pub category: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MediaUpdate {
    pub title: Option<Title>,
    pub slug: Option<Slug>,
    pub description: Option<String>,
    pub kind: Option<String>,
    pub duration: Option<String>,
    pub creator: Option<String>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
    pub category: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MediaFilter {
    pub kind: Option<String>,
    pub published: Option<bool>,
    pub featured_only: bool,
}

#[async_trait]
pub trait MediaRepository: Send + Sync {
    async fn insert(&self, item: NewMediaItem) -> DomainResult<MediaItem>;
    async fn update(&self, id: MediaId, update: MediaUpdate) -> DomainResult<MediaItem>;
    async fn delete(&self, id: MediaId) -> DomainResult<()>;
    async fn find_by_id(&self, id: MediaId) -> DomainResult<Option<MediaItem>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<MediaItem>>;
    async fn list(
        &self,
        filter: &MediaFilter,
        limit: Option<u32>,
        offset: u32,
    ) -> DomainResult<(Vec<MediaItem>, u64)>;
    async fn distinct_kinds(&self) -> DomainResult<Vec<String>>;
    /// View-counter bump on public slug fetches.
    async fn increment_views(&self, id: MediaId) -> DomainResult<()>;
}
