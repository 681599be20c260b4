use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Story {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub content: Option<String>,
    pub image: Option<String>,
    pub is_featured: bool,
    pub read_time: String,
    pub author: String,
    pub published_date: DateTime<Utc>,
    pub category: String,
    pub kind: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewStory {
    pub title: String,
    pub excerpt: String,
    pub content: Option<String>,
    pub image: Option<String>,
    pub is_featured: bool,
    pub read_time: String,
    pub author: String,
    pub published_date: DateTime<Utc>,
    pub category: String,
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct StoryUpdate {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub is_featured: Option<bool>,
    pub read_time: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub kind: Option<String>,
}

#[async_trait]
pub trait StoryRepository: Send + Sync {
    async fn insert(&self, story: NewStory) -> DomainResult<Story>;
    async fn update(&self, id: i64, update: StoryUpdate) -> DomainResult<Story>;
    async fn delete(&self, id: i64) -> DomainResult<()>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Story>>;
    /// Featured-first, newest-first, optionally filtered by category.
    async fn list(&self, category: Option<&str>) -> DomainResult<Vec<Story>>;
    async fn distinct_categories(&self) -> DomainResult<Vec<String>>;
}
