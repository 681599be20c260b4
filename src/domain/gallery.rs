use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct GalleryItem {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewGalleryItem {
    pub title: String,
    pub category: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GalleryItemUpdate {
    pub title: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

#[async_trait]
pub trait GalleryRepository: Send + Sync {
    async fn insert(&self, item: NewGalleryItem) -> DomainResult<GalleryItem>;
    async fn update(&self, id: i64, update: GalleryItemUpdate) -> DomainResult<GalleryItem>;
    async fn delete(&self, id: i64) -> DomainResult<()>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<GalleryItem>>;
    async fn list(&self, category: Option<&str>) -> DomainResult<Vec<GalleryItem>>;
    async fn distinct_categories(&self) -> DomainResult<Vec<String>>;
}
