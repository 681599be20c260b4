use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, Title};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlogId(pub i64);

impl BlogId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("blog id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<BlogId> for i64 {
    fn from(value: BlogId) -> Self {
        value.0
    }
}

/// One body section of a blog post, stored as JSON alongside the post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogSection {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl BlogSection {
    /// Sections without both a title and content are dropped on update.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Blog {
    pub id: BlogId,
    pub title: Title,
    pub slug: Slug,
    pub excerpt: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub is_featured: bool,
    pub tags: Vec<String>,
    pub read_time: String,
    pub sections: Vec<BlogSection>,
    pub author_name: String,
    pub author_bio: Option<String>,
    pub published_date: DateTime<Utc>,
    pub category: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub seo_keywords: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: Title,
    pub slug: Slug,
    pub excerpt: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub is_featured: bool,
    pub tags: Vec<String>,
    pub read_time: String,
    pub sections: Vec<BlogSection>,
    pub author_name: String,
    pub author_bio: Option<String>,
    pub published_date: DateTime<Utc>,
    pub category: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub seo_keywords: Option<String>,
}

/// Partial update; `slug` is set only when the title changed.
#[derive(Debug, Clone, Default)]
pub struct BlogUpdate {
    pub title: Option<Title>,
    pub slug: Option<Slug>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub featured_image: Option<Option<String>>,
    pub is_featured: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub read_time: Option<String>,
    pub sections: Option<Vec<BlogSection>>,
    pub author_name: Option<String>,
    pub author_bio: Option<String>,
    pub category: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub seo_keywords: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct BlogFilter {
    pub category: Option<String>,
    pub featured_only: bool,
}

#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn insert(&self, blog: NewBlog) -> DomainResult<Blog>;
    async fn update(&self, id: BlogId, update: BlogUpdate) -> DomainResult<Blog>;
    async fn delete(&self, id: BlogId) -> DomainResult<()>;
    async fn find_by_id(&self, id: BlogId) -> DomainResult<Option<Blog>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Blog>>;
    /// Featured-first, newest-first page plus the unpaged total.
    async fn list(
        &self,
        filter: &BlogFilter,
        limit: Option<u32>,
        offset: u32,
    ) -> DomainResult<(Vec<Blog>, u64)>;
    async fn distinct_categories(&self) -> DomainResult<Vec<String>>;
}
