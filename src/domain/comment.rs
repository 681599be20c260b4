use crate::domain::blog::BlogId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: i64,
    pub blog_id: BlogId,
    pub name: String,
    pub email: String,
    pub profile_image: Option<String>,
    pub body: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub blog_id: BlogId,
    pub name: String,
    pub email: String,
    pub profile_image: Option<String>,
    pub body: String,
    pub is_approved: bool,
}

/// Partial update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct CommentUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub profile_image: Option<String>,
    pub body: Option<String>,
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn update(&self, id: i64, update: CommentUpdate) -> DomainResult<Comment>;
    async fn delete(&self, id: i64) -> DomainResult<()>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Comment>>;
    /// Approved comments for a blog, newest first, plus the approved total.
    async fn list_for_blog(
        &self,
        blog_id: BlogId,
        limit: u32,
        offset: u32,
    ) -> DomainResult<(Vec<Comment>, u64)>;
    async fn count_for_blog(&self, blog_id: BlogId) -> DomainResult<u64>;
    /// Every comment regardless of approval, newest first.
    async fn list_all(&self) -> DomainResult<Vec<Comment>>;
    async fn set_approved(&self, id: i64, approved: bool) -> DomainResult<Comment>;
}
