use crate::{
    application::{
        commands::ensure_admin,
        dto::{AuthenticatedUser, CommentDto, Page},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        blog::{BlogId, BlogRepository},
        comment::CommentRepository,
    },
};
use std::sync::Arc;

pub struct CommentQueryService {
    comments: Arc<dyn CommentRepository>,
    blogs: Arc<dyn BlogRepository>,
}

impl CommentQueryService {
    pub fn new(comments: Arc<dyn CommentRepository>, blogs: Arc<dyn BlogRepository>) -> Self {
        Self { comments, blogs }
    }

    pub async fn list_for_blog(
        &self,
        blog_id: i64,
        page: u32,
        limit: u32,
    ) -> ApplicationResult<Page<CommentDto>> {
        let blog_id = self.existing_blog(blog_id).await?;
        let page = page.max(1);
        let limit = limit.clamp(1, 100);
        let offset = (page - 1) * limit;

        let (comments, total) = self.comments.list_for_blog(blog_id, limit, offset).await?;
        let items = comments.into_iter().map(Into::into).collect();
        Ok(Page::new(items, total, page, Some(limit)))
    }

    pub async fn count_for_blog(&self, blog_id: i64) -> ApplicationResult<u64> {
        let blog_id = self.existing_blog(blog_id).await?;
        Ok(self.comments.count_for_blog(blog_id).await?)
    }

    pub async fn list_all(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<CommentDto>> {
        ensure_admin(actor)?;
        let comments = self.comments.list_all().await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }

    async fn existing_blog(&self, blog_id: i64) -> ApplicationResult<BlogId> {
        let blog_id = BlogId::new(blog_id)?;
        self.blogs
            .find_by_id(blog_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("blog not found"))?;
        Ok(blog_id)
    }
}
