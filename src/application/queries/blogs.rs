use crate::{
    application::{
        dto::{BlogDto, Page, page_offset},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        blog::{BlogFilter, BlogId, BlogRepository},
        slug::Slug,
    },
};
use std::sync::Arc;

pub struct ListBlogsQuery {
    pub category: Option<String>,
    pub featured_only: bool,
    pub limit: Option<u32>,
    pub page: u32,
}

pub struct BlogQueryService {
    repo: Arc<dyn BlogRepository>,
}

impl BlogQueryService {
    pub fn new(repo: Arc<dyn BlogRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_blogs(&self, query: ListBlogsQuery) -> ApplicationResult<Page<BlogDto>> {
        let filter = BlogFilter {
            category: query.category.filter(|c| c != "all"),
            featured_only: query.featured_only,
        };
        let page = query.page.max(1);
        let offset = page_offset(page, query.limit);

        let (blogs, total) = self.repo.list(&filter, query.limit, offset).await?;
        let items = blogs.into_iter().map(Into::into).collect();
        Ok(Page::new(items, total, page, query.limit))
    }

    pub async fn get_blog(&self, id: i64) -> ApplicationResult<BlogDto> {
        let blog = self
            .repo
            .find_by_id(BlogId::new(id)?)
            .await?
            .ok_or_else(|| ApplicationError::not_found("blog not found"))?;
        Ok(blog.into())
    }

    pub async fn get_blog_by_slug(&self, slug: &str) -> ApplicationResult<BlogDto> {
        let slug = Slug::new(slug)?;
        let blog = self
            .repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("blog not found"))?;
        Ok(blog.into())
    }

    pub async fn categories(&self) -> ApplicationResult<Vec<String>> {
        Ok(self.repo.distinct_categories().await?)
    }
}
