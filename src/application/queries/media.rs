use crate::{
    application::{
        dto::{MediaDto, Page, page_offset},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        media::{MediaFilter, MediaId, MediaRepository},
        slug::Slug,
    },
};
use std::sync::Arc;

pub struct ListMediaQuery {
    pub kind: Option<String>,
    pub published: Option<bool>,
    pub featured_only: bool,
    pub limit: Option<u32>,
    pub page: u32,
}

pub struct MediaQueryService {
    repo: Arc<dyn MediaRepository>,
}

impl MediaQueryService {
    pub fn new(repo: Arc<dyn MediaRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_media(&self, query: ListMediaQuery) -> ApplicationResult<Page<MediaDto>> {
        let filter = MediaFilter {
            kind: query.kind.filter(|k| k != "all"),
            published: query.published,
            featured_only: query.featured_only,
        };
        let page = query.page.max(1);
        let offset = page_offset(page, query.limit);

        let (items, total) = self.repo.list(&filter, query.limit, offset).await?;
        let items = items.into_iter().map(Into::into).collect();
        Ok(Page::new(items, total, page, query.limit))
    }

    pub async fn get_media(&self, id: i64) -> ApplicationResult<MediaDto> {
        let item = self
            .repo
            .find_by_id(MediaId::new(id)?)
            .await?
            .ok_or_else(|| ApplicationError::not_found("media item not found"))?;
        Ok(item.into())
    }

    /// Public slug fetch; bumps the view counter before returning.
    pub async fn get_media_by_slug(&self, slug: &str) -> ApplicationResult<MediaDto> {
        let slug = Slug::new(slug)?;
        let mut item = self
            .repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("media item not found"))?;

        self.repo.increment_views(item.id).await?;
        item.views += 1;
        Ok(item.into())
    }

    pub async fn kinds(&self) -> ApplicationResult<Vec<String>> {
        Ok(self.repo.distinct_kinds().await?)
    }
}
