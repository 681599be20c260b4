use crate::{
    application::{
        dto::GalleryItemDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::gallery::GalleryRepository,
};
use std::sync::Arc;

pub struct GalleryQueryService {
    repo: Arc<dyn GalleryRepository>,
}

impl GalleryQueryService {
    pub fn new(repo: Arc<dyn GalleryRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_items(&self, category: Option<&str>) -> ApplicationResult<Vec<GalleryItemDto>> {
        let category = category.filter(|c| *c != "all");
        let items = self.repo.list(category).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn get_item(&self, id: i64) -> ApplicationResult<GalleryItemDto> {
        let item = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("gallery item not found"))?;
        Ok(item.into())
    }

    pub async fn categories(&self) -> ApplicationResult<Vec<String>> {
        Ok(self.repo.distinct_categories().await?)
    }
}
