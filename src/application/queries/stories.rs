use crate::{
    application::{
        dto::StoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::story::StoryRepository,
};
use std::sync::Arc;

pub struct StoryQueryService {
    repo: Arc<dyn StoryRepository>,
}

impl StoryQueryService {
    pub fn new(repo: Arc<dyn StoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_stories(&self, category: Option<&str>) -> ApplicationResult<Vec<StoryDto>> {
        let category = category.filter(|c| *c != "all");
        let stories = self.repo.list(category).await?;
        Ok(stories.into_iter().map(Into::into).collect())
    }

    pub async fn get_story(&self, id: i64) -> ApplicationResult<StoryDto> {
        let story = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("story not found"))?;
        Ok(story.into())
    }

    pub async fn categories(&self) -> ApplicationResult<Vec<String>> {
        Ok(self.repo.distinct_categories().await?)
    }
}
