use crate::{
    application::{
        dto::{IdeaDto, Page, page_offset},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        idea::{IdeaFilter, IdeaId, IdeaRepository, IdeaStatus},
        slug::Slug,
    },
};
use std::sync::Arc;

pub struct ListIdeasQuery {
    pub category: Option<String>,
    pub status: Option<IdeaStatus>,
    pub published: Option<bool>,
    pub limit: Option<u32>,
    pub page: u32,
}

pub struct IdeaQueryService {
    repo: Arc<dyn IdeaRepository>,
}

impl IdeaQueryService {
    pub fn new(repo: Arc<dyn IdeaRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_ideas(&self, query: ListIdeasQuery) -> ApplicationResult<Page<IdeaDto>> {
        let filter = IdeaFilter {
            category: query.category.filter(|c| c != "all"),
            status: query.status,
            published: query.published,
        };
        let page = query.page.max(1);
        let offset = page_offset(page, query.limit);

        let (ideas, total) = self.repo.list(&filter, query.limit, offset).await?;
        let items = ideas.into_iter().map(Into::into).collect();
        Ok(Page::new(items, total, page, query.limit))
    }

    pub async fn get_idea(&self, id: i64) -> ApplicationResult<IdeaDto> {
        let idea = self
            .repo
            .find_by_id(IdeaId::new(id)?)
            .await?
            .ok_or_else(|| ApplicationError::not_found("idea not found"))?;
        Ok(idea.into())
    }

    pub async fn get_idea_by_slug(&self, slug: &str) -> ApplicationResult<IdeaDto> {
        let slug = Slug::new(slug)?;
        let idea = self
            .repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("idea not found"))?;
        Ok(idea.into())
    }

    pub async fn categories(&self) -> ApplicationResult<Vec<String>> {
        Ok(self.repo.distinct_categories().await?)
    }
}
