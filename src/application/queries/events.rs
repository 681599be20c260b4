use crate::{
    application::{
        dto::EventDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        event::{EventId, EventRepository},
        slug::Slug,
    },
};
use std::sync::Arc;

pub struct EventQueryService {
    repo: Arc<dyn EventRepository>,
}

impl EventQueryService {
    pub fn new(repo: Arc<dyn EventRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_events(&self) -> ApplicationResult<Vec<EventDto>> {
        let events = self.repo.list().await?;
        Ok(events.into_iter().map(Into::into).collect())
    }

    pub async fn get_event(&self, id: i64) -> ApplicationResult<EventDto> {
        let event = self
            .repo
            .find_by_id(EventId::new(id)?)
            .await?
            .ok_or_else(|| ApplicationError::not_found("event not found"))?;
        Ok(event.into())
    }

    pub async fn get_event_by_slug(&self, slug: &str) -> ApplicationResult<EventDto> {
        let slug = Slug::new(slug)?;
        let event = self
            .repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("event not found"))?;
        Ok(event.into())
    }
}
