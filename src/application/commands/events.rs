use super::{ensure_admin, require_field};
use crate::{
    application::{
        dto::{AuthenticatedUser, EventDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        event::{EventId, EventRepository, EventUpdate, NewEvent},
        slug::{SlugAssigner, SlugScope, Title},
    },
};
use chrono::NaiveDate;
use std::sync::Arc;

pub struct CreateEventCommand {
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub category: String,
    pub description: String,
    pub image: Option<String>,
}

#[derive(Default)]
pub struct UpdateEventCommand {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

pub struct EventCommandService {
    repo: Arc<dyn EventRepository>,
    slugs: Arc<SlugAssigner>,
}

impl EventCommandService {
    pub fn new(repo: Arc<dyn EventRepository>, slugs: Arc<SlugAssigner>) -> Self {
        Self { repo, slugs }
    }

    pub async fn create_event(
        &self,
        actor: &AuthenticatedUser,
        command: CreateEventCommand,
    ) -> ApplicationResult<EventDto> {
        ensure_admin(actor)?;

        require_field(&command.time, "time")?;
        require_field(&command.location, "location")?;
        require_field(&command.category, "category")?;
        require_field(&command.description, "description")?;

        let title = Title::new(command.title)?;
        let slug = self.slugs.assign(&title, SlugScope::Event, None).await?;

        let created = self
            .repo
            .insert(NewEvent {
                title,
                slug,
                date: command.date,
                time: command.time,
                location: command.location,
                category: command.category,
                description: command.description,
                image: command.image,
            })
            .await?;
        Ok(created.into())
    }

    pub async fn update_event(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        command: UpdateEventCommand,
    ) -> ApplicationResult<EventDto> {
        ensure_admin(actor)?;

        let id = EventId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("event not found"))?;

        let mut update = EventUpdate {
            date: command.date,
            time: command.time,
            location: command.location,
            category: command.category,
            description: command.description,
            image: command.image,
            ..EventUpdate::default()
        };

        if let Some(title) = command.title {
            let title = Title::new(title)?;
            let slug = self
                .slugs
                .assign(&title, SlugScope::Event, Some(id.into()))
                .await?;
            update.title = Some(title);
            update.slug = Some(slug);
        }

        let updated = self.repo.update(id, update).await?;
        Ok(updated.into())
    }

    pub async fn delete_event(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        ensure_admin(actor)?;
        self.repo.delete(EventId::new(id)?).await?;
        Ok(())
    }
}
