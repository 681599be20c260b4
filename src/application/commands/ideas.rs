use super::{ensure_admin, require_field};
use crate::{
    application::{
        dto::{AuthenticatedUser, IdeaDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        idea::{IdeaId, IdeaRepository, IdeaStatus, IdeaUpdate, NewIdea},
        slug::{SlugAssigner, SlugScope, Title},
    },
};
use std::sync::Arc;

pub struct CreateIdeaCommand {
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: Option<IdeaStatus>,
    pub author: String,
    pub published: bool,
}

#[derive(Default)]
pub struct UpdateIdeaCommand {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<IdeaStatus>,
    pub author: Option<String>,
    pub published: Option<bool>,
}

pub struct IdeaCommandService {
    repo: Arc<dyn IdeaRepository>,
    slugs: Arc<SlugAssigner>,
}

impl IdeaCommandService {
    pub fn new(repo: Arc<dyn IdeaRepository>, slugs: Arc<SlugAssigner>) -> Self {
        Self { repo, slugs }
    }

    pub async fn create_idea(
        &self,
        actor: &AuthenticatedUser,
        command: CreateIdeaCommand,
    ) -> ApplicationResult<IdeaDto> {
        ensure_admin(actor)?;

        require_field(&command.description, "description")?;
        require_field(&command.category, "category")?;
        require_field(&command.author, "author")?;

        let title = Title::new(command.title)?;
        let slug = self.slugs.assign(&title, SlugScope::Idea, None).await?;

        let created = self
            .repo
            .insert(NewIdea {
                title,
                slug,
                description: command.description,
                category: command.category,
                status: command.status.unwrap_or_default(),
                author: command.author,
                published: command.published,
            })
            .await?;
        Ok(created.into())
    }

    pub async fn update_idea(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        command: UpdateIdeaCommand,
    ) -> ApplicationResult<IdeaDto> {
        ensure_admin(actor)?;

        let id = IdeaId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("idea not found"))?;

        let mut update = IdeaUpdate {
            description: command.description,
            category: command.category,
            status: command.status,
            author: command.author,
            published: command.published,
            ..IdeaUpdate::default()
        };

        if let Some(title) = command.title {
            let title = Title::new(title)?;
            let slug = self
                .slugs
                .assign(&title, SlugScope::Idea, Some(id.into()))
                .await?;
            update.title = Some(title);
            update.slug = Some(slug);
        }

        let updated = self.repo.update(id, update).await?;
        Ok(updated.into())
    }

    pub async fn delete_idea(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        ensure_admin(actor)?;
        self.repo.delete(IdeaId::new(id)?).await?;
        Ok(())
    }

    /// Public like button; no auth required.
    pub async fn like_idea(&self, id: i64) -> ApplicationResult<IdeaDto> {
        let liked = self.repo.increment_likes(IdeaId::new(id)?).await?;
        Ok(liked.into())
    }
}
