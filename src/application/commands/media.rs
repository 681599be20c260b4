use super::{ensure_admin, require_field};
use crate::{
    application::{
        dto::{AuthenticatedUser, MediaDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        media::{MediaId, MediaRepository, MediaUpdate, NewMediaItem},
        slug::{SlugAssigner, SlugScope, Title},
    },
};
use std::sync::Arc;

pub struct CreateMediaCommand {
    pub title: String,
    pub description: String,
    pub kind: String,
    pub duration: String,
    pub creator: String,
    pub featured: bool,
    pub published: bool,
    pub category: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

#[derive(Default)]
pub struct UpdateMediaCommand {
    pub title: Option<String>,
    pub description: Option<String>,
    pub kind: Option<String>,
    pub duration: Option<String>,
    pub creator: Option<String>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
    pub category: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

pub struct MediaCommandService {
    repo: Arc<dyn MediaRepository>,
    slugs: Arc<SlugAssigner>,
}

impl MediaCommandService {
    pub fn new(repo: Arc<dyn MediaRepository>, slugs: Arc<SlugAssigner>) -> Self {
        Self { repo, slugs }
    }

    pub async fn create_media(
        &self,
        actor: &AuthenticatedUser,
        command: CreateMediaCommand,
    ) -> ApplicationResult<MediaDto> {
        ensure_admin(actor)?;

        require_field(&command.description, "description")?;
        require_field(&command.kind, "type")?;
        require_field(&command.duration, "duration")?;
        require_field(&command.creator, "creator")?;

        let title = Title::new(command.title)?;
        let slug = self.slugs.assign(&title, SlugScope::Media, None).await?;

        let created = self
            .repo
            .insert(NewMediaItem {
                title,
                slug,
                description: command.description,
                kind: command.kind,
                duration: command.duration,
                creator: command.creator,
                featured: command.featured,
                published: command.published,
                category: command.category,
                video_url: command.video_url,
                thumbnail_url: command.thumbnail_url,
            })
            .await?;
        Ok(created.into())
    }

    pub async fn update_media(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        command: UpdateMediaCommand,
    ) -> ApplicationResult<MediaDto> {
        ensure_admin(actor)?;

        let id = MediaId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("media item not found"))?;

        let mut update = MediaUpdate {
            description: command.description,
            kind: command.kind,
            duration: command.duration,
            creator: command.creator,
            featured: command.featured,
            published: command.published,
            category: command.category,
            video_url: command.video_url,
            thumbnail_url: command.thumbnail_url,
            ..MediaUpdate::default()
        };

        if let Some(title) = command.title {
            let title = Title::new(title)?;
            let slug = self
                .slugs
                .assign(&title, SlugScope::Media, Some(id.into()))
                .await?;
            update.title = Some(title);
            update.slug = Some(slug);
        }

        let updated = self.repo.update(id, update).await?;
        Ok(updated.into())
    }

    pub async fn delete_media(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        ensure_admin(actor)?;
        self.repo.delete(MediaId::new(id)?).await?;
        Ok(())
    }
}
