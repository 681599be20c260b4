use super::{ensure_admin, require_field};
use crate::{
    application::{
        dto::{AuthenticatedUser, GalleryItemDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::gallery::{GalleryItemUpdate, GalleryRepository, NewGalleryItem},
};
use std::sync::Arc;

pub struct CreateGalleryItemCommand {
    pub title: String,
    pub category: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

#[derive(Default)]
pub struct UpdateGalleryItemCommand {
    pub title: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

pub struct GalleryCommandService {
    repo: Arc<dyn GalleryRepository>,
}

impl GalleryCommandService {
    pub fn new(repo: Arc<dyn GalleryRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_item(
        &self,
        actor: &AuthenticatedUser,
        command: CreateGalleryItemCommand,
    ) -> ApplicationResult<GalleryItemDto> {
        ensure_admin(actor)?;
        require_field(&command.title, "title")?;
        require_field(&command.category, "category")?;

        let created = self
            .repo
            .insert(NewGalleryItem {
                title: command.title,
                category: command.category,
                image_url: command.image_url,
                description: command.description,
            })
            .await?;
        Ok(created.into())
    }

    pub async fn update_item(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        command: UpdateGalleryItemCommand,
    ) -> ApplicationResult<GalleryItemDto> {
        ensure_admin(actor)?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("gallery item not found"))?;

        let updated = self
            .repo
            .update(
                id,
                GalleryItemUpdate {
                    title: command.title,
                    category: command.category,
                    image_url: command.image_url,
                    description: command.description,
                },
            )
            .await?;
        Ok(updated.into())
    }

    pub async fn delete_item(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        ensure_admin(actor)?;
        self.repo.delete(id).await?;
        Ok(())
    }
}
