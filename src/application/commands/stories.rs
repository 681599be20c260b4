use super::{ensure_admin, require_field};
use crate::{
    application::{
        dto::{AuthenticatedUser, StoryDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::story::{NewStory, StoryRepository, StoryUpdate},
};
use std::sync::Arc;

pub struct CreateStoryCommand {
    pub title: String,
    pub excerpt: String,
    pub content: Option<String>,
    pub image: Option<String>,
    pub is_featured: bool,
    pub read_time: String,
    pub author: String,
    pub category: String,
    pub kind: Option<String>,
}

#[derive(Default)]
pub struct UpdateStoryCommand {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub is_featured: Option<bool>,
    pub read_time: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub kind: Option<String>,
}

pub struct StoryCommandService {
    repo: Arc<dyn StoryRepository>,
    clock: Arc<dyn Clock>,
}

impl StoryCommandService {
    pub fn new(repo: Arc<dyn StoryRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn create_story(
        &self,
        actor: &AuthenticatedUser,
        command: CreateStoryCommand,
    ) -> ApplicationResult<StoryDto> {
        ensure_admin(actor)?;

        require_field(&command.title, "title")?;
        require_field(&command.excerpt, "excerpt")?;
        require_field(&command.read_time, "read time")?;
        require_field(&command.author, "author")?;
        require_field(&command.category, "category")?;

        let created = self
            .repo
            .insert(NewStory {
                title: command.title,
                excerpt: command.excerpt,
                content: command.content,
                image: command.image,
                is_featured: command.is_featured,
                read_time: command.read_time,
                author: command.author,
                published_date: self.clock.now(),
                category: command.category,
                kind: command.kind,
            })
            .await?;
        Ok(created.into())
    }

    pub async fn update_story(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        command: UpdateStoryCommand,
    ) -> ApplicationResult<StoryDto> {
        ensure_admin(actor)?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("story not found"))?;

        let updated = self
            .repo
            .update(
                id,
                StoryUpdate {
                    title: command.title,
                    excerpt: command.excerpt,
                    content: command.content,
                    image: command.image,
                    is_featured: command.is_featured,
                    read_time: command.read_time,
                    author: command.author,
                    category: command.category,
                    kind: command.kind,
                },
            )
            .await?;
        Ok(updated.into())
    }

    pub async fn delete_story(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        ensure_admin(actor)?;
        self.repo.delete(id).await?;
        Ok(())
    }
}
