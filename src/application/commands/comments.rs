use super::{ensure_admin, require_field};
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        blog::{BlogId, BlogRepository},
        comment::{CommentRepository, CommentUpdate, NewComment},
    },
};
use std::sync::Arc;

pub struct CreateCommentCommand {
    pub blog_id: i64,
    pub name: String,
    pub email: String,
    pub profile_image: Option<String>,
    pub body: String,
}

#[derive(Default)]
pub struct UpdateCommentCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    pub profile_image: Option<String>,
    pub body: Option<String>,
}

pub struct CommentCommandService {
    comments: Arc<dyn CommentRepository>,
    blogs: Arc<dyn BlogRepository>,
}

impl CommentCommandService {
    pub fn new(comments: Arc<dyn CommentRepository>, blogs: Arc<dyn BlogRepository>) -> Self {
        Self { comments, blogs }
    }

    /// Public endpoint; comments await moderation before listing.
    pub async fn create_comment(
        &self,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        require_field(&command.name, "name")?;
        require_field(&command.email, "email")?;
        require_field(&command.body, "comment")?;

        let blog_id = BlogId::new(command.blog_id)?;
        self.blogs
            .find_by_id(blog_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("blog not found"))?;

        let created = self
            .comments
            .insert(NewComment {
                blog_id,
                name: command.name,
                email: command.email,
                profile_image: command.profile_image,
                body: command.body,
                is_approved: false,
            })
            .await?;
        Ok(created.into())
    }

    /// Moderation edit; untouched fields keep their stored value.
    pub async fn update_comment(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        command: UpdateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        ensure_admin(actor)?;
        if let Some(body) = &command.body {
            require_field(body, "comment")?;
        }
        let updated = self
            .comments
            .update(
                id,
                CommentUpdate {
                    name: command.name,
                    email: command.email,
                    profile_image: command.profile_image,
                    body: command.body,
                },
            )
            .await?;
        Ok(updated.into())
    }

    pub async fn set_approved(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        approved: bool,
    ) -> ApplicationResult<CommentDto> {
        ensure_admin(actor)?;
        let updated = self.comments.set_approved(id, approved).await?;
        Ok(updated.into())
    }

    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<()> {
        ensure_admin(actor)?;
        self.comments.delete(id).await?;
        Ok(())
    }
}
