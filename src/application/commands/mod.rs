pub mod blogs;
pub mod comments;
pub mod events;
pub mod gallery;
pub mod ideas;
pub mod media;
pub mod stories;
pub mod submissions;
pub mod subscriptions;
pub mod users;

use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

/// Mutations on site content are admin-only.
pub(crate) fn ensure_admin(actor: &AuthenticatedUser) -> ApplicationResult<()> {
    if actor.is_admin() {
        Ok(())
    } else {
        Err(ApplicationError::forbidden("admin role required"))
    }
}

pub(crate) fn require_field(value: &str, name: &str) -> ApplicationResult<()> {
    if value.trim().is_empty() {
        Err(ApplicationError::validation(format!("{name} is required")))
    } else {
        Ok(())
    }
}
