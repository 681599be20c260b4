use super::ensure_admin;
use crate::{
    application::{
        dto::{AuthenticatedUser, SubscriptionDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        subscription::{SubscriptionRepository, SubscriptionStatus},
        user::EmailAddress,
    },
};
use std::sync::Arc;

pub struct SubscriptionCommandService {
    repo: Arc<dyn SubscriptionRepository>,
}

impl SubscriptionCommandService {
    pub fn new(repo: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repo }
    }

    /// Public newsletter signup. An already-subscribed email is a conflict;
    /// the unique constraint backstops the pre-check under races.
    pub async fn subscribe(&self, email: &str) -> ApplicationResult<SubscriptionDto> {
        let email = EmailAddress::new(email)?;

        if self.repo.find_by_email(email.as_str()).await?.is_some() {
            return Err(ApplicationError::conflict("email already subscribed"));
        }

        let created = self.repo.insert(email.as_str()).await?;
        tracing::info!(subscription_id = created.id, "newsletter subscription added");
        Ok(created.into())
    }

    pub async fn set_status(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        status: SubscriptionStatus,
    ) -> ApplicationResult<SubscriptionDto> {
        ensure_admin(actor)?;
        let updated = self.repo.set_status(id, status).await?;
        Ok(updated.into())
    }

    pub async fn delete(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        ensure_admin(actor)?;
        self.repo.delete(id).await?;
        Ok(())
    }
}
