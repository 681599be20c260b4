use crate::{
    application::{
        commands::ensure_admin,
        dto::{AuthenticatedUser, SubscriptionDto},
        error::ApplicationResult,
    },
    domain::subscription::{SubscriptionRepository, SubscriptionStatus},
};
use std::sync::Arc;

pub struct SubscriptionQueryService {
    repo: Arc<dyn SubscriptionRepository>,
}

impl SubscriptionQueryService {
    pub fn new(repo: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(
        &self,
        actor: &AuthenticatedUser,
        status: Option<SubscriptionStatus>,
    ) -> ApplicationResult<Vec<SubscriptionDto>> {
        ensure_admin(actor)?;
        let subscriptions = self.repo.list(status).await?;
        Ok(subscriptions.into_iter().map(Into::into).collect())
    }
}
