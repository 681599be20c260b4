use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Active,
    Unsubscribed,
}

impl SubscriptionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Unsubscribed => "unsubscribed",
        }
    }
}

impl FromStr for SubscriptionStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "unsubscribed" => Ok(Self::Unsubscribed),
            other => Err(DomainError::Validation(format!(
                "unknown subscription status: {other}"
            ))),
        }
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Subscription {
    pub id: i64,
    pub email: String,
    pub status: SubscriptionStatus,
    pub subscribed_at: DateTime<Utc>,
}

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Inserting a duplicate email surfaces `DomainError::Conflict` from the
    /// unique constraint.
    async fn insert(&self, email: &str) -> DomainResult<Subscription>;
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Subscription>>;
    async fn list(&self, status: Option<SubscriptionStatus>) -> DomainResult<Vec<Subscription>>;
    async fn set_status(&self, id: i64, status: SubscriptionStatus) -> DomainResult<Subscription>;
    async fn delete(&self, id: i64) -> DomainResult<()>;
}
