use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::subscription::{Subscription, SubscriptionRepository, SubscriptionStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SubscriptionRow {
    id: i64,
    email: String,
    status: String,
    subscribed_at: DateTime<Utc>,
}

impl TryFrom<SubscriptionRow> for Subscription {
    type Error = DomainError;

    fn try_from(row: SubscriptionRow) -> Result<Self, Self::Error> {
        Ok(Subscription {
            id: row.id,
            email: row.email,
            status: row.status.parse::<SubscriptionStatus>()?,
            subscribed_at: row.subscribed_at,
        })
    }
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn insert(&self, email: &str) -> DomainResult<Subscription> {
        let row = sqlx::query_as::<_, SubscriptionRow>(
            "INSERT INTO subscriptions (email)
             VALUES ($1)
             RETURNING id, email, status, subscribed_at",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Subscription::try_from(row)
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Subscription>> {
        let row = sqlx::query_as::<_, SubscriptionRow>(
            "SELECT id, email, status, subscribed_at FROM subscriptions WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Subscription::try_from).transpose()
    }

    async fn list(&self, status: Option<SubscriptionStatus>) -> DomainResult<Vec<Subscription>> {
        let rows = match status {
            Some(status) => {
                sqlx::query_as::<_, SubscriptionRow>(
                    "SELECT id, email, status, subscribed_at FROM subscriptions
                     WHERE status = $1 ORDER BY subscribed_at DESC, id DESC",
                )
                .bind(status.as_str())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, SubscriptionRow>(
                    "SELECT id, email, status, subscribed_at FROM subscriptions
                     ORDER BY subscribed_at DESC, id DESC",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_sqlx)?;

        rows.into_iter().map(Subscription::try_from).collect()
    }

    async fn set_status(&self, id: i64, status: SubscriptionStatus) -> DomainResult<Subscription> {
        let row = sqlx::query_as::<_, SubscriptionRow>(
            "UPDATE subscriptions SET status = $2 WHERE id = $1
             RETURNING id, email, status, subscribed_at",
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("subscription not found".into()))?;

        Subscription::try_from(row)
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM subscriptions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("subscription not found".into()));
        }
        Ok(())
    }
}
