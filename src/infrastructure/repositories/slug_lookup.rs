use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::slug::{SlugLookup, SlugScope};
use async_trait::async_trait;
use sqlx::PgPool;

/// Slug existence probe backed by the per-scope content tables.
#[derive(Clone)]
pub struct PostgresSlugLookup {
    pool: PgPool,
}

impl PostgresSlugLookup {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlugLookup for PostgresSlugLookup {
    async fn exists(
        &self,
        scope: SlugScope,
        candidate: &str,
        exclude_id: Option<i64>,
    ) -> DomainResult<bool> {
        // Table name comes from the scope enum, never from user input.
        let table = scope.as_str();
        let found: bool = sqlx::query_scalar(&format!(
            "SELECT EXISTS (SELECT 1 FROM {table} WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2))"
        ))
        .bind(candidate)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(found)
    }
}
