use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::gallery::{GalleryItem, GalleryItemUpdate, GalleryRepository, NewGalleryItem};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresGalleryRepository {
    pool: PgPool,
}

impl PostgresGalleryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct GalleryRow {
    id: i64,
    title: String,
    category: String,
    image_url: Option<String>,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<GalleryRow> for GalleryItem {
    fn from(row: GalleryRow) -> Self {
        GalleryItem {
            id: row.id,
            title: row.title,
            category: row.category,
            image_url: row.image_url,
            description: row.description,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl GalleryRepository for PostgresGalleryRepository {
    async fn insert(&self, item: NewGalleryItem) -> DomainResult<GalleryItem> {
        let row = sqlx::query_as::<_, GalleryRow>(
            "INSERT INTO gallery_items (title, category, image_url, description)
             VALUES ($1, $2, $3, $4)
             RETURNING id, title, category, image_url, description, created_at",
        )
        .bind(item.title)
        .bind(item.category)
        .bind(item.image_url)
        .bind(item.description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, update: GalleryItemUpdate) -> DomainResult<GalleryItem> {
        let row = sqlx::query_as::<_, GalleryRow>(
            "UPDATE gallery_items SET
                 title = COALESCE($2, title),
                 category = COALESCE($3, category),
                 image_url = COALESCE($4, image_url),
                 description = COALESCE($5, description)
             WHERE id = $1
             RETURNING id, title, category, image_url, description, created_at",
        )
        .bind(id)
        .bind(update.title)
        .bind(update.category)
        .bind(update.image_url)
        .bind(update.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("gallery item not found".into()))?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM gallery_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("gallery item not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<GalleryItem>> {
        let row = sqlx::query_as::<_, GalleryRow>(
            "SELECT id, title, category, image_url, description, created_at
             FROM gallery_items WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(GalleryItem::from))
    }

    async fn list(&self, category: Option<&str>) -> DomainResult<Vec<GalleryItem>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT id, title, category, image_url, description, created_at FROM gallery_items",
        );
        if let Some(category) = category {
            builder.push(" WHERE category = ");
            builder.push_bind(category.to_owned());
        }
        builder.push(" ORDER BY created_at DESC, id DESC");

        let rows = builder
            .build_query_as::<GalleryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(GalleryItem::from).collect())
    }

    async fn distinct_categories(&self) -> DomainResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM gallery_items ORDER BY category",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}
