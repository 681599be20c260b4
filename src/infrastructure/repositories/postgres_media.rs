use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::media::{
    MediaFilter, MediaId, MediaItem, MediaRepository, MediaUpdate, NewMediaItem,
};
use crate::domain::slug::{Slug, Title};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const MEDIA_COLUMNS: &str = "id, title, slug, description, kind, views, duration, creator, \
     featured, published, category, video_url, thumbnail_url, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresMediaRepository {
    pool: PgPool,
}

impl PostgresMediaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MediaRow {
    id: i64,
    title: String,
    slug: String,
    description: String,
    kind: String,
    views: i64,
    duration: String,
    creator: String,
    featured: bool,
    published: bool,
    category: Option<String>,
    video_url: Option<String>,
    thumbnail_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<MediaRow> for MediaItem {
    type Error = DomainError;

    fn try_from(row: MediaRow) -> Result<Self, Self::Error> {
        Ok(MediaItem {
            id: MediaId::new(row.id)?,
            title: Title::new(row.title)?,
            slug: Slug::new(row.slug)?,
            description: row.description,
            kind: row.kind,
            views: row.views,
            duration: row.duration,
            creator: row.creator,
            featured: row.featured,
            published: row.published,
            category: row.category,
            video_url: row.video_url,
            thumbnail_url: row.thumbnail_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &MediaFilter) {
    let mut has_where = false;
    if let Some(kind) = filter.kind.clone() {
        builder.push(" WHERE kind = ");
        builder.push_bind(kind);
        has_where = true;
    }
    if let Some(published) = filter.published {
        builder.push(if has_where { " AND " } else { " WHERE " });
        builder.push("published = ");
        builder.push_bind(published);
        has_where = true;
    }
    if filter.featured_only {
        builder.push(if has_where { " AND " } else { " WHERE " });
        builder.push("featured = TRUE");
    }
}

#[async_trait]
impl MediaRepository for PostgresMediaRepository {
    async fn insert(&self, item: NewMediaItem) -> DomainResult<MediaItem> {
        let row = sqlx::query_as::<_, MediaRow>(&format!(
            "INSERT INTO media (title, slug, description, kind, duration, creator, featured, \
             published, category, video_url, thumbnail_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {MEDIA_COLUMNS}"
        ))
        .bind(item.title.as_str())
        .bind(item.slug.as_str())
        .bind(item.description)
        .bind(item.kind)
        .bind(item.duration)
        .bind(item.creator)
        .bind(item.featured)
        .bind(item.published)
        .bind(item.category)
        .bind(item.video_url)
        .bind(item.thumbnail_url)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        MediaItem::try_from(row)
    }

    async fn update(&self, id: MediaId, update: MediaUpdate) -> DomainResult<MediaItem> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE media SET updated_at = now()");

        if let Some(title) = update.title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }
        if let Some(slug) = update.slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }
        if let Some(description) = update.description {
            builder.push(", description = ");
            builder.push_bind(description);
        }
        if let Some(kind) = update.kind {
            builder.push(", kind = ");
            builder.push_bind(kind);
        }
        if let Some(duration) = update.duration {
            builder.push(", duration = ");
            builder.push_bind(duration);
        }
        if let Some(creator) = update.creator {
            builder.push(", creator = ");
            builder.push_bind(creator);
        }
        if let Some(featured) = update.featured {
            builder.push(", featured = ");
            builder.push_bind(featured);
        }
        if let Some(published) = update.published {
            builder.push(", published = ");
            builder.push_bind(published);
        }
        if let Some(category) = update.category {
            builder.push(", category = ");
            builder.push_bind(category);
        }
        if let Some(video_url) = update.video_url {
            builder.push(", video_url = ");
            builder.push_bind(video_url);
        }
        if let Some(thumbnail_url) = update.thumbnail_url {
            builder.push(", thumbnail_url = ");
            builder.push_bind(thumbnail_url);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {MEDIA_COLUMNS}"));

        let row = builder
            .build_query_as::<MediaRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("media item not found".into()))?;

        MediaItem::try_from(row)
    }

    async fn delete(&self, id: MediaId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM media WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("media item not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: MediaId) -> DomainResult<Option<MediaItem>> {
        let row = sqlx::query_as::<_, MediaRow>(&format!(
            "SELECT {MEDIA_COLUMNS} FROM media WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(MediaItem::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<MediaItem>> {
        let row = sqlx::query_as::<_, MediaRow>(&format!(
            "SELECT {MEDIA_COLUMNS} FROM media WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(MediaItem::try_from).transpose()
    }

    async fn list(
        &self,
        filter: &MediaFilter,
        limit: Option<u32>,
        offset: u32,
    ) -> DomainResult<(Vec<MediaItem>, u64)> {
        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM media");
        push_filter(&mut count_builder, filter);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {MEDIA_COLUMNS} FROM media"));
        push_filter(&mut builder, filter);
        builder.push(" ORDER BY created_at DESC, id DESC");
        if let Some(limit) = limit {
            builder.push(" LIMIT ");
            builder.push_bind(i64::from(limit));
        }
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(offset));

        let rows = builder
            .build_query_as::<MediaRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(MediaItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((items, total as u64))
    }

    async fn distinct_kinds(&self) -> DomainResult<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT kind FROM media ORDER BY kind")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn increment_views(&self, id: MediaId) -> DomainResult<()> {
        let result = sqlx::query("UPDATE media SET views = views + 1 WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("media item not found".into()));
        }
        Ok(())
    }
}
