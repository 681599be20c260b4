use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::event::{Event, EventId, EventRepository, EventUpdate, NewEvent};
use crate::domain::slug::{Slug, Title};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const EVENT_COLUMNS: &str = "id, title, slug, event_date, event_time, location, category, \
     description, image, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresEventRepository {
    pool: PgPool,
}

impl PostgresEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRow {
    id: i64,
    title: String,
    slug: String,
    event_date: NaiveDate,
    event_time: String,
    location: String,
    category: String,
    description: String,
    image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<EventRow> for Event {
    type Error = DomainError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        Ok(Event {
            id: EventId::new(row.id)?,
            title: Title::new(row.title)?,
            slug: Slug::new(row.slug)?,
            date: row.event_date,
            time: row.event_time,
            location: row.location,
            category: row.category,
            description: row.description,
            image: row.image,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn insert(&self, event: NewEvent) -> DomainResult<Event> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            "INSERT INTO events (title, slug, event_date, event_time, location, category, description, image)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {EVENT_COLUMNS}"
        ))
        .bind(event.title.as_str())
        .bind(event.slug.as_str())
        .bind(event.date)
        .bind(event.time)
        .bind(event.location)
        .bind(event.category)
        .bind(event.description)
        .bind(event.image)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Event::try_from(row)
    }

    async fn update(&self, id: EventId, update: EventUpdate) -> DomainResult<Event> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE events SET updated_at = now()");

        if let Some(title) = update.title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }
        if let Some(slug) = update.slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }
        if let Some(date) = update.date {
            builder.push(", event_date = ");
            builder.push_bind(date);
        }
        if let Some(time) = update.time {
            builder.push(", event_time = ");
            builder.push_bind(time);
        }
        if let Some(location) = update.location {
            builder.push(", location = ");
            builder.push_bind(location);
        }
        if let Some(category) = update.category {
            builder.push(", category = ");
            builder.push_bind(category);
        }
        if let Some(description) = update.description {
            builder.push(", description = ");
            builder.push_bind(description);
        }
        if let Some(image) = update.image {
            builder.push(", image = ");
            builder.push_bind(image);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {EVENT_COLUMNS}"));

        let row = builder
            .build_query_as::<EventRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("event not found".into()))?;

        Event::try_from(row)
    }

    async fn delete(&self, id: EventId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("event not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: EventId) -> DomainResult<Option<Event>> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Event::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Event>> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Event::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Event>> {
        let rows = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY event_date ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Event::try_from).collect()
    }
}
