use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::story::{NewStory, Story, StoryRepository, StoryUpdate};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const STORY_COLUMNS: &str = "id, title, excerpt, content, image, is_featured, read_time, \
     author, published_date, category, kind, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresStoryRepository {
    pool: PgPool,
}

impl PostgresStoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct StoryRow {
    id: i64,
    title: String,
    excerpt: String,
    content: Option<String>,
    image: Option<String>,
    is_featured: bool,
    read_time: String,
    author: String,
    published_date: DateTime<Utc>,
    category: String,
    kind: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<StoryRow> for Story {
    fn from(row: StoryRow) -> Self {
        Story {
            id: row.id,
            title: row.title,
            excerpt: row.excerpt,
            content: row.content,
            image: row.image,
            is_featured: row.is_featured,
            read_time: row.read_time,
            author: row.author,
            published_date: row.published_date,
            category: row.category,
            kind: row.kind,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl StoryRepository for PostgresStoryRepository {
    async fn insert(&self, story: NewStory) -> DomainResult<Story> {
        let row = sqlx::query_as::<_, StoryRow>(&format!(
            "INSERT INTO stories (title, excerpt, content, image, is_featured, read_time, author, \
             published_date, category, kind)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {STORY_COLUMNS}"
        ))
        .bind(story.title)
        .bind(story.excerpt)
        .bind(story.content)
        .bind(story.image)
        .bind(story.is_featured)
        .bind(story.read_time)
        .bind(story.author)
        .bind(story.published_date)
        .bind(story.category)
        .bind(story.kind)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, update: StoryUpdate) -> DomainResult<Story> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE stories SET updated_at = now()");

        if let Some(title) = update.title {
            builder.push(", title = ");
            builder.push_bind(title);
        }
        if let Some(excerpt) = update.excerpt {
            builder.push(", excerpt = ");
            builder.push_bind(excerpt);
        }
        if let Some(content) = update.content {
            builder.push(", content = ");
            builder.push_bind(content);
        }
        if let Some(image) = update.image {
            builder.push(", image = ");
            builder.push_bind(image);
        }
        if let Some(is_featured) = update.is_featured {
            builder.push(", is_featured = ");
            builder.push_bind(is_featured);
        }
        if let Some(read_time) = update.read_time {
            builder.push(", read_time = ");
            builder.push_bind(read_time);
        }
        if let Some(author) = update.author {
            builder.push(", author = ");
            builder.push_bind(author);
        }
        if let Some(category) = update.category {
            builder.push(", category = ");
            builder.push_bind(category);
        }
        if let Some(kind) = update.kind {
            builder.push(", kind = ");
            builder.push_bind(kind);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id);
        builder.push(format!(" RETURNING {STORY_COLUMNS}"));

        let row = builder
            .build_query_as::<StoryRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("story not found".into()))?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM stories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("story not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Story>> {
        let row = sqlx::query_as::<_, StoryRow>(&format!(
            "SELECT {STORY_COLUMNS} FROM stories WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Story::from))
    }

    async fn list(&self, category: Option<&str>) -> DomainResult<Vec<Story>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {STORY_COLUMNS} FROM stories"));
        if let Some(category) = category {
            builder.push(" WHERE category = ");
            builder.push_bind(category.to_owned());
        }
        builder.push(" ORDER BY is_featured DESC, published_date DESC, id DESC");

        let rows = builder
            .build_query_as::<StoryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Story::from).collect())
    }

    async fn distinct_categories(&self) -> DomainResult<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT category FROM stories ORDER BY category")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}
