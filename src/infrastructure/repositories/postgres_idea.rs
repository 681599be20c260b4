use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::idea::{
    Idea, IdeaFilter, IdeaId, IdeaRepository, IdeaStatus, IdeaUpdate, NewIdea,
};
use crate::domain::slug::{Slug, Title};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const IDEA_COLUMNS: &str =
    "id, title, slug, description, category, status, author, likes, published, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresIdeaRepository {
    pool: PgPool,
}

impl PostgresIdeaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct IdeaRow {
    id: i64,
    title: String,
    slug: String,
    description: String,
    category: String,
    status: String,
    author: String,
    likes: i64,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<IdeaRow> for Idea {
    type Error = DomainError;

    fn try_from(row: IdeaRow) -> Result<Self, Self::Error> {
        Ok(Idea {
            id: IdeaId::new(row.id)?,
            title: Title::new(row.title)?,
            slug: Slug::new(row.slug)?,
            description: row.description,
            category: row.category,
            status: row.status.parse::<IdeaStatus>()?,
            author: row.author,
            likes: row.likes,
            published: row.published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &IdeaFilter) {
    let mut has_where = false;
    let mut sep = |builder: &mut QueryBuilder<'_, Postgres>| {
        builder.push(if has_where { " AND " } else { " WHERE " });
        has_where = true;
    };
    if let Some(category) = filter.category.clone() {
        sep(builder);
        builder.push("category = ");
        builder.push_bind(category);
    }
    if let Some(status) = filter.status {
        sep(builder);
        builder.push("status = ");
        builder.push_bind(status.as_str());
    }
    if let Some(published) = filter.published {
        sep(builder);
        builder.push("published = ");
        builder.push_bind(published);
    }
}

#[async_trait]
impl IdeaRepository for PostgresIdeaRepository {
    async fn insert(&self, idea: NewIdea) -> DomainResult<Idea> {
        let row = sqlx::query_as::<_, IdeaRow>(&format!(
            "INSERT INTO ideas (title, slug, description, category, status, author, published)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {IDEA_COLUMNS}"
        ))
        .bind(idea.title.as_str())
        .bind(idea.slug.as_str())
        .bind(idea.description)
        .bind(idea.category)
        .bind(idea.status.as_str())
        .bind(idea.author)
        .bind(idea.published)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Idea::try_from(row)
    }

    async fn update(&self, id: IdeaId, update: IdeaUpdate) -> DomainResult<Idea> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE ideas SET updated_at = now()");

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
        if let Some(category) = update.category {
            builder.push(", category = ");
            builder.push_bind(category);
        }
        if let Some(status) = update.status {
            builder.push(", status = ");
            builder.push_bind(status.as_str());
        }
        if let Some(author) = update.author {
            builder.push(", author = ");
            builder.push_bind(author);
        }
        if let Some(published) = update.published {
            builder.push(", published = ");
            builder.push_bind(published);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {IDEA_COLUMNS}"));

        let row = builder
            .build_query_as::<IdeaRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("idea not found".into()))?;

        Idea::try_from(row)
    }

    async fn delete(&self, id: IdeaId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM ideas WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("idea not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: IdeaId) -> DomainResult<Option<Idea>> {
        let row = sqlx::query_as::<_, IdeaRow>(&format!(
            "SELECT {IDEA_COLUMNS} FROM ideas WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Idea::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Idea>> {
        let row = sqlx::query_as::<_, IdeaRow>(&format!(
            "SELECT {IDEA_COLUMNS} FROM ideas WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Idea::try_from).transpose()
    }

    async fn list(
        &self,
        filter: &IdeaFilter,
        limit: Option<u32>,
        offset: u32,
    ) -> DomainResult<(Vec<Idea>, u64)> {
        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM ideas");
        push_filter(&mut count_builder, filter);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {IDEA_COLUMNS} FROM ideas"));
        push_filter(&mut builder, filter);
        builder.push(" ORDER BY created_at DESC, id DESC");
        if let Some(limit) = limit {
            builder.push(" LIMIT ");
            builder.push_bind(i64::from(limit));
        }
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(offset));

        let rows = builder
            .build_query_as::<IdeaRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let ideas = rows
            .into_iter()
            .map(Idea::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((ideas, total as u64))
    }

    async fn distinct_categories(&self) -> DomainResult<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT category FROM ideas ORDER BY category")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn increment_likes(&self, id: IdeaId) -> DomainResult<Idea> {
        let row = sqlx::query_as::<_, IdeaRow>(&format!(
            "UPDATE ideas SET likes = likes + 1, updated_at = now()
             WHERE id = $1 RETURNING {IDEA_COLUMNS}"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("idea not found".into()))?;

        Idea::try_from(row)
    }
}
