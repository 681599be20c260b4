use super::map_sqlx;
use crate::domain::blog::{
    Blog, BlogFilter, BlogId, BlogRepository, BlogSection, BlogUpdate, NewBlog,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, Title};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const BLOG_COLUMNS: &str = "id, title, slug, excerpt, content, featured_image, is_featured, tags, \
     read_time, sections, author_name, author_bio, published_date, category, \
     meta_title, meta_description, seo_keywords, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresBlogRepository {
    pool: PgPool,
}

impl PostgresBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BlogRow {
    id: i64,
    title: String,
    slug: String,
    excerpt: String,
    content: String,
    featured_image: Option<String>,
    is_featured: bool,
    tags: Vec<String>,
    read_time: String,
    sections: Json<Vec<BlogSection>>,
    author_name: String,
    author_bio: Option<String>,
    published_date: DateTime<Utc>,
    category: String,
    meta_title: Option<String>,
    meta_description: Option<String>,
    seo_keywords: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<BlogRow> for Blog {
    type Error = DomainError;

    fn try_from(row: BlogRow) -> Result<Self, Self::Error> {
        Ok(Blog {
            id: BlogId::new(row.id)?,
            title: Title::new(row.title)?,
            slug: Slug::new(row.slug)?,
            excerpt: row.excerpt,
            content: row.content,
            featured_image: row.featured_image,
            is_featured: row.is_featured,
            tags: row.tags,
            read_time: row.read_time,
            sections: row.sections.0,
            author_name: row.author_name,
            author_bio: row.author_bio,
            published_date: row.published_date,
            category: row.category,
            meta_title: row.meta_title,
            meta_description: row.meta_description,
            seo_keywords: row.seo_keywords,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &BlogFilter) {
    let mut has_where = false;
    if let Some(category) = filter.category.clone() {
        builder.push(" WHERE category = ");
        builder.push_bind(category);
        has_where = true;
    }
    if filter.featured_only {
        builder.push(if has_where { " AND " } else { " WHERE " });
        builder.push("is_featured = TRUE");
    }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn insert(&self, blog: NewBlog) -> DomainResult<Blog> {
        let NewBlog {
            title,
            slug,
            excerpt,
            content,
            featured_image,
            is_featured,
            tags,
            read_time,
            sections,
            author_name,
            author_bio,
            published_date,
            category,
            meta_title,
            meta_description,
            seo_keywords,
        } = blog;

        let row = sqlx::query_as::<_, BlogRow>(&format!(
            "INSERT INTO blogs (title, slug, excerpt, content, featured_image, is_featured, tags, \
             read_time, sections, author_name, author_bio, published_date, category, \
             meta_title, meta_description, seo_keywords)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
             RETURNING {BLOG_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(excerpt)
        .bind(content)
        .bind(featured_image)
        .bind(is_featured)
        .bind(tags)
        .bind(read_time)
        .bind(Json(sections))
        .bind(author_name)
        .bind(author_bio)
        .bind(published_date)
        .bind(category)
        .bind(meta_title)
        .bind(meta_description)
        .bind(seo_keywords)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Blog::try_from(row)
    }

    async fn update(&self, id: BlogId, update: BlogUpdate) -> DomainResult<Blog> {
        let BlogUpdate {
            title,
            slug,
            excerpt,
            content,
            featured_image,
            is_featured,
            tags,
            read_time,
            sections,
            author_name,
            author_bio,
            category,
            meta_title,
            meta_description,
            seo_keywords,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE blogs SET updated_at = now()");

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }
        if let Some(excerpt) = excerpt {
            builder.push(", excerpt = ");
            builder.push_bind(excerpt);
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content);
        }
        if let Some(featured_image) = featured_image {
            builder.push(", featured_image = ");
            builder.push_bind(featured_image);
        }
        if let Some(is_featured) = is_featured {
            builder.push(", is_featured = ");
            builder.push_bind(is_featured);
        }
        if let Some(tags) = tags {
            builder.push(", tags = ");
            builder.push_bind(tags);
        }
        if let Some(read_time) = read_time {
            builder.push(", read_time = ");
            builder.push_bind(read_time);
        }
        if let Some(sections) = sections {
            builder.push(", sections = ");
            builder.push_bind(Json(sections));
        }
        if let Some(author_name) = author_name {
            builder.push(", author_name = ");
            builder.push_bind(author_name);
        }
        if let Some(author_bio) = author_bio {
            builder.push(", author_bio = ");
            builder.push_bind(author_bio);
        }
        if let Some(category) = category {
            builder.push(", category = ");
            builder.push_bind(category);
        }
        if let Some(meta_title) = meta_title {
            builder.push(", meta_title = ");
            builder.push_bind(meta_title);
        }
        if let Some(meta_description) = meta_description {
            builder.push(", meta_description = ");
            builder.push_bind(meta_description);
        }
        if let Some(seo_keywords) = seo_keywords {
            builder.push(", seo_keywords = ");
            builder.push_bind(seo_keywords);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {BLOG_COLUMNS}"));

        let row = builder
            .build_query_as::<BlogRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("blog not found".into()))?;

        Blog::try_from(row)
    }

    async fn delete(&self, id: BlogId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("blog not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: BlogId) -> DomainResult<Option<Blog>> {
        let row = sqlx::query_as::<_, BlogRow>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Blog::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Blog>> {
        let row = sqlx::query_as::<_, BlogRow>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Blog::try_from).transpose()
    }

    async fn list(
        &self,
        filter: &BlogFilter,
        limit: Option<u32>,
        offset: u32,
    ) -> DomainResult<(Vec<Blog>, u64)> {
        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM blogs");
        push_filter(&mut count_builder, filter);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {BLOG_COLUMNS} FROM blogs"));
        push_filter(&mut builder, filter);
        builder.push(" ORDER BY is_featured DESC, published_date DESC, id DESC");
        if let Some(limit) = limit {
            builder.push(" LIMIT ");
            builder.push_bind(i64::from(limit));
        }
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(offset));

        let rows = builder
            .build_query_as::<BlogRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let blogs = rows
            .into_iter()
            .map(Blog::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((blogs, total as u64))
    }

    async fn distinct_categories(&self) -> DomainResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM blogs ORDER BY category",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}
