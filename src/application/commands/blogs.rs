use super::{ensure_admin, require_field};
use crate::{
    application::{
        dto::{AuthenticatedUser, BlogDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        blog::{BlogId, BlogRepository, BlogSection, BlogUpdate, NewBlog},
        slug::{SlugAssigner, SlugScope, Title},
    },
};
use std::sync::Arc;

pub struct CreateBlogCommand {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub is_featured: bool,
    pub tags: Vec<String>,
    pub read_time: String,
    pub sections: Vec<BlogSection>,
    pub author_name: String,
    pub author_bio: Option<String>,
    pub published_date: Option<chrono::DateTime<chrono::Utc>>,
    pub category: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub seo_keywords: Option<String>,
}

#[derive(Default)]
pub struct UpdateBlogCommand {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    /// `Some(None)` clears the featured image, `Some(Some(path))` replaces it.
    pub featured_image: Option<Option<String>>,
    pub is_featured: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub read_time: Option<String>,
    pub sections: Option<Vec<BlogSection>>,
    pub author_name: Option<String>,
    pub author_bio: Option<String>,
    pub category: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub seo_keywords: Option<String>,
}

pub struct BlogCommandService {
    repo: Arc<dyn BlogRepository>,
    slugs: Arc<SlugAssigner>,
    clock: Arc<dyn Clock>,
}

impl BlogCommandService {
    pub fn new(
        repo: Arc<dyn BlogRepository>,
        slugs: Arc<SlugAssigner>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { repo, slugs, clock }
    }

    pub async fn create_blog(
        &self,
        actor: &AuthenticatedUser,
        command: CreateBlogCommand,
    ) -> ApplicationResult<BlogDto> {
        ensure_admin(actor)?;

        require_field(&command.excerpt, "excerpt")?;
        require_field(&command.content, "content")?;
        require_field(&command.read_time, "read time")?;
        require_field(&command.author_name, "author name")?;
        require_field(&command.category, "category")?;

        let title = Title::new(command.title)?;
        let slug = self.slugs.assign(&title, SlugScope::Blog, None).await?;

        let blog = NewBlog {
            title,
            slug,
            excerpt: command.excerpt,
            content: command.content,
            featured_image: command.featured_image,
            is_featured: command.is_featured,
            tags: command.tags,
            read_time: command.read_time,
            sections: command.sections,
            author_name: command.author_name,
            author_bio: command.author_bio,
            published_date: command.published_date.unwrap_or_else(|| self.clock.now()),
            category: command.category,
            meta_title: command.meta_title,
            meta_description: command.meta_description,
            seo_keywords: command.seo_keywords,
        };

        let created = self.repo.insert(blog).await?;
        tracing::info!(blog_id = i64::from(created.id), slug = %created.slug, "blog created");
        Ok(created.into())
    }

    pub async fn update_blog(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        command: UpdateBlogCommand,
    ) -> ApplicationResult<BlogDto> {
        ensure_admin(actor)?;

        let id = BlogId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("blog not found"))?;

        for (value, name) in [
            (&command.excerpt, "excerpt"),
            (&command.content, "content"),
            (&command.read_time, "read time"),
            (&command.author_name, "author name"),
            (&command.category, "category"),
        ] {
            if let Some(value) = value {
                require_field(value, name)?;
            }
        }

        let mut update = BlogUpdate {
            excerpt: command.excerpt,
            content: command.content,
            featured_image: command.featured_image,
            is_featured: command.is_featured,
            tags: command.tags,
            read_time: command.read_time,
            sections: command
                .sections
                .map(|sections| sections.into_iter().filter(BlogSection::is_complete).collect()),
            author_name: command.author_name,
            author_bio: command.author_bio,
            category: command.category,
            meta_title: command.meta_title,
            meta_description: command.meta_description,
            seo_keywords: command.seo_keywords,
            ..BlogUpdate::default()
        };

        // Slug is re-derived only when the update carries a title; passing
        // the blog's own id keeps an unchanged title unsuffixed.
        if let Some(title) = command.title {
            let title = Title::new(title)?;
            let slug = self
                .slugs
                .assign(&title, SlugScope::Blog, Some(id.into()))
                .await?;
            update.title = Some(title);
            update.slug = Some(slug);
        }

        let updated = self.repo.update(id, update).await?;
        Ok(updated.into())
    }

    pub async fn delete_blog(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        ensure_admin(actor)?;
        let id = BlogId::new(id)?;
        self.repo.delete(id).await?;
        tracing::info!(blog_id = i64::from(id), "blog deleted");
        Ok(())
    }
}
