use crate::domain::{
    blog::{Blog, BlogSection},
    event::Event,
    gallery::GalleryItem,
    idea::{Idea, IdeaStatus},
    media::MediaItem,
    story::Story,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BlogSectionDto {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<BlogSection> for BlogSectionDto {
    fn from(section: BlogSection) -> Self {
        Self {
            title: section.title,
            content: section.content,
            image: section.image,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BlogDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub is_featured: bool,
    pub tags: Vec<String>,
    pub read_time: String,
    pub sections: Vec<BlogSectionDto>,
    pub author_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_bio: Option<String>,
    pub published_date: DateTime<Utc>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_keywords: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Blog> for BlogDto {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id.into(),
            title: blog.title.into(),
            slug: blog.slug.into(),
            excerpt: blog.excerpt,
            content: blog.content,
            featured_image: blog.featured_image,
            is_featured: blog.is_featured,
            tags: blog.tags,
            read_time: blog.read_time,
            sections: blog.sections.into_iter().map(Into::into).collect(),
            author_name: blog.author_name,
            author_bio: blog.author_bio,
            published_date: blog.published_date,
            category: blog.category,
            meta_title: blog.meta_title,
            meta_description: blog.meta_description,
            seo_keywords: blog.seo_keywords,
            created_at: blog.created_at,
            updated_at: blog.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IdeaDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub status: IdeaStatus,
    pub author: String,
    pub likes: i64,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Idea> for IdeaDto {
    fn from(idea: Idea) -> Self {
        Self {
            id: idea.id.into(),
            title: idea.title.into(),
            slug: idea.slug.into(),
            description: idea.description,
            category: idea.category,
            status: idea.status,
            author: idea.author,
            likes: idea.likes,
            published: idea.published,
            created_at: idea.created_at,
            updated_at: idea.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MediaDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub kind: String,
    pub views: i64,
    pub duration: String,
    pub creator: String,
    pub featured: bool,
    pub published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MediaItem> for MediaDto {
    fn from(item: MediaItem) -> Self {
        Self {
            id: item.id.into(),
            title: item.title.into(),
            slug: item.slug.into(),
            description: item.description,
            kind: item.kind,
            views: item.views,
            duration: item.duration,
            creator: item.creator,
            featured: item.featured,
            published: item.published,
            category: item.category,
            video_url: item.video_url,
            thumbnail_url: item.thumbnail_url,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub category: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Event> for EventDto {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.into(),
            title: event.title.into(),
            slug: event.slug.into(),
            date: event.date,
            time: event.time,
            location: event.location,
            category: event.category,
            description: event.description,
            image: event.image,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoryDto {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub is_featured: bool,
    pub read_time: String,
    pub author: String,
    pub published_date: DateTime<Utc>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Story> for StoryDto {
    fn from(story: Story) -> Self {
        Self {
            id: story.id,
            title: story.title,
            excerpt: story.excerpt,
            content: story.content,
            image: story.image,
            is_featured: story.is_featured,
            read_time: story.read_time,
            author: story.author,
            published_date: story.published_date,
            category: story.category,
            kind: story.kind,
            created_at: story.created_at,
            updated_at: story.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GalleryItemDto {
    pub id: i64,
    pub title: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<GalleryItem> for GalleryItemDto {
    fn from(item: GalleryItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            category: item.category,
            image_url: item.image_url,
            description: item.description,
            created_at: item.created_at,
        }
    }
}
