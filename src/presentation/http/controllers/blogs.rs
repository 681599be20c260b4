use super::{parse_tags, read_form};
use crate::application::{
    commands::blogs::{CreateBlogCommand, UpdateBlogCommand},
    dto::{BlogDto, Page},
    error::ApplicationError,
    queries::blogs::ListBlogsQuery,
};
use crate::domain::blog::BlogSection;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BlogListParams {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

#[utoipa::path(
    get,
    path = "/api/blogs",
    tag = "blogs",
    responses((status = 200, description = "Paged blog posts", body = Page<BlogDto>))
)]
pub async fn list_blogs(
    Extension(state): Extension<HttpState>,
    Query(params): Query<BlogListParams>,
) -> HttpResult<Json<Page<BlogDto>>> {
    state
        .services
        .blog_queries
        .list_blogs(ListBlogsQuery {
            category: params.category,
            featured_only: params.featured,
            limit: params.limit,
            page: params.page,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    tag = "blogs",
    params(("id" = i64, Path, description = "Blog id")),
    responses(
        (status = 200, description = "Blog post", body = BlogDto),
        (status = 404, description = "No such post")
    )
)]
pub async fn get_blog(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<BlogDto>> {
    state.services.blog_queries.get_blog(id).await.into_http().map(Json)
}

#[utoipa::path(
    get,
    path = "/api/blogs/slug/{slug}",
    tag = "blogs",
    responses(
        (status = 200, description = "Blog post", body = BlogDto),
        (status = 404, description = "No post with that slug")
    )
)]
pub async fn get_blog_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<BlogDto>> {
    state
        .services
        .blog_queries
        .get_blog_by_slug(&slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/blogs/categories",
    tag = "blogs",
    responses((status = 200, description = "Distinct categories", body = [String]))
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<String>>> {
    state.services.blog_queries.categories().await.into_http().map(Json)
}

fn parse_published_date(raw: Option<&str>) -> HttpResult<Option<DateTime<Utc>>> {
    raw.map(|value| {
        value.parse::<DateTime<Utc>>().map_err(|_| {
            HttpError::from_error(ApplicationError::validation("invalid published_date"))
        })
    })
    .transpose()
}

#[utoipa::path(
    post,
    path = "/api/blogs",
    tag = "blogs",
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Post created", body = BlogDto),
        (status = 409, description = "Slug already taken")
    )
)]
pub async fn create_blog(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    multipart: Multipart,
) -> HttpResult<(StatusCode, Json<BlogDto>)> {
    let form = read_form(multipart, state.uploads.as_ref(), "blogs").await?;

    let sections: Vec<BlogSection> = form.json("sections")?.unwrap_or_default();
    let command = CreateBlogCommand {
        title: form.require("title")?,
        excerpt: form.require("excerpt")?,
        content: form.require("content")?,
        featured_image: form
            .file("featured_image")
            .or(form.text("featured_image"))
            .map(str::to_owned),
        is_featured: form.bool("is_featured"),
        tags: form.text("tags").map(parse_tags).unwrap_or_default(),
        read_time: form.require("read_time")?,
        sections,
        author_name: form.require("author_name")?,
        author_bio: form.text("author_bio").map(str::to_owned),
        published_date: parse_published_date(form.text("published_date"))?,
        category: form.require("category")?,
        meta_title: form.text("meta_title").map(str::to_owned),
        meta_description: form.text("meta_description").map(str::to_owned),
        seo_keywords: form.text("seo_keywords").map(str::to_owned),
    };

    let created = state
        .services
        .blog_commands
        .create_blog(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/blogs/{id}",
    tag = "blogs",
    params(("id" = i64, Path, description = "Blog id")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Updated post", body = BlogDto),
        (status = 404, description = "No such post")
    )
)]
pub async fn update_blog(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> HttpResult<Json<BlogDto>> {
    let form = read_form(multipart, state.uploads.as_ref(), "blogs").await?;

    let featured_image = if let Some(path) = form.file("featured_image") {
        Some(Some(path.to_owned()))
    } else if form.bool("remove_featured_image") {
        Some(None)
    } else {
        form.text("featured_image").map(|v| Some(v.to_owned()))
    };

    let command = UpdateBlogCommand {
        title: form.text("title").map(str::to_owned),
        excerpt: form.text("excerpt").map(str::to_owned),
        content: form.text("content").map(str::to_owned),
        featured_image,
        is_featured: form.text("is_featured").map(|_| form.bool("is_featured")),
        tags: form.text("tags").map(parse_tags),
        read_time: form.text("read_time").map(str::to_owned),
        sections: form.json("sections")?,
        author_name: form.text("author_name").map(str::to_owned),
        author_bio: form.text("author_bio").map(str::to_owned),
        category: form.text("category").map(str::to_owned),
        meta_title: form.text("meta_title").map(str::to_owned),
        meta_description: form.text("meta_description").map(str::to_owned),
        seo_keywords: form.text("seo_keywords").map(str::to_owned),
    };

    state
        .services
        .blog_commands
        .update_blog(&user, id, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    tag = "blogs",
    params(("id" = i64, Path, description = "Blog id")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Post removed"),
        (status = 404, description = "No such post")
    )
)]
pub async fn delete_blog(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .blog_commands
        .delete_blog(&user, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
