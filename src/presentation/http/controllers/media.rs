use crate::application::{
    commands::media::{CreateMediaCommand, UpdateMediaCommand},
    dto::{MediaDto, Page},
    queries::media::ListMediaQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MediaListParams {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub published: Option<bool>,
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

#[derive(Debug, Deserialize)]
pub struct CreateMediaRequest {
    pub title: String,
    pub description: String,
    pub kind: String,
    pub duration: String,
    pub creator: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateMediaRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub kind: Option<String>,
    pub duration: Option<String>,
    pub creator: Option<String>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
    pub category: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/media",
    tag = "content",
    responses((status = 200, description = "Paged media items", body = Page<MediaDto>))
)]
pub async fn list_media(
    Extension(state): Extension<HttpState>,
    Query(params): Query<MediaListParams>,
) -> HttpResult<Json<Page<MediaDto>>> {
    state
        .services
        .media_queries
        .list_media(ListMediaQuery {
            kind: params.kind,
            published: params.published,
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
    path = "/api/media/{id}",
    tag = "content",
    params(("id" = i64, Path, description = "Media id")),
    responses(
        (status = 200, description = "Media item", body = MediaDto),
        (status = 404, description = "No such item")
    )
)]
pub async fn get_media(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<MediaDto>> {
    state.services.media_queries.get_media(id).await.into_http().map(Json)
}

/// Public detail view; each hit bumps the view counter.
#[utoipa::path(
    get,
    path = "/api/media/slug/{slug}",
    tag = "content",
    responses(
        (status = 200, description = "Media item", body = MediaDto),
        (status = 404, description = "No item with that slug")
    )
)]
pub async fn get_media_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<MediaDto>> {
    state
        .services
        .media_queries
        .get_media_by_slug(&slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/media/kinds",
    tag = "content",
    responses((status = 200, description = "Distinct media kinds", body = [String]))
)]
pub async fn list_kinds(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<String>>> {
    state.services.media_queries.kinds().await.into_http().map(Json)
}

#[utoipa::path(
    post,
    path = "/api/media",
    tag = "content",
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Media item created", body = MediaDto),
        (status = 409, description = "Slug already taken")
    )
)]
pub async fn create_media(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateMediaRequest>,
) -> HttpResult<(StatusCode, Json<MediaDto>)> {
    let created = state
        .services
        .media_commands
        .create_media(
            &user,
            CreateMediaCommand {
                title: payload.title,
                description: payload.description,
                kind: payload.kind,
                duration: payload.duration,
                creator: payload.creator,
                featured: payload.featured,
                published: payload.published,
                category: payload.category,
                video_url: payload.video_url,
                thumbnail_url: payload.thumbnail_url,
            },
        )
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/media/{id}",
    tag = "content",
    params(("id" = i64, Path, description = "Media id")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Updated item", body = MediaDto),
        (status = 404, description = "No such item")
    )
)]
pub async fn update_media(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateMediaRequest>,
) -> HttpResult<Json<MediaDto>> {
    state
        .services
        .media_commands
        .update_media(
            &user,
            id,
            UpdateMediaCommand {
                title: payload.title,
                description: payload.description,
                kind: payload.kind,
                duration: payload.duration,
                creator: payload.creator,
                featured: payload.featured,
                published: payload.published,
                category: payload.category,
                video_url: payload.video_url,
                thumbnail_url: payload.thumbnail_url,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/media/{id}",
    tag = "content",
    params(("id" = i64, Path, description = "Media id")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Item removed"),
        (status = 404, description = "No such item")
    )
)]
pub async fn delete_media(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .media_commands
        .delete_media(&user, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
