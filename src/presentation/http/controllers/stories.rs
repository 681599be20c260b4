use crate::application::{
    commands::stories::{CreateStoryCommand, UpdateStoryCommand},
    dto::StoryDto,
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
pub struct StoryListParams {
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateStoryRequest {
    pub title: String,
    pub excerpt: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    pub read_time: String,
    pub author: String,
    pub category: String,
    #[serde(default)]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateStoryRequest {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub is_featured: Option<bool>,
    pub read_time: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub kind: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/stories",
    tag = "content",
    responses((status = 200, description = "Stories, newest first", body = [StoryDto]))
)]
pub async fn list_stories(
    Extension(state): Extension<HttpState>,
    Query(params): Query<StoryListParams>,
) -> HttpResult<Json<Vec<StoryDto>>> {
    state
        .services
        .story_queries
        .list_stories(params.category.as_deref())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/stories/{id}",
    tag = "content",
    params(("id" = i64, Path, description = "Story id")),
    responses(
        (status = 200, description = "Story", body = StoryDto),
        (status = 404, description = "No such story")
    )
)]
pub async fn get_story(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StoryDto>> {
    state.services.story_queries.get_story(id).await.into_http().map(Json)
}

#[utoipa::path(
    get,
    path = "/api/stories/categories",
    tag = "content",
    responses((status = 200, description = "Distinct categories", body = [String]))
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<String>>> {
    state.services.story_queries.categories().await.into_http().map(Json)
}

#[utoipa::path(
    post,
    path = "/api/stories",
    tag = "content",
    security(("bearer" = [])),
    responses((status = 201, description = "Story created", body = StoryDto))
)]
pub async fn create_story(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateStoryRequest>,
) -> HttpResult<(StatusCode, Json<StoryDto>)> {
    let created = state
        .services
        .story_commands
        .create_story(
            &user,
            CreateStoryCommand {
                title: payload.title,
                excerpt: payload.excerpt,
                content: payload.content,
                image: payload.image,
                is_featured: payload.is_featured,
                read_time: payload.read_time,
                author: payload.author,
                category: payload.category,
                kind: payload.kind,
            },
        )
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/stories/{id}",
    tag = "content",
    params(("id" = i64, Path, description = "Story id")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Updated story", body = StoryDto),
        (status = 404, description = "No such story")
    )
)]
pub async fn update_story(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateStoryRequest>,
) -> HttpResult<Json<StoryDto>> {
    state
        .services
        .story_commands
        .update_story(
            &user,
            id,
            UpdateStoryCommand {
                title: payload.title,
                excerpt: payload.excerpt,
                content: payload.content,
                image: payload.image,
                is_featured: payload.is_featured,
                read_time: payload.read_time,
                author: payload.author,
                category: payload.category,
                kind: payload.kind,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/stories/{id}",
    tag = "content",
    params(("id" = i64, Path, description = "Story id")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Story removed"),
        (status = 404, description = "No such story")
    )
)]
pub async fn delete_story(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .story_commands
        .delete_story(&user, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
