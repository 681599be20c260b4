use crate::application::{
    commands::ideas::{CreateIdeaCommand, UpdateIdeaCommand},
    dto::{IdeaDto, Page},
    queries::ideas::ListIdeasQuery,
};
use crate::domain::idea::IdeaStatus;
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
pub struct IdeaListParams {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<IdeaStatus>,
    #[serde(default)]
    pub published: Option<bool>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct CreateIdeaRequest {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub status: Option<IdeaStatus>,
    pub author: String,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateIdeaRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<IdeaStatus>,
    pub author: Option<String>,
    pub published: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/ideas",
    tag = "content",
    responses((status = 200, description = "Paged ideas", body = Page<IdeaDto>))
)]
pub async fn list_ideas(
    Extension(state): Extension<HttpState>,
    Query(params): Query<IdeaListParams>,
) -> HttpResult<Json<Page<IdeaDto>>> {
    state
        .services
        .idea_queries
        .list_ideas(ListIdeasQuery {
            category: params.category,
            status: params.status,
            published: params.published,
            limit: params.limit,
            page: params.page,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/ideas/{id}",
    tag = "content",
    params(("id" = i64, Path, description = "Idea id")),
    responses(
        (status = 200, description = "Idea", body = IdeaDto),
        (status = 404, description = "No such idea")
    )
)]
pub async fn get_idea(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<IdeaDto>> {
    state.services.idea_queries.get_idea(id).await.into_http().map(Json)
}

#[utoipa::path(
    get,
    path = "/api/ideas/slug/{slug}",
    tag = "content",
    responses(
        (status = 200, description = "Idea", body = IdeaDto),
        (status = 404, description = "No idea with that slug")
    )
)]
pub async fn get_idea_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<IdeaDto>> {
    state
        .services
        .idea_queries
        .get_idea_by_slug(&slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/ideas/categories",
    tag = "content",
    responses((status = 200, description = "Distinct categories", body = [String]))
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<String>>> {
    state.services.idea_queries.categories().await.into_http().map(Json)
}

#[utoipa::path(
    post,
    path = "/api/ideas",
    tag = "content",
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Idea created", body = IdeaDto),
        (status = 409, description = "Slug already taken")
    )
)]
pub async fn create_idea(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateIdeaRequest>,
) -> HttpResult<(StatusCode, Json<IdeaDto>)> {
    let created = state
        .services
        .idea_commands
        .create_idea(
            &user,
            CreateIdeaCommand {
                title: payload.title,
                description: payload.description,
                category: payload.category,
                status: payload.status,
                author: payload.author,
                published: payload.published,
            },
        )
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/ideas/{id}",
    tag = "content",
    params(("id" = i64, Path, description = "Idea id")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Updated idea", body = IdeaDto),
        (status = 404, description = "No such idea")
    )
)]
pub async fn update_idea(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateIdeaRequest>,
) -> HttpResult<Json<IdeaDto>> {
    state
        .services
        .idea_commands
        .update_idea(
            &user,
            id,
            UpdateIdeaCommand {
                title: payload.title,
                description: payload.description,
                category: payload.category,
                status: payload.status,
                author: payload.author,
                published: payload.published,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/ideas/{id}",
    tag = "content",
    params(("id" = i64, Path, description = "Idea id")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Idea removed"),
        (status = 404, description = "No such idea")
    )
)]
pub async fn delete_idea(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .idea_commands
        .delete_idea(&user, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

/// Public, unauthenticated like button.
#[utoipa::path(
    post,
    path = "/api/ideas/{id}/like",
    tag = "content",
    params(("id" = i64, Path, description = "Idea id")),
    responses(
        (status = 200, description = "Idea with incremented likes", body = IdeaDto),
        (status = 404, description = "No such idea")
    )
)]
pub async fn like_idea(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<IdeaDto>> {
    state.services.idea_commands.like_idea(id).await.into_http().map(Json)
}
