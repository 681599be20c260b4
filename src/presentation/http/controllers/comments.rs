use super::read_form;
use crate::application::{
    commands::comments::{CreateCommentCommand, UpdateCommentCommand},
    dto::{CommentDto, Page},
    error::ApplicationError,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct CommentListParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    20
}

#[derive(Debug, Deserialize)]
pub struct ApproveRequest {
    pub approved: bool,
}

#[utoipa::path(
    get,
    path = "/api/blogs/{id}/comments",
    tag = "blogs",
    params(("id" = i64, Path, description = "Blog id")),
    responses((status = 200, description = "Approved comments, paged", body = Page<CommentDto>))
)]
pub async fn list_for_blog(
    Extension(state): Extension<HttpState>,
    Path(blog_id): Path<i64>,
    Query(params): Query<CommentListParams>,
) -> HttpResult<Json<Page<CommentDto>>> {
    state
        .services
        .comment_queries
        .list_for_blog(blog_id, params.page, params.limit)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/blogs/{id}/comments/count",
    tag = "blogs",
    params(("id" = i64, Path, description = "Blog id")),
    responses((status = 200, description = "Approved comment count"))
)]
pub async fn count_for_blog(
    Extension(state): Extension<HttpState>,
    Path(blog_id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    let count = state
        .services
        .comment_queries
        .count_for_blog(blog_id)
        .await
        .into_http()?;
    Ok(Json(json!({ "count": count })))
}

/// Public comment form; an optional `profile_image` file part is stored
/// before the comment lands in the moderation queue.
#[utoipa::path(
    post,
    path = "/api/blogs/{id}/comments",
    tag = "blogs",
    params(("id" = i64, Path, description = "Blog id")),
    responses(
        (status = 201, description = "Comment queued for moderation", body = CommentDto),
        (status = 404, description = "No such post")
    )
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Path(blog_id): Path<i64>,
    multipart: Multipart,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let form = read_form(multipart, state.uploads.as_ref(), "comments").await?;

    let body = form.require("body")?;
    if body.trim().is_empty() {
        return Err(HttpError::from_error(ApplicationError::validation(
            "comment body must not be empty",
        )));
    }

    let created = state
        .services
        .comment_commands
        .create_comment(CreateCommentCommand {
            blog_id,
            name: form.require("name")?,
            email: form.require("email")?,
            profile_image: form.file("profile_image").map(str::to_owned),
            body,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/comments",
    tag = "blogs",
    security(("bearer" = [])),
    responses((status = 200, description = "Every comment, moderated or not", body = [CommentDto]))
)]
pub async fn list_all(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .comment_queries
        .list_all(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/comments/{id}/approve",
    tag = "blogs",
    params(("id" = i64, Path, description = "Comment id")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Moderated comment", body = CommentDto),
        (status = 404, description = "No such comment")
    )
)]
pub async fn set_approved(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<ApproveRequest>,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .comment_commands
        .set_approved(&user, id, payload.approved)
        .await
        .into_http()
        .map(Json)
}

/// Moderation edit over multipart; an uploaded `profile_image` file takes
/// precedence over a `profile_image` text field.
#[utoipa::path(
    put,
    path = "/api/comments/{id}",
    tag = "blogs",
    params(("id" = i64, Path, description = "Comment id")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Edited comment", body = CommentDto),
        (status = 404, description = "No such comment")
    )
)]
pub async fn update_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> HttpResult<Json<CommentDto>> {
    let form = read_form(multipart, state.uploads.as_ref(), "comments").await?;

    let profile_image = form
        .file("profile_image")
        .or_else(|| form.text("profile_image"))
        .map(str::to_owned);

    state
        .services
        .comment_commands
        .update_comment(
            &user,
            id,
            UpdateCommentCommand {
                name: form.text("name").map(str::to_owned),
                email: form.text("email").map(str::to_owned),
                profile_image,
                body: form.text("body").map(str::to_owned),
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    tag = "blogs",
    params(("id" = i64, Path, description = "Comment id")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Comment removed"),
        (status = 404, description = "No such comment")
    )
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .comment_commands
        .delete_comment(&user, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
