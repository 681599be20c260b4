use super::read_form;
use crate::application::{
    commands::gallery::{CreateGalleryItemCommand, UpdateGalleryItemCommand},
    dto::GalleryItemDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query},
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GalleryListParams {
    #[serde(default)]
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/gallery",
    tag = "content",
    responses((status = 200, description = "Gallery items, newest first", body = [GalleryItemDto]))
)]
pub async fn list_items(
    Extension(state): Extension<HttpState>,
    Query(params): Query<GalleryListParams>,
) -> HttpResult<Json<Vec<GalleryItemDto>>> {
    state
        .services
        .gallery_queries
        .list_items(params.category.as_deref())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/gallery/{id}",
    tag = "content",
    params(("id" = i64, Path, description = "Gallery item id")),
    responses(
        (status = 200, description = "Gallery item", body = GalleryItemDto),
        (status = 404, description = "No such item")
    )
)]
pub async fn get_item(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<GalleryItemDto>> {
    state.services.gallery_queries.get_item(id).await.into_http().map(Json)
}

#[utoipa::path(
    get,
    path = "/api/gallery/categories",
    tag = "content",
    responses((status = 200, description = "Distinct categories", body = [String]))
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<String>>> {
    state.services.gallery_queries.categories().await.into_http().map(Json)
}

#[utoipa::path(
    post,
    path = "/api/gallery",
    tag = "content",
    security(("bearer" = [])),
    responses((status = 201, description = "Gallery item created", body = GalleryItemDto))
)]
pub async fn create_item(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    multipart: Multipart,
) -> HttpResult<(StatusCode, Json<GalleryItemDto>)> {
    let form = read_form(multipart, state.uploads.as_ref(), "gallery").await?;

    let created = state
        .services
        .gallery_commands
        .create_item(
            &user,
            CreateGalleryItemCommand {
                title: form.require("title")?,
                category: form.require("category")?,
                image_url: form
                    .file("image")
                    .or(form.text("image_url"))
                    .map(str::to_owned),
                description: form.text("description").map(str::to_owned),
            },
        )
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/gallery/{id}",
    tag = "content",
    params(("id" = i64, Path, description = "Gallery item id")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Updated item", body = GalleryItemDto),
        (status = 404, description = "No such item")
    )
)]
pub async fn update_item(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> HttpResult<Json<GalleryItemDto>> {
    let form = read_form(multipart, state.uploads.as_ref(), "gallery").await?;

    state
        .services
        .gallery_commands
        .update_item(
            &user,
            id,
            UpdateGalleryItemCommand {
                title: form.text("title").map(str::to_owned),
                category: form.text("category").map(str::to_owned),
                image_url: form
                    .file("image")
                    .or(form.text("image_url"))
                    .map(str::to_owned),
                description: form.text("description").map(str::to_owned),
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/gallery/{id}",
    tag = "content",
    params(("id" = i64, Path, description = "Gallery item id")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Item removed"),
        (status = 404, description = "No such item")
    )
)]
pub async fn delete_item(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .gallery_commands
        .delete_item(&user, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
