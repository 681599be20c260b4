use crate::application::{
    commands::events::{CreateEventCommand, UpdateEventCommand},
    dto::EventDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/events",
    tag = "content",
    responses((status = 200, description = "Events, soonest first", body = [EventDto]))
)]
pub async fn list_events(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<EventDto>>> {
    state.services.event_queries.list_events().await.into_http().map(Json)
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = "content",
    params(("id" = i64, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event", body = EventDto),
        (status = 404, description = "No such event")
    )
)]
pub async fn get_event(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<EventDto>> {
    state.services.event_queries.get_event(id).await.into_http().map(Json)
}

#[utoipa::path(
    get,
    path = "/api/events/slug/{slug}",
    tag = "content",
    responses(
        (status = 200, description = "Event", body = EventDto),
        (status = 404, description = "No event with that slug")
    )
)]
pub async fn get_event_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<EventDto>> {
    state
        .services
        .event_queries
        .get_event_by_slug(&slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/events",
    tag = "content",
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 409, description = "Slug already taken")
    )
)]
pub async fn create_event(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateEventRequest>,
) -> HttpResult<(StatusCode, Json<EventDto>)> {
    let created = state
        .services
        .event_commands
        .create_event(
            &user,
            CreateEventCommand {
                title: payload.title,
                date: payload.date,
                time: payload.time,
                location: payload.location,
                category: payload.category,
                description: payload.description,
                image: payload.image,
            },
        )
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = "content",
    params(("id" = i64, Path, description = "Event id")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Updated event", body = EventDto),
        (status = 404, description = "No such event")
    )
)]
pub async fn update_event(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateEventRequest>,
) -> HttpResult<Json<EventDto>> {
    state
        .services
        .event_commands
        .update_event(
            &user,
            id,
            UpdateEventCommand {
                title: payload.title,
                date: payload.date,
                time: payload.time,
                location: payload.location,
                category: payload.category,
                description: payload.description,
                image: payload.image,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = "content",
    params(("id" = i64, Path, description = "Event id")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Event removed"),
        (status = 404, description = "No such event")
    )
)]
pub async fn delete_event(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .event_commands
        .delete_event(&user, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
