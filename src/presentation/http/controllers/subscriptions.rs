use crate::application::dto::SubscriptionDto;
use crate::domain::subscription::SubscriptionStatus;
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
pub struct SubscribeRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct SubscriptionListParams {
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: String,
}

#[utoipa::path(
    post,
    path = "/api/subscriptions",
    tag = "engagement",
    responses(
        (status = 201, description = "Subscribed", body = SubscriptionDto),
        (status = 409, description = "Address already subscribed")
    )
)]
pub async fn subscribe(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SubscribeRequest>,
) -> HttpResult<(StatusCode, Json<SubscriptionDto>)> {
    let created = state
        .services
        .subscription_commands
        .subscribe(&payload.email)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/subscriptions",
    tag = "engagement",
    security(("bearer" = [])),
    responses((status = 200, description = "All subscriptions", body = [SubscriptionDto]))
)]
pub async fn list_subscriptions(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<SubscriptionListParams>,
) -> HttpResult<Json<Vec<SubscriptionDto>>> {
    let status = params
        .status
        .as_deref()
        .map(str::parse::<SubscriptionStatus>)
        .transpose()
        .map_err(crate::application::error::ApplicationError::from)
        .into_http()?;

    state
        .services
        .subscription_queries
        .list(&user, status)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/subscriptions/{id}",
    tag = "engagement",
    params(("id" = i64, Path, description = "Subscription id")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Updated subscription", body = SubscriptionDto),
        (status = 404, description = "No such subscription")
    )
)]
pub async fn set_status(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<SetStatusRequest>,
) -> HttpResult<Json<SubscriptionDto>> {
    let status = payload
        .status
        .parse::<SubscriptionStatus>()
        .map_err(crate::application::error::ApplicationError::from)
        .into_http()?;

    state
        .services
        .subscription_commands
        .set_status(&user, id, status)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/subscriptions/{id}",
    tag = "engagement",
    params(("id" = i64, Path, description = "Subscription id")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Subscription removed"),
        (status = 404, description = "No such subscription")
    )
)]
pub async fn delete_subscription(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .subscription_commands
        .delete(&user, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
