use super::read_form;
use crate::application::{
    commands::submissions::{
        SubmitAppointmentCommand, SubmitContactCommand, SubmitMembershipCommand,
    },
    dto::{AppointmentDto, ContactDto, MembershipAddressDto, MembershipDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path},
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct AppointmentRequest {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: String,
}

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "engagement",
    responses((status = 201, description = "Message received", body = ContactDto))
)]
pub async fn submit_contact(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ContactRequest>,
) -> HttpResult<(StatusCode, Json<ContactDto>)> {
    let created = state
        .services
        .submission_commands
        .submit_contact(SubmitContactCommand {
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            subject: payload.subject,
            message: payload.message,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "engagement",
    security(("bearer" = [])),
    responses((status = 200, description = "All contact messages", body = [ContactDto]))
)]
pub async fn list_contacts(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ContactDto>>> {
    state
        .services
        .submission_queries
        .list_contacts(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/contact/{id}",
    tag = "engagement",
    params(("id" = i64, Path, description = "Contact message id")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Contact message", body = ContactDto),
        (status = 404, description = "No such message")
    )
)]
pub async fn get_contact(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ContactDto>> {
    state
        .services
        .submission_queries
        .get_contact(&user, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/contact/{id}/status",
    tag = "engagement",
    params(("id" = i64, Path, description = "Contact message id")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Updated message", body = ContactDto),
        (status = 404, description = "No such message")
    )
)]
pub async fn set_contact_status(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<SetStatusRequest>,
) -> HttpResult<Json<ContactDto>> {
    state
        .services
        .submission_commands
        .set_contact_status(&user, id, &payload.status)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/contact/{id}",
    tag = "engagement",
    params(("id" = i64, Path, description = "Contact message id")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Message removed"),
        (status = 404, description = "No such message")
    )
)]
pub async fn delete_contact(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .submission_commands
        .delete_contact(&user, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = "engagement",
    responses((status = 201, description = "Request received", body = AppointmentDto))
)]
pub async fn submit_appointment(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<AppointmentRequest>,
) -> HttpResult<(StatusCode, Json<AppointmentDto>)> {
    let created = state
        .services
        .submission_commands
        .submit_appointment(SubmitAppointmentCommand {
            name: payload.name,
            mobile: payload.mobile,
            email: payload.email,
            message: payload.message,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/appointments",
    tag = "engagement",
    security(("bearer" = [])),
    responses((status = 200, description = "All appointment requests", body = [AppointmentDto]))
)]
pub async fn list_appointments(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<AppointmentDto>>> {
    state
        .services
        .submission_queries
        .list_appointments(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/appointments/{id}",
    tag = "engagement",
    params(("id" = i64, Path, description = "Appointment id")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Appointment request", body = AppointmentDto),
        (status = 404, description = "No such request")
    )
)]
pub async fn get_appointment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<AppointmentDto>> {
    state
        .services
        .submission_queries
        .get_appointment(&user, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/appointments/{id}/status",
    tag = "engagement",
    params(("id" = i64, Path, description = "Appointment id")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Updated request", body = AppointmentDto),
        (status = 404, description = "No such request")
    )
)]
pub async fn set_appointment_status(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<SetStatusRequest>,
) -> HttpResult<Json<AppointmentDto>> {
    state
        .services
        .submission_commands
        .set_appointment_status(&user, id, &payload.status)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/appointments/{id}",
    tag = "engagement",
    params(("id" = i64, Path, description = "Appointment id")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Request removed"),
        (status = 404, description = "No such request")
    )
)]
pub async fn delete_appointment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .submission_commands
        .delete_appointment(&user, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

/// Membership application form; text fields plus an optional `id_proof`
/// file part. The address block arrives as a JSON-encoded `address` field.
#[utoipa::path(
    post,
    path = "/api/memberships",
    tag = "engagement",
    responses((status = 201, description = "Application received", body = MembershipDto))
)]
pub async fn submit_membership(
    Extension(state): Extension<HttpState>,
    multipart: Multipart,
) -> HttpResult<(StatusCode, Json<MembershipDto>)> {
    let form = read_form(multipart, state.uploads.as_ref(), "memberships").await?;

    let address: MembershipAddressDto = form.json("address")?.unwrap_or_default();

    let created = state
        .services
        .submission_commands
        .submit_membership(SubmitMembershipCommand {
            first_name: form.require("first_name")?,
            last_name: form.require("last_name")?,
            email: form.require("email")?,
            mobile: form.text("mobile").map(str::to_owned),
            address: address.into(),
            motivation: form.text("motivation").map(str::to_owned),
            id_proof_file: form.file("id_proof").map(str::to_owned),
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/memberships",
    tag = "engagement",
    security(("bearer" = [])),
    responses((status = 200, description = "All membership applications", body = [MembershipDto]))
)]
pub async fn list_memberships(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<MembershipDto>>> {
    state
        .services
        .submission_queries
        .list_memberships(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/memberships/{id}",
    tag = "engagement",
    params(("id" = i64, Path, description = "Membership application id")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Membership application", body = MembershipDto),
        (status = 404, description = "No such application")
    )
)]
pub async fn get_membership(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<MembershipDto>> {
    state
        .services
        .submission_queries
        .get_membership(&user, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/memberships/{id}/status",
    tag = "engagement",
    params(("id" = i64, Path, description = "Membership application id")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Updated application", body = MembershipDto),
        (status = 404, description = "No such application")
    )
)]
pub async fn set_membership_status(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<SetStatusRequest>,
) -> HttpResult<Json<MembershipDto>> {
    state
        .services
        .submission_commands
        .set_membership_status(&user, id, &payload.status)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/memberships/{id}",
    tag = "engagement",
    params(("id" = i64, Path, description = "Membership application id")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Application removed"),
        (status = 404, description = "No such application")
    )
)]
pub async fn delete_membership(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .submission_commands
        .delete_membership(&user, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
