use crate::application::{
    commands::users::{LoginCommand, ResetPasswordCommand, SignupCommand},
    dto::{LoginResponseDto, UserDto},
};
use crate::domain::user::Role;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "auth",
    responses(
        (status = 201, description = "Account created", body = LoginResponseDto),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn signup(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Json(payload): Json<SignupRequest>,
) -> HttpResult<(StatusCode, Json<LoginResponseDto>)> {
    let response = state
        .services
        .user_commands
        .signup(
            actor.0.as_ref(),
            SignupCommand {
                name: payload.name,
                email: payload.email,
                password: payload.password,
                role: payload.role,
                profile_pic: payload.profile_pic,
                mobile: payload.mobile,
            },
        )
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    responses(
        (status = 200, description = "Token issued", body = LoginResponseDto),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<LoginResponseDto>> {
    state
        .services
        .user_commands
        .login(LoginCommand {
            email: payload.email,
            password: payload.password,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    tag = "auth",
    responses(
        (status = 200, description = "Reset email sent"),
        (status = 404, description = "No account for that email")
    )
)]
pub async fn forgot_password(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ForgotPasswordRequest>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .user_commands
        .forgot_password(&payload.email)
        .await
        .into_http()?;
    Ok(Json(json!({ "message": "Password reset email sent" })))
}

#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = "auth",
    responses(
        (status = 200, description = "Password updated"),
        (status = 400, description = "Invalid or expired token")
    )
)]
pub async fn reset_password(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ResetPasswordRequest>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .user_commands
        .reset_password(ResetPasswordCommand {
            token: payload.token,
            password: payload.password,
        })
        .await
        .into_http()?;
    Ok(Json(json!({ "message": "Password reset successful" })))
}

#[utoipa::path(
    get,
    path = "/api/auth/profile",
    tag = "auth",
    security(("bearer" = [])),
    responses((status = 200, description = "Current account", body = UserDto))
)]
pub async fn profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_commands
        .profile(&user)
        .await
        .into_http()
        .map(Json)
}
