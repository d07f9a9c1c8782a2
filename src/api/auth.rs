//! Authentication endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppResult,
    models::user::{RegisterUser, User, UserShort},
};

use super::AuthenticatedUser;

/// Login request
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    /// User email
    pub email: String,
    /// User password
    pub password: String,
}

/// Login response with JWT token
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// JWT access token
    pub token: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    pub user: UserShort,
}

impl LoginResponse {
    fn new(token: String, user: User) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            user: user.into(),
        }
    }
}

/// Create an account
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = RegisterUser,
    responses(
        (status = 201, description = "Account created", body = LoginResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 409, description = "Email already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<crate::AppState>,
    Json(data): Json<RegisterUser>,
) -> AppResult<(StatusCode, Json<LoginResponse>)> {
    data.validate()?;
    let (token, user) = state.services.auth.register(&data).await?;
    Ok((StatusCode::CREATED, Json(LoginResponse::new(token, user))))
}

/// Authenticate user and get JWT token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (token, user) = state
        .services
        .auth
        .authenticate(&request.email, &request.password)
        .await?;
    Ok(Json(LoginResponse::new(token, user)))
}

/// Get current user information
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = UserShort),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn me(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<UserShort>> {
    let user = state.services.auth.get_by_id(claims.user_id).await?;
    Ok(Json(user.into()))
}
