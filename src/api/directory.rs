//! Company and user pickers

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{company::Company, user::UserShort},
};

use super::AuthenticatedUser;

#[utoipa::path(
    get,
    path = "/companies",
    tag = "directory",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Companies, newest first", body = Vec<Company>)
    )
)]
pub async fn list_companies(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Company>>> {
    let companies = state.services.directory.list_companies().await?;
    Ok(Json(companies))
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "directory",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Users, newest first", body = Vec<UserShort>)
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<UserShort>>> {
    let users = state.services.directory.list_users().await?;
    Ok(Json(users))
}
