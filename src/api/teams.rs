//! Maintenance team endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::team::{Team, TeamDetails, TeamInput},
};

use super::AuthenticatedUser;

/// List teams with their members
#[utoipa::path(
    get,
    path = "/teams",
    tag = "teams",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Team list", body = Vec<TeamDetails>)
    )
)]
pub async fn list_teams(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<TeamDetails>>> {
    let teams = state.services.teams.list().await?;
    Ok(Json(teams))
}

/// Get team by ID
#[utoipa::path(
    get,
    path = "/teams/{id}",
    tag = "teams",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team details", body = TeamDetails),
        (status = 404, description = "Team not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_team(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<TeamDetails>> {
    let team = state.services.teams.get_by_id(id).await?;
    Ok(Json(team))
}

/// Create team
#[utoipa::path(
    post,
    path = "/teams",
    tag = "teams",
    security(("bearer_auth" = [])),
    request_body = TeamInput,
    responses(
        (status = 201, description = "Team created", body = Team)
    )
)]
pub async fn create_team(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(data): Json<TeamInput>,
) -> AppResult<(StatusCode, Json<Team>)> {
    data.validate()?;
    let team = state.services.teams.create(&data).await?;
    Ok((StatusCode::CREATED, Json(team)))
}

/// Update team; `member_ids`, when given, replaces the member set
#[utoipa::path(
    put,
    path = "/teams/{id}",
    tag = "teams",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Team ID")),
    request_body = TeamInput,
    responses(
        (status = 200, description = "Team updated", body = Team),
        (status = 404, description = "Team not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_team(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<TeamInput>,
) -> AppResult<Json<Team>> {
    data.validate()?;
    let team = state.services.teams.update(id, &data).await?;
    Ok(Json(team))
}

/// Delete team
#[utoipa::path(
    delete,
    path = "/teams/{id}",
    tag = "teams",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 204, description = "Team deleted"),
        (status = 404, description = "Team not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_team(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.teams.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
