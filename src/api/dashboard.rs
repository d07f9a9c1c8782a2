//! Dashboard and report endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::report::{CategoryRequestCount, Dashboard, StatusRequestCount, TeamRequestCount},
};

use super::AuthenticatedUser;

/// Due-date counters, open request count and the most recent requests
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "reports",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard summary", body = Dashboard)
    )
)]
pub async fn get_dashboard(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Dashboard>> {
    let dashboard = state.services.reports.dashboard().await?;
    Ok(Json(dashboard))
}

/// Request count per team, busiest first
#[utoipa::path(
    get,
    path = "/reports/requests-per-team",
    tag = "reports",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Requests per team", body = Vec<TeamRequestCount>)
    )
)]
pub async fn requests_per_team(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<TeamRequestCount>>> {
    let counts = state.services.reports.requests_per_team().await?;
    Ok(Json(counts))
}

/// Request count per equipment category, busiest first
#[utoipa::path(
    get,
    path = "/reports/requests-per-category",
    tag = "reports",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Requests per category", body = Vec<CategoryRequestCount>)
    )
)]
pub async fn requests_per_category(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<CategoryRequestCount>>> {
    let counts = state.services.reports.requests_per_category().await?;
    Ok(Json(counts))
}

/// Request count per status
#[utoipa::path(
    get,
    path = "/reports/requests-by-status",
    tag = "reports",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Requests by status", body = Vec<StatusRequestCount>)
    )
)]
pub async fn requests_by_status(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<StatusRequestCount>>> {
    let counts = state.services.reports.requests_by_status().await?;
    Ok(Json(counts))
}
