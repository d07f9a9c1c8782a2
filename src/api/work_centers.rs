//! Work center endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::work_center::{WorkCenter, WorkCenterDetails, WorkCenterInput},
};

use super::AuthenticatedUser;

#[utoipa::path(
    get,
    path = "/workcenters",
    tag = "workcenters",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Work center list", body = Vec<WorkCenterDetails>)
    )
)]
pub async fn list_work_centers(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<WorkCenterDetails>>> {
    let work_centers = state.services.work_centers.list().await?;
    Ok(Json(work_centers))
}

#[utoipa::path(
    get,
    path = "/workcenters/{id}",
    tag = "workcenters",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Work center ID")),
    responses(
        (status = 200, description = "Work center details", body = WorkCenterDetails),
        (status = 404, description = "Work center not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_work_center(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<WorkCenterDetails>> {
    let work_center = state.services.work_centers.get_by_id(id).await?;
    Ok(Json(work_center))
}

#[utoipa::path(
    post,
    path = "/workcenters",
    tag = "workcenters",
    security(("bearer_auth" = [])),
    request_body = WorkCenterInput,
    responses(
        (status = 201, description = "Work center created", body = WorkCenter)
    )
)]
pub async fn create_work_center(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(data): Json<WorkCenterInput>,
) -> AppResult<(StatusCode, Json<WorkCenter>)> {
    data.validate()?;
    let work_center = state.services.work_centers.create(&data).await?;
    Ok((StatusCode::CREATED, Json(work_center)))
}

#[utoipa::path(
    put,
    path = "/workcenters/{id}",
    tag = "workcenters",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Work center ID")),
    request_body = WorkCenterInput,
    responses(
        (status = 200, description = "Work center updated", body = WorkCenter),
        (status = 400, description = "Work center names itself as alternative", body = crate::error::ErrorResponse),
        (status = 404, description = "Work center not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_work_center(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<WorkCenterInput>,
) -> AppResult<Json<WorkCenter>> {
    data.validate()?;
    let work_center = state.services.work_centers.update(id, &data).await?;
    Ok(Json(work_center))
}

#[utoipa::path(
    delete,
    path = "/workcenters/{id}",
    tag = "workcenters",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Work center ID")),
    responses(
        (status = 204, description = "Work center deleted"),
        (status = 404, description = "Work center not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_work_center(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.work_centers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
