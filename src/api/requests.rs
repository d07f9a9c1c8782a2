//! Maintenance request endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::request::{
        CreateRequest, MaintenanceRequest, PatchStatus, RequestDetails, RequestQuery, UpdateRequest,
    },
};

use super::AuthenticatedUser;

/// List maintenance requests
#[utoipa::path(
    get,
    path = "/requests",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(RequestQuery),
    responses(
        (status = 200, description = "Requests, newest first", body = Vec<RequestDetails>),
        (status = 400, description = "Unknown status or type", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_requests(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<RequestQuery>,
) -> AppResult<Json<Vec<RequestDetails>>> {
    let requests = state.services.requests.list(&query).await?;
    Ok(Json(requests))
}

/// Get maintenance request by ID
#[utoipa::path(
    get,
    path = "/requests/{id}",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request details", body = RequestDetails),
        (status = 404, description = "Request not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_request(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<RequestDetails>> {
    let request = state.services.requests.get_by_id(id).await?;
    Ok(Json(request))
}

/// File a maintenance request as the calling user
#[utoipa::path(
    post,
    path = "/requests",
    tag = "requests",
    security(("bearer_auth" = [])),
    request_body = CreateRequest,
    responses(
        (status = 201, description = "Request created with status New", body = MaintenanceRequest),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_request(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateRequest>,
) -> AppResult<(StatusCode, Json<MaintenanceRequest>)> {
    data.validate()?;
    let request = state.services.requests.create(&data, claims.user_id).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// Replace a maintenance request
#[utoipa::path(
    put,
    path = "/requests/{id}",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Request ID")),
    request_body = UpdateRequest,
    responses(
        (status = 200, description = "Request updated", body = MaintenanceRequest),
        (status = 404, description = "Request not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_request(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateRequest>,
) -> AppResult<Json<MaintenanceRequest>> {
    data.validate()?;
    let request = state.services.requests.update(id, &data).await?;
    Ok(Json(request))
}

/// Change only the status of a request
#[utoipa::path(
    patch,
    path = "/requests/{id}/status",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Request ID")),
    request_body = PatchStatus,
    responses(
        (status = 200, description = "Status changed", body = MaintenanceRequest),
        (status = 404, description = "Request not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn patch_request_status(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<PatchStatus>,
) -> AppResult<Json<MaintenanceRequest>> {
    let request = state.services.requests.patch_status(id, data.status).await?;
    Ok(Json(request))
}

/// Delete a maintenance request
#[utoipa::path(
    delete,
    path = "/requests/{id}",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Request ID")),
    responses(
        (status = 204, description = "Request deleted"),
        (status = 404, description = "Request not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_request(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.requests.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
