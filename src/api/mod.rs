//! API handlers for GearGuard REST endpoints

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod directory;
pub mod equipment;
pub mod health;
pub mod openapi;
pub mod requests;
pub mod teams;
pub mod work_centers;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
    routing::{get, patch, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, models::user::UserClaims, AppState};

/// Extractor for authenticated user from JWT token
pub struct AuthenticatedUser(pub UserClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Authentication("Invalid authorization header format".to_string()))?;

        let claims = UserClaims::from_token(token, &state.config.auth.jwt_secret)
            .map_err(|e| AppError::Authentication(e.to_string()))?;

        Ok(AuthenticatedUser(claims))
    }
}

/// Routes mounted under `/api/v1`
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Authentication
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        // Equipment
        .route("/equipment", get(equipment::list_equipment).post(equipment::create_equipment))
        .route(
            "/equipment/:id",
            get(equipment::get_equipment)
                .put(equipment::update_equipment)
                .delete(equipment::delete_equipment),
        )
        .route("/equipment/:id/requests", get(equipment::list_equipment_requests))
        // Maintenance requests
        .route("/requests", get(requests::list_requests).post(requests::create_request))
        .route(
            "/requests/:id",
            get(requests::get_request)
                .put(requests::update_request)
                .delete(requests::delete_request),
        )
        .route("/requests/:id/status", patch(requests::patch_request_status))
        // Teams
        .route("/teams", get(teams::list_teams).post(teams::create_team))
        .route(
            "/teams/:id",
            get(teams::get_team).put(teams::update_team).delete(teams::delete_team),
        )
        // Work centers
        .route(
            "/workcenters",
            get(work_centers::list_work_centers).post(work_centers::create_work_center),
        )
        .route(
            "/workcenters/:id",
            get(work_centers::get_work_center)
                .put(work_centers::update_work_center)
                .delete(work_centers::delete_work_center),
        )
        // Categories
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/:id",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        // Directory
        .route("/companies", get(directory::list_companies))
        .route("/users", get(directory::list_users))
        // Dashboard and reports
        .route("/dashboard", get(dashboard::get_dashboard))
        .route("/reports/requests-per-team", get(dashboard::requests_per_team))
        .route("/reports/requests-per-category", get(dashboard::requests_per_category))
        .route("/reports/requests-by-status", get(dashboard::requests_by_status))
        .with_state(state)
}

/// Full application: API under `/api/v1`, Swagger UI at the root
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/v1", create_router(state))
        .merge(openapi::create_openapi_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
