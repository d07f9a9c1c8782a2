//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, categories, dashboard, directory, equipment, health, requests, teams, work_centers};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "GearGuard API",
        version = "1.0.0",
        description = "Maintenance tracking REST API: equipment, teams and maintenance requests",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::register,
        auth::login,
        auth::me,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::list_equipment_requests,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Requests
        requests::list_requests,
        requests::get_request,
        requests::create_request,
        requests::update_request,
        requests::patch_request_status,
        requests::delete_request,
        // Teams
        teams::list_teams,
        teams::get_team,
        teams::create_team,
        teams::update_team,
        teams::delete_team,
        // Work centers
        work_centers::list_work_centers,
        work_centers::get_work_center,
        work_centers::create_work_center,
        work_centers::update_work_center,
        work_centers::delete_work_center,
        // Categories
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        // Directory
        directory::list_companies,
        directory::list_users,
        // Reports
        dashboard::get_dashboard,
        dashboard::requests_per_team,
        dashboard::requests_per_category,
        dashboard::requests_by_status,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            crate::models::user::RegisterUser,
            crate::models::user::UserShort,
            // Enums
            crate::models::enums::RequestType,
            crate::models::enums::RequestStatus,
            crate::models::enums::Priority,
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::EquipmentDetails,
            crate::models::equipment::EquipmentInput,
            // Requests
            crate::models::request::MaintenanceRequest,
            crate::models::request::RequestDetails,
            crate::models::request::CreateRequest,
            crate::models::request::UpdateRequest,
            crate::models::request::PatchStatus,
            // Teams
            crate::models::team::Team,
            crate::models::team::TeamMember,
            crate::models::team::TeamDetails,
            crate::models::team::TeamInput,
            // Work centers
            crate::models::work_center::WorkCenter,
            crate::models::work_center::WorkCenterDetails,
            crate::models::work_center::WorkCenterInput,
            // Categories
            crate::models::category::Category,
            crate::models::category::CategoryDetails,
            crate::models::category::CategoryInput,
            // Directory
            crate::models::company::Company,
            // Reports
            crate::models::report::Dashboard,
            crate::models::report::TeamRequestCount,
            crate::models::report::CategoryRequestCount,
            crate::models::report::StatusRequestCount,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Registration and login"),
        (name = "equipment", description = "Equipment registry"),
        (name = "requests", description = "Maintenance requests and kanban status"),
        (name = "teams", description = "Maintenance teams"),
        (name = "workcenters", description = "Work centers"),
        (name = "categories", description = "Equipment categories"),
        (name = "directory", description = "Companies and users"),
        (name = "reports", description = "Dashboard and reports")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/auth/login",
            "/equipment/{id}/requests",
            "/requests/{id}/status",
            "/workcenters/{id}",
            "/reports/requests-by-status",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
