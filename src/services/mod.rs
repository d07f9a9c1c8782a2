//! Business logic services

pub mod auth;
pub mod categories;
pub mod directory;
pub mod equipment;
pub mod reports;
pub mod requests;
pub mod teams;
pub mod work_centers;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub equipment: equipment::EquipmentService,
    pub requests: requests::RequestsService,
    pub teams: teams::TeamsService,
    pub work_centers: work_centers::WorkCentersService,
    pub categories: categories::CategoriesService,
    pub directory: directory::DirectoryService,
    pub reports: reports::ReportsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            equipment: equipment::EquipmentService::new(repository.clone()),
            requests: requests::RequestsService::new(repository.clone()),
            teams: teams::TeamsService::new(repository.clone()),
            work_centers: work_centers::WorkCentersService::new(repository.clone()),
            categories: categories::CategoriesService::new(repository.clone()),
            directory: directory::DirectoryService::new(repository.clone()),
            reports: reports::ReportsService::new(repository.clone()),
            repository,
        }
    }

    /// Database round-trip for the readiness probe
    pub async fn ping(&self) -> crate::error::AppResult<()> {
        self.repository.ping().await
    }
}
