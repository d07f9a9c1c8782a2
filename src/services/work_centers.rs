//! Work centers service

use crate::{
    error::{AppError, AppResult},
    models::work_center::{WorkCenter, WorkCenterDetails, WorkCenterInput},
    repository::Repository,
};

#[derive(Clone)]
pub struct WorkCentersService {
    repository: Repository,
}

impl WorkCentersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<WorkCenterDetails>> {
        self.repository.work_centers.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<WorkCenterDetails> {
        self.repository.work_centers.get_by_id(id).await
    }

    pub async fn create(&self, data: &WorkCenterInput) -> AppResult<WorkCenter> {
        self.repository.work_centers.create(data).await
    }

    pub async fn update(&self, id: i32, data: &WorkCenterInput) -> AppResult<WorkCenter> {
        if data.alternative_work_center_id == Some(id) {
            return Err(AppError::BadRequest(
                "A work center cannot be its own alternative".to_string(),
            ));
        }
        self.repository.work_centers.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.work_centers.delete(id).await
    }
}
