//! Equipment registry service

use crate::{
    error::AppResult,
    models::equipment::{Equipment, EquipmentDetails, EquipmentInput, EquipmentQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &EquipmentQuery) -> AppResult<Vec<EquipmentDetails>> {
        self.repository.equipment.list(query).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<EquipmentDetails> {
        self.repository.equipment.get_by_id(id).await
    }

    pub async fn create(&self, data: &EquipmentInput) -> AppResult<Equipment> {
        let equipment = self.repository.equipment.create(data).await?;
        tracing::info!("Equipment {} registered: {}", equipment.id, equipment.name);
        Ok(equipment)
    }

    pub async fn update(&self, id: i32, data: &EquipmentInput) -> AppResult<Equipment> {
        self.repository.equipment.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.equipment.delete(id).await?;
        tracing::info!("Equipment {} deleted", id);
        Ok(())
    }
}
