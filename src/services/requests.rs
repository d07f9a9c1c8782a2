//! Maintenance request lifecycle
//!
//! Two side effects live here:
//! - on creation, a request without a team takes its equipment's default team;
//! - whenever a write leaves a request in `Scrap`, its equipment is marked
//!   scrapped in the same transaction.
//!
//! Status changes are otherwise unrestricted.

use sqlx::PgConnection;

use crate::{
    error::AppResult,
    models::{
        enums::RequestStatus,
        request::{CreateRequest, MaintenanceRequest, RequestDetails, RequestQuery, UpdateRequest},
    },
    repository::{equipment::EquipmentRepository, requests::RequestsRepository, Repository},
};

#[derive(Clone)]
pub struct RequestsService {
    repository: Repository,
}

impl RequestsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &RequestQuery) -> AppResult<Vec<RequestDetails>> {
        self.repository.requests.list(query).await
    }

    /// Requests linked to one equipment, newest first
    pub async fn list_for_equipment(&self, equipment_id: i32) -> AppResult<Vec<RequestDetails>> {
        let query = RequestQuery {
            equipment_id: Some(equipment_id),
            ..Default::default()
        };
        self.repository.requests.list(&query).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<RequestDetails> {
        self.repository.requests.get_by_id(id).await
    }

    /// File a new request on behalf of `requester_id`
    pub async fn create(&self, data: &CreateRequest, requester_id: i32) -> AppResult<MaintenanceRequest> {
        let team_id = match auto_fill_source(data) {
            Some(equipment_id) => {
                let team_id = self.repository.equipment.default_team_id(equipment_id).await?;
                tracing::debug!(
                    "Auto-filled team {:?} from equipment {} default team",
                    team_id,
                    equipment_id
                );
                team_id
            }
            None => data.team_id,
        };

        let request = self.repository.requests.create(data, requester_id, team_id).await?;
        tracing::info!("Maintenance request {} created by user {}", request.id, requester_id);
        Ok(request)
    }

    /// Replace every field of a request, then propagate Scrap to its equipment
    pub async fn update(&self, id: i32, data: &UpdateRequest) -> AppResult<MaintenanceRequest> {
        let mut tx = self.repository.pool.begin().await?;

        let request = RequestsRepository::update_on(&mut *tx, id, data).await?;
        propagate_scrap(&mut *tx, &request).await?;

        tx.commit().await?;
        Ok(request)
    }

    /// Move a request to another kanban column
    pub async fn patch_status(&self, id: i32, status: RequestStatus) -> AppResult<MaintenanceRequest> {
        let mut tx = self.repository.pool.begin().await?;

        let request = RequestsRepository::set_status_on(&mut *tx, id, status).await?;
        propagate_scrap(&mut *tx, &request).await?;

        tx.commit().await?;
        tracing::debug!("Request {} moved to {}", id, status);
        Ok(request)
    }

    /// Hard delete; a scrapped equipment stays scrapped
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.requests.delete(id).await?;
        tracing::info!("Maintenance request {} deleted", id);
        Ok(())
    }
}

/// Equipment whose default team should be looked up for a new request
fn auto_fill_source(data: &CreateRequest) -> Option<i32> {
    match data.team_id {
        Some(_) => None,
        None => data.equipment_id,
    }
}

/// Equipment to mark scrapped after a request write, if any
fn scrap_target(request: &MaintenanceRequest) -> Option<i32> {
    if request.status.scraps_equipment() {
        request.equipment_id
    } else {
        None
    }
}

async fn propagate_scrap(conn: &mut PgConnection, request: &MaintenanceRequest) -> AppResult<()> {
    if let Some(equipment_id) = scrap_target(request) {
        let flipped = EquipmentRepository::mark_scrapped(conn, equipment_id).await?;
        if flipped {
            tracing::info!(
                "Equipment {} marked scrapped by request {}",
                equipment_id,
                request.id
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{Priority, RequestType};
    use chrono::Utc;

    fn create_payload(equipment_id: Option<i32>, team_id: Option<i32>) -> CreateRequest {
        CreateRequest {
            subject: "Leaking oil".to_string(),
            equipment_id,
            request_type: RequestType::Corrective,
            priority: None,
            assignee_id: None,
            team_id,
            scheduled_date: None,
            due_date: None,
            duration_hours: None,
            location: None,
            frequency: None,
            recurrence_pattern: None,
            description: None,
        }
    }

    fn stored_request(status: RequestStatus, equipment_id: Option<i32>) -> MaintenanceRequest {
        let now = Utc::now();
        MaintenanceRequest {
            id: 1,
            subject: "Leaking oil".to_string(),
            equipment_id,
            request_type: RequestType::Corrective,
            status,
            priority: Priority::Medium,
            requester_id: 1,
            assignee_id: None,
            team_id: None,
            scheduled_date: None,
            due_date: None,
            duration_hours: None,
            location: None,
            frequency: None,
            recurrence_pattern: None,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_auto_fill_only_without_explicit_team() {
        assert_eq!(auto_fill_source(&create_payload(Some(5), None)), Some(5));
        assert_eq!(auto_fill_source(&create_payload(Some(5), Some(9))), None);
        assert_eq!(auto_fill_source(&create_payload(None, None)), None);
        assert_eq!(auto_fill_source(&create_payload(None, Some(9))), None);
    }

    #[test]
    fn test_scrap_target_requires_scrap_and_equipment() {
        assert_eq!(scrap_target(&stored_request(RequestStatus::Scrap, Some(3))), Some(3));
        assert_eq!(scrap_target(&stored_request(RequestStatus::Scrap, None)), None);
        for status in [RequestStatus::New, RequestStatus::InProgress, RequestStatus::Repaired] {
            assert_eq!(scrap_target(&stored_request(status, Some(3))), None);
        }
    }

    #[test]
    fn test_create_payload_defaults() {
        let data: CreateRequest = serde_json::from_str(
            r#"{"subject": "Replace belt", "type": "Preventive", "equipment_id": 4}"#,
        )
        .unwrap();
        assert_eq!(data.request_type, RequestType::Preventive);
        assert_eq!(data.priority.unwrap_or_default(), Priority::Medium);
        assert_eq!(auto_fill_source(&data), Some(4));
    }

    #[test]
    fn test_update_payload_requires_status() {
        let missing_status = serde_json::from_str::<UpdateRequest>(
            r#"{"subject": "Replace belt", "type": "Preventive", "priority": "High"}"#,
        );
        assert!(missing_status.is_err());

        let data: UpdateRequest = serde_json::from_str(
            r#"{"subject": "Replace belt", "type": "Preventive", "priority": "High", "status": "Scrap"}"#,
        )
        .unwrap();
        assert_eq!(data.status, RequestStatus::Scrap);
        assert!(data.equipment_id.is_none());
    }
}
