//! Maintenance request model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::{Priority, RequestStatus, RequestType};

/// Maintenance request record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MaintenanceRequest {
    pub id: i32,
    pub subject: String,
    /// Linked equipment; may point at a deleted row
    pub equipment_id: Option<i32>,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub status: RequestStatus,
    pub priority: Priority,
    /// User who filed the request
    pub requester_id: i32,
    pub assignee_id: Option<i32>,
    pub team_id: Option<i32>,
    pub scheduled_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, example = "2.50")]
    pub duration_hours: Option<Decimal>,
    pub location: Option<String>,
    pub frequency: Option<String>,
    pub recurrence_pattern: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Maintenance request with display names resolved through left joins
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RequestDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub request: MaintenanceRequest,
    pub equipment_name: Option<String>,
    pub equipment_serial: Option<String>,
    pub requester_name: Option<String>,
    pub assignee_name: Option<String>,
    pub assignee_email: Option<String>,
    pub team_name: Option<String>,
}

/// Create maintenance request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRequest {
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    pub equipment_id: Option<i32>,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    /// Defaults to Medium
    pub priority: Option<Priority>,
    pub assignee_id: Option<i32>,
    /// When omitted, the equipment's default team is used
    pub team_id: Option<i32>,
    pub scheduled_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>)]
    pub duration_hours: Option<Decimal>,
    pub location: Option<String>,
    pub frequency: Option<String>,
    pub recurrence_pattern: Option<String>,
    pub description: Option<String>,
}

/// Update maintenance request
///
/// Full replace: every field is written, omitted optional fields are cleared.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRequest {
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    pub equipment_id: Option<i32>,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub status: RequestStatus,
    pub priority: Priority,
    pub assignee_id: Option<i32>,
    pub team_id: Option<i32>,
    pub scheduled_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>)]
    pub duration_hours: Option<Decimal>,
    pub location: Option<String>,
    pub frequency: Option<String>,
    pub recurrence_pattern: Option<String>,
    pub description: Option<String>,
}

/// Kanban drag-and-drop status change
#[derive(Debug, Deserialize, ToSchema)]
pub struct PatchStatus {
    pub status: RequestStatus,
}

/// Request list filters (only provided keys are applied)
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct RequestQuery {
    pub status: Option<RequestStatus>,
    #[serde(rename = "type")]
    pub request_type: Option<RequestType>,
    pub team_id: Option<i32>,
    pub equipment_id: Option<i32>,
}
