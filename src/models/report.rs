//! Dashboard and report projections

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{enums::RequestStatus, request::RequestDetails};

/// Dashboard counters and most recent requests
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Dashboard {
    /// Due before today, not Repaired or Scrap
    pub overdue_tasks: i64,
    /// Due today or later, not Repaired or Scrap
    pub upcoming_tasks: i64,
    /// New or In Progress
    pub open_requests: i64,
    /// Ten most recently created requests
    pub recent_tasks: Vec<RequestDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TeamRequestCount {
    pub id: i32,
    pub team_name: String,
    pub request_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CategoryRequestCount {
    pub id: i32,
    pub category_name: String,
    pub request_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StatusRequestCount {
    pub status: RequestStatus,
    pub count: i64,
}
