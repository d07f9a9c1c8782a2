//! Work center model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Work center record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkCenter {
    pub id: i32,
    pub name: String,
    #[schema(value_type = Option<String>)]
    pub cost: Option<Decimal>,
    pub tag: Option<String>,
    #[schema(value_type = Option<String>)]
    pub cost_per_hour: Option<Decimal>,
    #[schema(value_type = Option<String>)]
    pub capacity_task_per_hour: Option<Decimal>,
    pub daily_target: Option<i32>,
    /// Fallback work center (same table)
    pub alternative_work_center_id: Option<i32>,
    pub company_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Work center with resolved names
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkCenterDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub work_center: WorkCenter,
    pub company_name: Option<String>,
    pub alternative_work_center_name: Option<String>,
}

/// Create or update work center request (update is a full replace)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct WorkCenterInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[schema(value_type = Option<String>)]
    pub cost: Option<Decimal>,
    pub tag: Option<String>,
    #[schema(value_type = Option<String>)]
    pub cost_per_hour: Option<Decimal>,
    #[schema(value_type = Option<String>)]
    pub capacity_task_per_hour: Option<Decimal>,
    pub daily_target: Option<i32>,
    pub alternative_work_center_id: Option<i32>,
    pub company_id: Option<i32>,
}
