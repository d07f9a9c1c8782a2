//! Equipment model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: i32,
    pub name: String,
    pub serial_number: Option<String>,
    pub type_model: Option<String>,
    pub category_id: Option<i32>,
    pub company_id: Option<i32>,
    /// Employee the equipment is assigned to
    pub employee_id: Option<i32>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub shop_detail: Option<String>,
    pub maintenance_type: Option<String>,
    pub assigned_date: Option<NaiveDate>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_info: Option<String>,
    pub description: Option<String>,
    /// Team copied onto new requests that do not name one
    pub default_team_id: Option<i32>,
    pub default_technician_id: Option<i32>,
    /// Set once a linked request reaches Scrap; never cleared
    pub is_scrapped: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Equipment with display names and open request count
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EquipmentDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub equipment: Equipment,
    pub category_name: Option<String>,
    pub employee_name: Option<String>,
    pub team_name: Option<String>,
    pub company_name: Option<String>,
    /// Linked requests whose status is anything but Repaired (Scrap included)
    pub open_requests_count: i64,
}

/// Create or update equipment request
///
/// Updates are a full replace: omitted optional fields are cleared.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EquipmentInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub serial_number: Option<String>,
    pub type_model: Option<String>,
    pub category_id: Option<i32>,
    pub company_id: Option<i32>,
    pub employee_id: Option<i32>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub shop_detail: Option<String>,
    pub maintenance_type: Option<String>,
    pub assigned_date: Option<NaiveDate>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_info: Option<String>,
    pub description: Option<String>,
    pub default_team_id: Option<i32>,
    pub default_technician_id: Option<i32>,
}

/// Equipment list filters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct EquipmentQuery {
    /// Exact department match
    pub department: Option<String>,
    pub employee_id: Option<i32>,
    pub category_id: Option<i32>,
    pub company_id: Option<i32>,
}
