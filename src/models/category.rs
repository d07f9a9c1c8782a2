//! Equipment category model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Equipment category record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub responsible_user_id: Option<i32>,
    pub company_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Category with responsible user and company names
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CategoryDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub category: Category,
    pub responsible_name: Option<String>,
    pub company_name: Option<String>,
}

/// Create or update category request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CategoryInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub responsible_user_id: Option<i32>,
    pub company_id: Option<i32>,
}
