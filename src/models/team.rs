//! Maintenance team model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use utoipa::ToSchema;
use validator::Validate;

/// Team record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub company_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Team member as shown in team listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TeamMember {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Internal row structure: members are aggregated with json_agg
#[derive(Debug, Clone, FromRow)]
pub struct TeamRow {
    #[sqlx(flatten)]
    team: Team,
    company_name: Option<String>,
    members: Json<Vec<TeamMember>>,
}

impl From<TeamRow> for TeamDetails {
    fn from(row: TeamRow) -> Self {
        TeamDetails {
            team: row.team,
            company_name: row.company_name,
            members: row.members.0,
        }
    }
}

/// Team with company name and member list
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamDetails {
    #[serde(flatten)]
    pub team: Team,
    pub company_name: Option<String>,
    pub members: Vec<TeamMember>,
}

/// Create or update team request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TeamInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub company_id: Option<i32>,
    /// Replaces the member set when present; left untouched on update when omitted
    pub member_ids: Option<Vec<i32>>,
}

impl TeamInput {
    /// Member ids with duplicates removed, first occurrence kept
    pub fn unique_member_ids(&self) -> Vec<i32> {
        let mut seen = std::collections::HashSet::new();
        self.member_ids
            .iter()
            .flatten()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_member_ids() {
        let input = TeamInput {
            name: "Mechanics".to_string(),
            company_id: None,
            member_ids: Some(vec![3, 1, 3, 2, 1]),
        };
        assert_eq!(input.unique_member_ids(), vec![3, 1, 2]);
    }

    #[test]
    fn test_no_member_ids() {
        let input: TeamInput = serde_json::from_str(r#"{"name": "IT Support"}"#).unwrap();
        assert!(input.member_ids.is_none());
        assert!(input.unique_member_ids().is_empty());
    }
}
