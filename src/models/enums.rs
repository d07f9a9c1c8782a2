//! Maintenance request enumerations
//!
//! Stored as their display strings (`'In Progress'`, not `in_progress`); the
//! database CHECK constraints accept exactly these labels.

use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, Postgres};
use utoipa::ToSchema;

macro_rules! text_enum {
    ($ty:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($ty::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($ty), s)),
                }
            }
        }

        impl sqlx::Type<Postgres> for $ty {
            fn type_info() -> sqlx::postgres::PgTypeInfo {
                <String as sqlx::Type<Postgres>>::type_info()
            }

            fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
                <String as sqlx::Type<Postgres>>::compatible(ty)
            }
        }

        impl<'r> Decode<'r, Postgres> for $ty {
            fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
                let s = <&str as Decode<Postgres>>::decode(value)?;
                s.parse().map_err(|e: String| e.into())
            }
        }

        impl Encode<'_, Postgres> for $ty {
            fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
                <&str as Encode<Postgres>>::encode(self.as_str(), buf)
            }
        }
    };
}

/// Kind of maintenance work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum RequestType {
    Corrective,
    Preventive,
}

text_enum!(RequestType {
    Corrective => "Corrective",
    Preventive => "Preventive",
});

/// Request status (kanban column)
///
/// Any status may follow any other; there is no transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum RequestStatus {
    New,
    #[serde(rename = "In Progress")]
    InProgress,
    Repaired,
    Scrap,
}

text_enum!(RequestStatus {
    New => "New",
    InProgress => "In Progress",
    Repaired => "Repaired",
    Scrap => "Scrap",
});

impl Default for RequestStatus {
    fn default() -> Self {
        RequestStatus::New
    }
}

impl RequestStatus {
    /// Whether moving a request into this status marks its equipment scrapped
    pub fn scraps_equipment(&self) -> bool {
        matches!(self, RequestStatus::Scrap)
    }

    /// Statuses excluded from the dashboard's overdue/upcoming buckets
    pub fn closed_labels() -> Vec<&'static str> {
        vec![RequestStatus::Repaired.as_str(), RequestStatus::Scrap.as_str()]
    }

    /// Statuses counted as open on the dashboard
    pub fn open_labels() -> Vec<&'static str> {
        vec![RequestStatus::New.as_str(), RequestStatus::InProgress.as_str()]
    }
}

/// Request priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

text_enum!(Priority {
    Low => "Low",
    Medium => "Medium",
    High => "High",
    Urgent => "Urgent",
});

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_progress_label() {
        assert_eq!(RequestStatus::InProgress.as_str(), "In Progress");
        assert_eq!("In Progress".parse::<RequestStatus>(), Ok(RequestStatus::InProgress));
        assert_eq!(
            serde_json::to_string(&RequestStatus::InProgress).unwrap(),
            "\"In Progress\""
        );
        let parsed: RequestStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(parsed, RequestStatus::InProgress);
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert!("scrap".parse::<RequestStatus>().is_err());
        assert!("in_progress".parse::<RequestStatus>().is_err());
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_only_scrap_propagates() {
        let scrapping: Vec<_> = RequestStatus::ALL
            .iter()
            .filter(|s| s.scraps_equipment())
            .collect();
        assert_eq!(scrapping, vec![&RequestStatus::Scrap]);
    }

    #[test]
    fn test_open_and_closed_buckets_are_disjoint() {
        let open = RequestStatus::open_labels();
        let closed = RequestStatus::closed_labels();
        assert!(open.iter().all(|s| !closed.contains(s)));
        assert_eq!(open.len() + closed.len(), RequestStatus::ALL.len());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(RequestStatus::default(), RequestStatus::New);
    }
}
