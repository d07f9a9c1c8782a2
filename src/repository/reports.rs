//! Read-only aggregates for the dashboard and reports

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        enums::RequestStatus,
        report::{CategoryRequestCount, StatusRequestCount, TeamRequestCount},
    },
};

/// Which side of today a due date falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueBucket {
    /// due_date < today
    Overdue,
    /// due_date >= today
    Upcoming,
}

impl DueBucket {
    fn comparison(self) -> &'static str {
        match self {
            DueBucket::Overdue => "<",
            DueBucket::Upcoming => ">=",
        }
    }
}

#[derive(Clone)]
pub struct ReportsRepository {
    pool: Pool<Postgres>,
}

impl ReportsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Requests with a due date in `bucket`, Repaired and Scrap excluded.
    /// Requests without a due date fall in neither bucket.
    pub async fn count_due(&self, bucket: DueBucket) -> AppResult<i64> {
        let query = format!(
            "SELECT COUNT(*) FROM maintenance_requests \
             WHERE due_date {} CURRENT_DATE AND status <> ALL($1)",
            bucket.comparison()
        );
        let count: i64 = sqlx::query_scalar(&query)
            .bind(RequestStatus::closed_labels())
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Requests currently New or In Progress
    pub async fn count_open(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM maintenance_requests WHERE status = ANY($1)",
        )
        .bind(RequestStatus::open_labels())
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Request count per team, teams without requests included
    pub async fn requests_per_team(&self) -> AppResult<Vec<TeamRequestCount>> {
        let rows = sqlx::query_as::<_, TeamRequestCount>(
            r#"
            SELECT t.id, t.name AS team_name, COUNT(mr.id) AS request_count
            FROM teams t
            LEFT JOIN maintenance_requests mr ON t.id = mr.team_id
            GROUP BY t.id, t.name
            ORDER BY request_count DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Request count per equipment category, categories without requests included
    pub async fn requests_per_category(&self) -> AppResult<Vec<CategoryRequestCount>> {
        let rows = sqlx::query_as::<_, CategoryRequestCount>(
            r#"
            SELECT ec.id, ec.name AS category_name, COUNT(mr.id) AS request_count
            FROM equipment_categories ec
            LEFT JOIN equipment e ON ec.id = e.category_id
            LEFT JOIN maintenance_requests mr ON e.id = mr.equipment_id
            GROUP BY ec.id, ec.name
            ORDER BY request_count DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Request count per status; statuses with no requests are absent
    pub async fn requests_by_status(&self) -> AppResult<Vec<StatusRequestCount>> {
        let rows = sqlx::query_as::<_, StatusRequestCount>(
            r#"
            SELECT status, COUNT(*) AS count
            FROM maintenance_requests
            GROUP BY status
            ORDER BY count DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
