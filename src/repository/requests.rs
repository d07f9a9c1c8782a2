//! Maintenance requests repository

use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::RequestStatus,
        request::{CreateRequest, MaintenanceRequest, RequestDetails, RequestQuery, UpdateRequest},
    },
};

/// Requests joined with equipment, requester, assignee and team names.
/// Left joins keep requests whose references no longer resolve.
const DETAILS_SELECT: &str = r#"
    SELECT mr.*,
        e.name AS equipment_name,
        e.serial_number AS equipment_serial,
        rq.name AS requester_name,
        asg.name AS assignee_name,
        asg.email AS assignee_email,
        t.name AS team_name
    FROM maintenance_requests mr
    LEFT JOIN equipment e ON mr.equipment_id = e.id
    LEFT JOIN users rq ON mr.requester_id = rq.id
    LEFT JOIN users asg ON mr.assignee_id = asg.id
    LEFT JOIN teams t ON mr.team_id = t.id
"#;

#[derive(Clone)]
pub struct RequestsRepository {
    pool: Pool<Postgres>,
}

impl RequestsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List requests, newest first, filtered on the provided keys only
    pub async fn list(&self, query: &RequestQuery) -> AppResult<Vec<RequestDetails>> {
        let mut conditions = Vec::new();
        let mut idx = 1;

        if query.status.is_some() {
            conditions.push(format!("mr.status = ${}", idx));
            idx += 1;
        }
        if query.request_type.is_some() {
            conditions.push(format!("mr.request_type = ${}", idx));
            idx += 1;
        }
        if query.team_id.is_some() {
            conditions.push(format!("mr.team_id = ${}", idx));
            idx += 1;
        }
        if query.equipment_id.is_some() {
            conditions.push(format!("mr.equipment_id = ${}", idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let select_q = format!("{} {} ORDER BY mr.created_at DESC", DETAILS_SELECT, where_clause);

        let mut builder = sqlx::query_as::<_, RequestDetails>(&select_q);
        if let Some(status) = query.status { builder = builder.bind(status); }
        if let Some(request_type) = query.request_type { builder = builder.bind(request_type); }
        if let Some(team_id) = query.team_id { builder = builder.bind(team_id); }
        if let Some(equipment_id) = query.equipment_id { builder = builder.bind(equipment_id); }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Most recently created requests
    pub async fn list_recent(&self, limit: i64) -> AppResult<Vec<RequestDetails>> {
        let select_q = format!("{} ORDER BY mr.created_at DESC LIMIT $1", DETAILS_SELECT);
        let rows = sqlx::query_as::<_, RequestDetails>(&select_q)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get request by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<RequestDetails> {
        let select_q = format!("{} WHERE mr.id = $1", DETAILS_SELECT);
        sqlx::query_as::<_, RequestDetails>(&select_q)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    /// Insert a request with status New. `team_id` is the already-resolved team.
    pub async fn create(
        &self,
        data: &CreateRequest,
        requester_id: i32,
        team_id: Option<i32>,
    ) -> AppResult<MaintenanceRequest> {
        let row = sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            INSERT INTO maintenance_requests (
                subject, equipment_id, request_type, status, priority, requester_id,
                assignee_id, team_id, scheduled_date, due_date, duration_hours,
                location, frequency, recurrence_pattern, description
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(&data.subject)
        .bind(data.equipment_id)
        .bind(data.request_type)
        .bind(RequestStatus::New)
        .bind(data.priority.unwrap_or_default())
        .bind(requester_id)
        .bind(data.assignee_id)
        .bind(team_id)
        .bind(data.scheduled_date)
        .bind(data.due_date)
        .bind(data.duration_hours)
        .bind(&data.location)
        .bind(&data.frequency)
        .bind(&data.recurrence_pattern)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Overwrite every editable field of a request, status included
    pub async fn update_on(
        conn: &mut PgConnection,
        id: i32,
        data: &UpdateRequest,
    ) -> AppResult<MaintenanceRequest> {
        sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            UPDATE maintenance_requests SET
                subject = $1, equipment_id = $2, request_type = $3, status = $4,
                priority = $5, assignee_id = $6, team_id = $7, scheduled_date = $8,
                due_date = $9, duration_hours = $10, location = $11, frequency = $12,
                recurrence_pattern = $13, description = $14,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $15
            RETURNING *
            "#,
        )
        .bind(&data.subject)
        .bind(data.equipment_id)
        .bind(data.request_type)
        .bind(data.status)
        .bind(data.priority)
        .bind(data.assignee_id)
        .bind(data.team_id)
        .bind(data.scheduled_date)
        .bind(data.due_date)
        .bind(data.duration_hours)
        .bind(&data.location)
        .bind(&data.frequency)
        .bind(&data.recurrence_pattern)
        .bind(&data.description)
        .bind(id)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    /// Write only the status (and update timestamp)
    pub async fn set_status_on(
        conn: &mut PgConnection,
        id: i32,
        status: RequestStatus,
    ) -> AppResult<MaintenanceRequest> {
        sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            UPDATE maintenance_requests
            SET status = $1, updated_at = CURRENT_TIMESTAMP
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(status)
        .bind(id)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    /// Delete a request. Linked equipment is left as is.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM maintenance_requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Request {} not found", id)));
        }
        Ok(())
    }
}
