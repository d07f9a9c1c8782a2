//! Work centers repository

use sqlx::{postgres::PgArguments, query::QueryAs, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::work_center::{WorkCenter, WorkCenterDetails, WorkCenterInput},
};

const DETAILS_SELECT: &str = r#"
    SELECT wc.*,
        c.name AS company_name,
        awc.name AS alternative_work_center_name
    FROM work_centers wc
    LEFT JOIN companies c ON wc.company_id = c.id
    LEFT JOIN work_centers awc ON wc.alternative_work_center_id = awc.id
"#;

#[derive(Clone)]
pub struct WorkCentersRepository {
    pool: Pool<Postgres>,
}

impl WorkCentersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<WorkCenterDetails>> {
        let select_q = format!("{} ORDER BY wc.created_at DESC", DETAILS_SELECT);
        let rows = sqlx::query_as::<_, WorkCenterDetails>(&select_q)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<WorkCenterDetails> {
        let select_q = format!("{} WHERE wc.id = $1", DETAILS_SELECT);
        sqlx::query_as::<_, WorkCenterDetails>(&select_q)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Work center {} not found", id)))
    }

    pub async fn create(&self, data: &WorkCenterInput) -> AppResult<WorkCenter> {
        let query = sqlx::query_as::<_, WorkCenter>(
            r#"
            INSERT INTO work_centers (
                name, cost, tag, cost_per_hour, capacity_task_per_hour,
                daily_target, alternative_work_center_id, company_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        );
        let row = bind_input(query, data).fetch_one(&self.pool).await?;
        Ok(row)
    }

    pub async fn update(&self, id: i32, data: &WorkCenterInput) -> AppResult<WorkCenter> {
        let query = sqlx::query_as::<_, WorkCenter>(
            r#"
            UPDATE work_centers SET
                name = $1, cost = $2, tag = $3, cost_per_hour = $4,
                capacity_task_per_hour = $5, daily_target = $6,
                alternative_work_center_id = $7, company_id = $8
            WHERE id = $9
            RETURNING *
            "#,
        );
        bind_input(query, data)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Work center {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM work_centers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Work center {} not found", id)));
        }
        Ok(())
    }
}

fn bind_input<'q, O>(
    query: QueryAs<'q, Postgres, O, PgArguments>,
    data: &'q WorkCenterInput,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    query
        .bind(&data.name)
        .bind(data.cost)
        .bind(&data.tag)
        .bind(data.cost_per_hour)
        .bind(data.capacity_task_per_hour)
        .bind(data.daily_target)
        .bind(data.alternative_work_center_id)
        .bind(data.company_id)
}
