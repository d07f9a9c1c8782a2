//! Companies repository

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::company::Company};

#[derive(Clone)]
pub struct CompaniesRepository {
    pool: Pool<Postgres>,
}

impl CompaniesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<Company>> {
        let rows = sqlx::query_as::<_, Company>("SELECT * FROM companies ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
