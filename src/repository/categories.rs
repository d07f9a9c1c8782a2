//! Equipment categories repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::category::{Category, CategoryDetails, CategoryInput},
};

const DETAILS_SELECT: &str = r#"
    SELECT ec.*,
        u.name AS responsible_name,
        c.name AS company_name
    FROM equipment_categories ec
    LEFT JOIN users u ON ec.responsible_user_id = u.id
    LEFT JOIN companies c ON ec.company_id = c.id
"#;

#[derive(Clone)]
pub struct CategoriesRepository {
    pool: Pool<Postgres>,
}

impl CategoriesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<CategoryDetails>> {
        let select_q = format!("{} ORDER BY ec.created_at DESC", DETAILS_SELECT);
        let rows = sqlx::query_as::<_, CategoryDetails>(&select_q)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<CategoryDetails> {
        let select_q = format!("{} WHERE ec.id = $1", DETAILS_SELECT);
        sqlx::query_as::<_, CategoryDetails>(&select_q)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    pub async fn create(&self, data: &CategoryInput) -> AppResult<Category> {
        let row = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO equipment_categories (name, responsible_user_id, company_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(data.responsible_user_id)
        .bind(data.company_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&self, id: i32, data: &CategoryInput) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE equipment_categories
            SET name = $1, responsible_user_id = $2, company_id = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(data.responsible_user_id)
        .bind(data.company_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment_categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }
        Ok(())
    }
}
