//! Equipment repository

use sqlx::{
    postgres::PgArguments, query::QueryAs, PgConnection, Pool, Postgres,
};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::RequestStatus,
        equipment::{Equipment, EquipmentDetails, EquipmentInput, EquipmentQuery},
    },
};

/// Equipment joined with display names; `$1` is the status excluded from the open count
const DETAILS_SELECT: &str = r#"
    SELECT e.*,
        ec.name AS category_name,
        u.name AS employee_name,
        t.name AS team_name,
        c.name AS company_name,
        (SELECT COUNT(*) FROM maintenance_requests mr
         WHERE mr.equipment_id = e.id AND mr.status <> $1) AS open_requests_count
    FROM equipment e
    LEFT JOIN equipment_categories ec ON e.category_id = ec.id
    LEFT JOIN users u ON e.employee_id = u.id
    LEFT JOIN teams t ON e.default_team_id = t.id
    LEFT JOIN companies c ON e.company_id = c.id
"#;

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List equipment, newest first, filtered on the provided keys only
    pub async fn list(&self, query: &EquipmentQuery) -> AppResult<Vec<EquipmentDetails>> {
        let mut conditions = Vec::new();
        let mut idx = 2;

        if query.department.is_some() {
            conditions.push(format!("e.department = ${}", idx));
            idx += 1;
        }
        if query.employee_id.is_some() {
            conditions.push(format!("e.employee_id = ${}", idx));
            idx += 1;
        }
        if query.category_id.is_some() {
            conditions.push(format!("e.category_id = ${}", idx));
            idx += 1;
        }
        if query.company_id.is_some() {
            conditions.push(format!("e.company_id = ${}", idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let select_q = format!("{} {} ORDER BY e.created_at DESC", DETAILS_SELECT, where_clause);

        let mut builder = sqlx::query_as::<_, EquipmentDetails>(&select_q).bind(RequestStatus::Repaired);
        if let Some(ref department) = query.department { builder = builder.bind(department); }
        if let Some(employee_id) = query.employee_id { builder = builder.bind(employee_id); }
        if let Some(category_id) = query.category_id { builder = builder.bind(category_id); }
        if let Some(company_id) = query.company_id { builder = builder.bind(company_id); }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Get equipment by ID with display names and open request count
    pub async fn get_by_id(&self, id: i32) -> AppResult<EquipmentDetails> {
        let select_q = format!("{} WHERE e.id = $2", DETAILS_SELECT);
        sqlx::query_as::<_, EquipmentDetails>(&select_q)
            .bind(RequestStatus::Repaired)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Default team of an equipment; `None` when the equipment has none or does not exist
    pub async fn default_team_id(&self, id: i32) -> AppResult<Option<i32>> {
        let team_id: Option<Option<i32>> =
            sqlx::query_scalar("SELECT default_team_id FROM equipment WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(team_id.flatten())
    }

    /// Create equipment
    pub async fn create(&self, data: &EquipmentInput) -> AppResult<Equipment> {
        let query = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment (
                name, serial_number, type_model, category_id, company_id, employee_id,
                department, location, shop_detail, maintenance_type, assigned_date,
                purchase_date, warranty_info, description, default_team_id, default_technician_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING *
            "#,
        );
        let row = bind_input(query, data).fetch_one(&self.pool).await?;
        Ok(row)
    }

    /// Replace every descriptive field of an equipment; `is_scrapped` is left alone
    pub async fn update(&self, id: i32, data: &EquipmentInput) -> AppResult<Equipment> {
        let query = sqlx::query_as::<_, Equipment>(
            r#"
            UPDATE equipment SET
                name = $1, serial_number = $2, type_model = $3, category_id = $4,
                company_id = $5, employee_id = $6, department = $7, location = $8,
                shop_detail = $9, maintenance_type = $10, assigned_date = $11,
                purchase_date = $12, warranty_info = $13, description = $14,
                default_team_id = $15, default_technician_id = $16,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $17
            RETURNING *
            "#,
        );
        bind_input(query, data)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Delete equipment; requests referencing it keep their equipment_id
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }

    /// Set the scrapped flag on an open connection or transaction.
    ///
    /// Absent rows and already-scrapped rows are a no-op. Returns whether the
    /// flag flipped from false to true.
    pub async fn mark_scrapped(conn: &mut PgConnection, id: i32) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE equipment SET is_scrapped = TRUE WHERE id = $1 AND is_scrapped = FALSE",
        )
        .bind(id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn bind_input<'q, O>(
    query: QueryAs<'q, Postgres, O, PgArguments>,
    data: &'q EquipmentInput,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    query
        .bind(&data.name)
        .bind(&data.serial_number)
        .bind(&data.type_model)
        .bind(data.category_id)
        .bind(data.company_id)
        .bind(data.employee_id)
        .bind(&data.department)
        .bind(&data.location)
        .bind(&data.shop_detail)
        .bind(&data.maintenance_type)
        .bind(data.assigned_date)
        .bind(data.purchase_date)
        .bind(&data.warranty_info)
        .bind(&data.description)
        .bind(data.default_team_id)
        .bind(data.default_technician_id)
}
