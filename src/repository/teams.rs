//! Teams repository

use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::team::{Team, TeamDetails, TeamInput, TeamRow},
};

/// Teams with company name and members aggregated as a JSON array
const DETAILS_SELECT: &str = r#"
    SELECT t.*,
        c.name AS company_name,
        COALESCE(
            json_agg(
                json_build_object('id', u.id, 'name', u.name, 'email', u.email)
                ORDER BY u.name
            ) FILTER (WHERE u.id IS NOT NULL),
            '[]'::json
        ) AS members
    FROM teams t
    LEFT JOIN companies c ON t.company_id = c.id
    LEFT JOIN team_members tm ON t.id = tm.team_id
    LEFT JOIN users u ON tm.user_id = u.id
"#;

#[derive(Clone)]
pub struct TeamsRepository {
    pool: Pool<Postgres>,
}

impl TeamsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all teams with their members, newest first
    pub async fn list(&self) -> AppResult<Vec<TeamDetails>> {
        let select_q = format!("{} GROUP BY t.id, c.name ORDER BY t.created_at DESC", DETAILS_SELECT);
        let rows = sqlx::query_as::<_, TeamRow>(&select_q)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(TeamDetails::from).collect())
    }

    /// Get team by ID with its members
    pub async fn get_by_id(&self, id: i32) -> AppResult<TeamDetails> {
        let select_q = format!("{} WHERE t.id = $1 GROUP BY t.id, c.name", DETAILS_SELECT);
        sqlx::query_as::<_, TeamRow>(&select_q)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(TeamDetails::from)
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))
    }

    /// Create a team and its memberships in one transaction
    pub async fn create(&self, data: &TeamInput) -> AppResult<Team> {
        let mut tx = self.pool.begin().await?;

        let team = sqlx::query_as::<_, Team>(
            "INSERT INTO teams (name, company_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.company_id)
        .fetch_one(&mut *tx)
        .await?;

        Self::add_members_on(&mut *tx, team.id, &data.unique_member_ids()).await?;

        tx.commit().await?;
        Ok(team)
    }

    /// Update name and company; replace the member set when `member_ids` is given
    pub async fn update(&self, id: i32, data: &TeamInput) -> AppResult<Team> {
        let mut tx = self.pool.begin().await?;

        let team = sqlx::query_as::<_, Team>(
            "UPDATE teams SET name = $1, company_id = $2 WHERE id = $3 RETURNING *",
        )
        .bind(&data.name)
        .bind(data.company_id)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))?;

        if data.member_ids.is_some() {
            sqlx::query("DELETE FROM team_members WHERE team_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            Self::add_members_on(&mut *tx, id, &data.unique_member_ids()).await?;
        }

        tx.commit().await?;
        Ok(team)
    }

    /// Delete a team. Memberships cascade; equipment and requests keep the id.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Team {} not found", id)));
        }
        Ok(())
    }

    async fn add_members_on(conn: &mut PgConnection, team_id: i32, user_ids: &[i32]) -> AppResult<()> {
        if user_ids.is_empty() {
            return Ok(());
        }
        sqlx::query(
            r#"
            INSERT INTO team_members (team_id, user_id)
            SELECT $1, UNNEST($2::int[])
            ON CONFLICT (team_id, user_id) DO NOTHING
            "#,
        )
        .bind(team_id)
        .bind(user_ids)
        .execute(conn)
        .await?;
        Ok(())
    }
}
