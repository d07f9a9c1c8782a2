//! Repository layer for database operations

pub mod categories;
pub mod companies;
pub mod equipment;
pub mod reports;
pub mod requests;
pub mod teams;
pub mod users;
pub mod work_centers;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: users::UsersRepository,
    pub companies: companies::CompaniesRepository,
    pub categories: categories::CategoriesRepository,
    pub teams: teams::TeamsRepository,
    pub work_centers: work_centers::WorkCentersRepository,
    pub equipment: equipment::EquipmentRepository,
    pub requests: requests::RequestsRepository,
    pub reports: reports::ReportsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: users::UsersRepository::new(pool.clone()),
            companies: companies::CompaniesRepository::new(pool.clone()),
            categories: categories::CategoriesRepository::new(pool.clone()),
            teams: teams::TeamsRepository::new(pool.clone()),
            work_centers: work_centers::WorkCentersRepository::new(pool.clone()),
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            requests: requests::RequestsRepository::new(pool.clone()),
            reports: reports::ReportsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round-trip to the database (readiness probe)
    pub async fn ping(&self) -> crate::error::AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
