//! Dashboard and report projections

use crate::{
    error::AppResult,
    models::report::{CategoryRequestCount, Dashboard, StatusRequestCount, TeamRequestCount},
    repository::{reports::DueBucket, Repository},
};

/// Number of requests shown in the dashboard's recent list
pub const RECENT_TASKS_LIMIT: i64 = 10;

#[derive(Clone)]
pub struct ReportsService {
    repository: Repository,
}

impl ReportsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn dashboard(&self) -> AppResult<Dashboard> {
        let reports = &self.repository.reports;
        let (overdue_tasks, upcoming_tasks, open_requests, recent_tasks) = tokio::try_join!(
            reports.count_due(DueBucket::Overdue),
            reports.count_due(DueBucket::Upcoming),
            reports.count_open(),
            self.repository.requests.list_recent(RECENT_TASKS_LIMIT),
        )?;

        Ok(Dashboard {
            overdue_tasks,
            upcoming_tasks,
            open_requests,
            recent_tasks,
        })
    }

    pub async fn requests_per_team(&self) -> AppResult<Vec<TeamRequestCount>> {
        self.repository.reports.requests_per_team().await
    }

    pub async fn requests_per_category(&self) -> AppResult<Vec<CategoryRequestCount>> {
        self.repository.reports.requests_per_category().await
    }

    pub async fn requests_by_status(&self) -> AppResult<Vec<StatusRequestCount>> {
        self.repository.reports.requests_by_status().await
    }
}
