//! Teams service

use crate::{
    error::AppResult,
    models::team::{Team, TeamDetails, TeamInput},
    repository::Repository,
};

#[derive(Clone)]
pub struct TeamsService {
    repository: Repository,
}

impl TeamsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<TeamDetails>> {
        self.repository.teams.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<TeamDetails> {
        self.repository.teams.get_by_id(id).await
    }

    pub async fn create(&self, data: &TeamInput) -> AppResult<Team> {
        let team = self.repository.teams.create(data).await?;
        tracing::info!("Team {} created: {}", team.id, team.name);
        Ok(team)
    }

    pub async fn update(&self, id: i32, data: &TeamInput) -> AppResult<Team> {
        self.repository.teams.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.teams.delete(id).await?;
        tracing::info!("Team {} deleted", id);
        Ok(())
    }
}
