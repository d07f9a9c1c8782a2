//! Read-only company and user listings

use crate::{
    error::AppResult,
    models::{company::Company, user::UserShort},
    repository::Repository,
};

#[derive(Clone)]
pub struct DirectoryService {
    repository: Repository,
}

impl DirectoryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_companies(&self) -> AppResult<Vec<Company>> {
        self.repository.companies.list().await
    }

    pub async fn list_users(&self) -> AppResult<Vec<UserShort>> {
        self.repository.users.list().await
    }
}
