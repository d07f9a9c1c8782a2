//! Registration, password login and token issuance

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{RegisterUser, User, UserClaims},
    repository::Repository,
};

const DEFAULT_ROLE: &str = "user";

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Create an account and return it with a fresh token
    pub async fn register(&self, data: &RegisterUser) -> AppResult<(String, User)> {
        let password_hash = hash_password(&data.password)?;
        let role = data.role.as_deref().unwrap_or(DEFAULT_ROLE);

        let user = self
            .repository
            .users
            .create(&data.name, &data.email, &password_hash, role)
            .await?;
        tracing::info!("User {} registered ({})", user.id, user.email);

        let token = self.issue_token(&user)?;
        Ok((token, user))
    }

    /// Check credentials and return a token with the user
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<(String, User)> {
        let user = self
            .repository
            .users
            .get_by_email(email)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid email or password".to_string()))?;

        if !verify_password(&user.password, password)? {
            tracing::debug!("Rejected login for {}", email);
            return Err(AppError::Authentication("Invalid email or password".to_string()));
        }

        let token = self.issue_token(&user)?;
        Ok((token, user))
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }

    fn issue_token(&self, user: &User) -> AppResult<String> {
        UserClaims::for_user(user, self.config.jwt_expiration_hours)
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }
}

/// Hash a password using Argon2
fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("hunter22").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password(&hash, "hunter22").unwrap());
        assert!(!verify_password(&hash, "hunter23").unwrap());
    }

    #[test]
    fn test_salts_differ() {
        assert_ne!(hash_password("same").unwrap(), hash_password("same").unwrap());
    }

    #[test]
    fn test_garbage_hash_is_internal_error() {
        assert!(matches!(
            verify_password("not-a-hash", "x"),
            Err(AppError::Internal(_))
        ));
    }
}
