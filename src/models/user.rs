//! User model and authentication claims

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Full user model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub password: String,
    /// Free-form role label (user, manager, technician); carries no permissions
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Short user representation for lists and pickers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserShort {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<User> for UserShort {
    fn from(user: User) -> Self {
        UserShort {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

/// Registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterUser {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    /// Defaults to "user"
    pub role: Option<String>,
}

/// JWT Claims for authenticated users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    /// User email
    pub sub: String,
    pub user_id: i32,
    pub name: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

impl UserClaims {
    /// Build claims for a user, valid for `ttl_hours`
    pub fn for_user(user: &User, ttl_hours: u64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user.email.clone(),
            user_id: user.id,
            name: user.name.clone(),
            role: user.role.clone(),
            exp: now + (ttl_hours as i64 * 3600),
            iat: now,
        }
    }

    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 42,
            name: "Jane Smith".to_string(),
            email: "jane.smith@gearguard.com".to_string(),
            password: "$argon2id$...".to_string(),
            role: "technician".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_token_round_trip() {
        let claims = UserClaims::for_user(&sample_user(), 1);
        let token = claims.create_token("secret").unwrap();
        let decoded = UserClaims::from_token(&token, "secret").unwrap();
        assert_eq!(decoded.user_id, 42);
        assert_eq!(decoded.sub, "jane.smith@gearguard.com");
    }

    #[test]
    fn test_token_rejected_with_wrong_secret() {
        let token = UserClaims::for_user(&sample_user(), 1).create_token("secret").unwrap();
        assert!(UserClaims::from_token(&token, "other").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let mut claims = UserClaims::for_user(&sample_user(), 1);
        claims.iat -= 7200;
        claims.exp = claims.iat + 60;
        let token = claims.create_token("secret").unwrap();
        assert!(UserClaims::from_token(&token, "secret").is_err());
    }

    #[test]
    fn test_password_never_serialized() {
        let json = serde_json::to_value(sample_user()).unwrap();
        assert!(json.get("password").is_none());
    }
}
