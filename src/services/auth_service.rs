use crate::config::Config;
use crate::db::{is_unique_violation, Database};
use crate::error::{AppError, Result};
use crate::models::User;
use crate::security::password::{hash_password, verify_password};
use crate::security::token;
use crate::services::UserService;

pub const USER_EXISTS: &str = "usuario existente";
pub const UNKNOWN_USER: &str = "usuario inexistente";

pub struct AuthService {
    db: Database,
    config: Config,
}

impl AuthService {
    pub fn new(db: Database, config: Config) -> Self {
        Self { db, config }
    }

    /// Create a user. The UNIQUE email constraint is the duplicate check.
    pub async fn register(&self, email: &str, password: &str) -> Result<User> {
        let password_hash = hash_password(password)?;

        let inserted = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash) VALUES ($1, $2) \
             RETURNING id, email, password_hash",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.db.pool)
        .await;

        match inserted {
            Ok(user) => {
                tracing::info!(user_id = user.id, "User registered");
                Ok(user)
            }
            Err(e) if is_unique_violation(&e) => Err(AppError::Conflict(USER_EXISTS.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    /// Check credentials and mint an access token bound to the email.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String)> {
        let user = UserService::new(self.db.clone())
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(UNKNOWN_USER.to_string()))?;

        if !verify_password(password, &user.password_hash)? {
            tracing::debug!(user_id = user.id, "Login rejected: bad password");
            return Err(AppError::InvalidCredentials);
        }

        let access_token = token::issue_access_token(&self.config.jwt, &user.email)?;

        Ok((user, access_token))
    }
}
