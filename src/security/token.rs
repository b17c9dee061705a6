use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;
use crate::error::{AppError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub sub: String, // User email
    pub iat: i64,
    pub exp: i64,
}

/// Mint an HS256 access token bound to `email`.
pub fn issue_access_token(config: &JwtConfig, email: &str) -> Result<String> {
    let now = Utc::now();
    let exp = i64::try_from(config.expiry_hours)
        .ok()
        .and_then(Duration::try_hours)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!(
                "Token expiry out of range: {} hours",
                config.expiry_hours
            ))
        })?;

    let claims = Claims {
        sub: email.to_string(),
        iat: now.timestamp(),
        exp: exp.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))
}

/// Check signature and expiry, returning the claims on success.
pub fn verify_access_token(config: &JwtConfig, token: &str) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!("Rejected access token: {}", e);
        AppError::Unauthenticated
    })
}
