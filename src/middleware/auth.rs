use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::security::token::verify_access_token;
use crate::AppState;

/// Identity bound to the bearer token of the current request.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub email: String,
}

/// Rejects the request with 401 unless it carries a valid bearer token.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthenticated)?;

    // The auth scheme is case-insensitive.
    let token = match auth_header.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("Bearer") => token.trim(),
        _ => return Err(AppError::Unauthenticated),
    };

    let claims = verify_access_token(&state.config.jwt, token)?;

    request
        .extensions_mut()
        .insert(CurrentUser { email: claims.sub });

    Ok(next.run(request).await)
}
