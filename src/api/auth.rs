use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::AppJson;
use crate::error::Result;
use crate::middleware::{require_auth, CurrentUser};
use crate::models::User;
use crate::services::AuthService;
use crate::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/protected", get(protected))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(protected)
}

#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
}

#[derive(Debug, Serialize)]
pub struct ProtectedResponse {
    pub logged_in_as: String,
}

async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CredentialsRequest>,
) -> Result<Json<RegisterResponse>> {
    payload.validate()?;

    let auth_service = AuthService::new(state.db, state.config);
    let user = auth_service
        .register(&payload.email, &payload.password)
        .await?;

    Ok(Json(RegisterResponse { user }))
}

async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CredentialsRequest>,
) -> Result<Json<LoginResponse>> {
    payload.validate()?;

    let auth_service = AuthService::new(state.db, state.config);
    let (user, access_token) = auth_service.login(&payload.email, &payload.password).await?;
    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(LoginResponse { access_token }))
}

async fn protected(Extension(current_user): Extension<CurrentUser>) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        logged_in_as: current_user.email,
    })
}
