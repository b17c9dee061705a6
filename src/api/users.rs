use axum::{extract::State, routing::get, Json, Router};

use crate::error::Result;
use crate::models::User;
use crate::services::UserService;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/user", get(list_users))
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = UserService::new(state.db).list_users().await?;
    Ok(Json(users))
}
