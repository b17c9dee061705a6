use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};

use super::{AppJson, AppPath};
use crate::error::{AppError, Result};
use crate::models::{Favorite, FavoriteKind};
use crate::services::{AddFavoriteOutcome, FavoriteService};
use crate::AppState;

pub const FAVORITE_ADDED: &str = "haz añadido satisfactoriamente el favorito";
pub const FAVORITE_REMOVED: &str = "favorito eliminado";
pub const FAVORITE_MISSING: &str = "El favorito no existe";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/user/:user_id/favorites", get(list_favorites))
        .route("/user/:user_id/favorites/:kind", post(add_favorite))
        .route(
            "/user/:user_id/favorites/:kind/:target_id",
            delete(remove_favorite),
        )
}

async fn list_favorites(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i64>,
) -> Result<Json<Vec<Favorite>>> {
    let favorites = FavoriteService::new(state.db).list_for_user(user_id).await?;
    Ok(Json(favorites))
}

/// Body carries the target under the kind's column name, e.g.
/// `{"planets_id": 3}` for `/favorites/planets`.
async fn add_favorite(
    State(state): State<AppState>,
    AppPath((user_id, kind)): AppPath<(i64, FavoriteKind)>,
    AppJson(payload): AppJson<Value>,
) -> Result<Json<Value>> {
    let target_id = payload
        .get(kind.column())
        .and_then(Value::as_i64)
        .ok_or_else(|| AppError::Validation(format!("{} must be an integer", kind.column())))?;

    let service = FavoriteService::new(state.db);
    match service.add(user_id, kind, target_id).await? {
        AddFavoriteOutcome::Created(_) => Ok(Json(json!({ "msg": FAVORITE_ADDED }))),
        AddFavoriteOutcome::AlreadyExists => Err(AppError::DuplicateFavorite(payload)),
    }
}

async fn remove_favorite(
    State(state): State<AppState>,
    AppPath((user_id, kind, target_id)): AppPath<(i64, FavoriteKind, i64)>,
) -> Result<Json<Value>> {
    let removed = FavoriteService::new(state.db)
        .remove(user_id, kind, target_id)
        .await?;

    if !removed {
        return Err(AppError::NotFound(FAVORITE_MISSING.to_string()));
    }

    Ok(Json(json!({ "msg": FAVORITE_REMOVED })))
}
