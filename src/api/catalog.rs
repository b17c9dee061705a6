use axum::{extract::State, routing::get, Json, Router};

use super::AppPath;
use crate::error::Result;
use crate::models::{CatalogEntry, Person, Planet, Vehicle};
use crate::services::CatalogService;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/people", get(list::<Person>))
        .route("/people/:id", get(get_one::<Person>))
        .route("/planets", get(list::<Planet>))
        .route("/planets/:id", get(get_one::<Planet>))
        .route("/vehicles", get(list::<Vehicle>))
        .route("/vehicles/:id", get(get_one::<Vehicle>))
}

async fn list<T: CatalogEntry>(State(state): State<AppState>) -> Result<Json<Vec<T>>> {
    let entries = CatalogService::new(state.db).list::<T>().await?;
    Ok(Json(entries))
}

async fn get_one<T: CatalogEntry>(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<T>> {
    let entry = CatalogService::new(state.db).get::<T>(id).await?;
    Ok(Json(entry))
}
