use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::AppState;

/// Every public route as `(method, path)`.
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/health"),
    ("GET", "/people"),
    ("GET", "/people/{id}"),
    ("GET", "/planets"),
    ("GET", "/planets/{id}"),
    ("GET", "/vehicles"),
    ("GET", "/vehicles/{id}"),
    ("GET", "/user"),
    ("GET", "/user/{id}/favorites"),
    ("POST", "/user/{id}/favorites/{kind}"),
    ("DELETE", "/user/{id}/favorites/{kind}/{target_id}"),
    ("POST", "/register"),
    ("POST", "/login"),
    ("GET", "/protected"),
];

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(sitemap))
        .route("/health", get(health_check))
}

async fn sitemap() -> Json<Value> {
    let endpoints: Vec<Value> = ENDPOINTS
        .iter()
        .map(|(method, path)| json!({ "method": method, "path": path }))
        .collect();

    Json(json!({ "endpoints": endpoints }))
}

async fn health_check() -> &'static str {
    "OK"
}
