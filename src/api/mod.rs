mod auth;
mod catalog;
mod extract;
mod favorites;
mod sitemap;
mod users;

use axum::Router;

use crate::AppState;

pub use extract::{AppJson, AppPath};
pub use sitemap::ENDPOINTS;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(sitemap::routes())
        .merge(catalog::routes())
        .merge(users::routes())
        .merge(favorites::routes())
        .merge(auth::routes(state))
}
