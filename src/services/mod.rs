mod auth_service;
mod catalog_service;
mod favorite_service;
mod user_service;

pub use auth_service::AuthService;
pub use catalog_service::CatalogService;
pub use favorite_service::{AddFavoriteOutcome, FavoriteService};
pub use user_service::UserService;
