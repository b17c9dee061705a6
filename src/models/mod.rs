mod catalog;
mod favorite;
mod user;

pub use catalog::{CatalogEntry, Person, Planet, Vehicle};
pub use favorite::{Favorite, FavoriteKind};
pub use user::User;
