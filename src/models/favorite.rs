use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{CatalogEntry, Person, Planet, Vehicle};

/// A user's like. Exactly one of the target columns is set.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq, Eq)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub people_id: Option<i64>,
    pub vehicle_id: Option<i64>,
    pub planets_id: Option<i64>,
}

impl Favorite {
    pub const COLUMNS: &'static str = "id, user_id, people_id, vehicle_id, planets_id";

    pub fn target(&self) -> Option<(FavoriteKind, i64)> {
        self.people_id
            .map(|id| (FavoriteKind::People, id))
            .or(self.vehicle_id.map(|id| (FavoriteKind::Vehicles, id)))
            .or(self.planets_id.map(|id| (FavoriteKind::Planets, id)))
    }
}

/// Catalog table a favorite points at; doubles as the `{kind}` route segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    People,
    Vehicles,
    Planets,
}

impl FavoriteKind {
    pub fn column(self) -> &'static str {
        match self {
            FavoriteKind::People => "people_id",
            FavoriteKind::Vehicles => "vehicle_id",
            FavoriteKind::Planets => "planets_id",
        }
    }

    pub fn table(self) -> &'static str {
        match self {
            FavoriteKind::People => Person::TABLE,
            FavoriteKind::Vehicles => Vehicle::TABLE,
            FavoriteKind::Planets => Planet::TABLE,
        }
    }

    pub fn not_found(self) -> &'static str {
        match self {
            FavoriteKind::People => Person::NOT_FOUND,
            FavoriteKind::Vehicles => Vehicle::NOT_FOUND,
            FavoriteKind::Planets => Planet::NOT_FOUND,
        }
    }
}
