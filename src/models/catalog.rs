use serde::{Deserialize, Serialize};
use sqlx::any::AnyRow;
use sqlx::FromRow;

/// Read-only catalog table that can be listed and fetched by id.
pub trait CatalogEntry: for<'r> FromRow<'r, AnyRow> + Serialize + Send + Unpin {
    const TABLE: &'static str;
    const COLUMNS: &'static str;
    /// Message returned when an id does not match any row.
    const NOT_FOUND: &'static str;
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub height: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
}

impl CatalogEntry for Person {
    const TABLE: &'static str = "people";
    const COLUMNS: &'static str = "id, name, birth_year, gender, height, skin_color, eye_color";
    const NOT_FOUND: &'static str = "El personaje no existe";
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
    pub diameter: Option<String>,
}

impl CatalogEntry for Planet {
    const TABLE: &'static str = "planets";
    const COLUMNS: &'static str = "id, name, climate, terrain, population, diameter";
    const NOT_FOUND: &'static str = "El planeta no existe";
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub passengers: Option<String>,
}

impl CatalogEntry for Vehicle {
    const TABLE: &'static str = "vehicles";
    const COLUMNS: &'static str = "id, name, model, manufacturer, passengers";
    const NOT_FOUND: &'static str = "El vehiculo no existe";
}
