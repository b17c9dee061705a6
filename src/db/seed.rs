//! Starter catalog for fresh databases. Rows are keyed by name, so seeding twice is a no-op.

use super::Database;

const PEOPLE: &[[&str; 6]] = &[
    ["Luke Skywalker", "19BBY", "male", "172", "fair", "blue"],
    ["Leia Organa", "19BBY", "female", "150", "light", "brown"],
    ["Darth Vader", "41.9BBY", "male", "202", "white", "yellow"],
    ["Obi-Wan Kenobi", "57BBY", "male", "182", "fair", "blue-gray"],
    ["R2-D2", "33BBY", "n/a", "96", "white, blue", "red"],
];

const PLANETS: &[[&str; 5]] = &[
    ["Tatooine", "arid", "desert", "200000", "10465"],
    ["Alderaan", "temperate", "grasslands, mountains", "2000000000", "12500"],
    ["Hoth", "frozen", "tundra, ice caves", "unknown", "7200"],
    ["Dagobah", "murky", "swamp, jungles", "unknown", "8900"],
    ["Naboo", "temperate", "grassy hills, swamps", "4500000000", "12120"],
];

const VEHICLES: &[[&str; 4]] = &[
    ["Sand Crawler", "Digger Crawler", "Corellia Mining Corporation", "30"],
    ["T-16 skyhopper", "T-16 skyhopper", "Incom Corporation", "1"],
    ["X-34 landspeeder", "X-34 landspeeder", "SoroSuub Corporation", "1"],
    ["Snowspeeder", "t-47 airspeeder", "Incom corporation", "0"],
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub people: u64,
    pub planets: u64,
    pub vehicles: u64,
}

pub async fn seed_catalog(db: &Database) -> anyhow::Result<SeedReport> {
    let mut report = SeedReport::default();

    for [name, birth_year, gender, height, skin_color, eye_color] in PEOPLE {
        report.people += sqlx::query(
            "INSERT INTO people (name, birth_year, gender, height, skin_color, eye_color) \
             VALUES ($1, $2, $3, $4, $5, $6) ON CONFLICT (name) DO NOTHING",
        )
        .bind(*name)
        .bind(*birth_year)
        .bind(*gender)
        .bind(*height)
        .bind(*skin_color)
        .bind(*eye_color)
        .execute(&db.pool)
        .await?
        .rows_affected();
    }

    for [name, climate, terrain, population, diameter] in PLANETS {
        report.planets += sqlx::query(
            "INSERT INTO planets (name, climate, terrain, population, diameter) \
             VALUES ($1, $2, $3, $4, $5) ON CONFLICT (name) DO NOTHING",
        )
        .bind(*name)
        .bind(*climate)
        .bind(*terrain)
        .bind(*population)
        .bind(*diameter)
        .execute(&db.pool)
        .await?
        .rows_affected();
    }

    for [name, model, manufacturer, passengers] in VEHICLES {
        report.vehicles += sqlx::query(
            "INSERT INTO vehicles (name, model, manufacturer, passengers) \
             VALUES ($1, $2, $3, $4) ON CONFLICT (name) DO NOTHING",
        )
        .bind(*name)
        .bind(*model)
        .bind(*manufacturer)
        .bind(*passengers)
        .execute(&db.pool)
        .await?
        .rows_affected();
    }

    tracing::info!(
        people = report.people,
        planets = report.planets,
        vehicles = report.vehicles,
        "Catalog seeded"
    );

    Ok(report)
}
