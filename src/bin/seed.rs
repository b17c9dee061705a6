//! Loads the starter catalog (people, planets, vehicles).
//! Run with: cargo run --bin seed

use holocron_api::config::{normalize_database_url, DatabaseConfig, FALLBACK_DATABASE_URL};
use holocron_api::db::{seed::seed_catalog, Database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "holocron_api=info".into()),
        )
        .init();

    let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| FALLBACK_DATABASE_URL.to_string());

    let db = Database::connect(&DatabaseConfig {
        url: normalize_database_url(&url),
        max_connections: 1,
    })
    .await?;
    db.run_migrations().await?;

    let report = seed_catalog(&db).await?;
    println!(
        "Seeded {} people, {} planets, {} vehicles",
        report.people, report.planets, report.vehicles
    );

    Ok(())
}
