use anyhow::{bail, Context};
use serde::Deserialize;

/// Local file store used when no `DATABASE_URL` is provided.
pub const FALLBACK_DATABASE_URL: &str = "sqlite:///tmp/holocron.db?mode=rwc";

/// Longest accepted token lifetime (one year).
pub const MAX_EXPIRY_HOURS: u64 = 24 * 365;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_expiry_hours")]
    pub expiry_hours: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    /// Comma separated origins. `None` or `*` allows any origin.
    pub allowed_origins: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub json: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    10
}

fn default_expiry_hours() -> u64 {
    24
}

impl Config {
    /// Builds the configuration from defaults, `__`-separated environment
    /// variables (`SERVER__PORT`, `JWT__EXPIRY_HOURS`, ...) and the
    /// conventional `DATABASE_URL`, `JWT_SECRET_KEY` and `PORT` overrides.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().separator("__"))
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("database.url", FALLBACK_DATABASE_URL)?
            .set_default("database.max_connections", i64::from(default_max_connections()))?
            .set_default("jwt.expiry_hours", default_expiry_hours() as i64)?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("jwt.secret", std::env::var("JWT_SECRET_KEY").ok())?
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?;

        let mut config: Config = config
            .try_deserialize()
            .context("invalid configuration (JWT_SECRET_KEY must be set)")?;
        config.database.url = normalize_database_url(&config.database.url);
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.jwt.secret.trim().is_empty() {
            bail!("JWT secret must not be empty");
        }
        if self.jwt.expiry_hours == 0 {
            bail!("jwt.expiry_hours must be greater than zero");
        }
        if self.jwt.expiry_hours > MAX_EXPIRY_HOURS {
            bail!("jwt.expiry_hours must not exceed {MAX_EXPIRY_HOURS}");
        }
        Ok(())
    }
}

/// Rewrites the `postgres://` alias to the canonical `postgresql://` scheme.
pub fn normalize_database_url(url: &str) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{rest}"),
        None => url.to_string(),
    }
}
