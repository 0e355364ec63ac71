use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// Keep at 1 for `sqlite::memory:`; each pooled connection would open its
    /// own empty in-memory database.
    pub max_connections: u32,
    pub sqlx_logging: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Secret that grants the Admin role at registration.
    pub admin_secret: String,
}

/// Account created on startup if its username is still free.
#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    pub enabled: bool,
    pub admin_username: String,
    pub admin_password: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub seed: SeedConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("database.url", "sqlite://newsdesk.db?mode=rwc")?
            .set_default("database.max_connections", 1)?
            .set_default("database.sqlx_logging", false)?
            .set_default("auth.admin_secret", "SECRET_KEY")?
            .set_default("seed.enabled", true)?
            .set_default("seed.admin_username", "admin")?
            .set_default("seed.admin_password", "admin")?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., NEWSDESK__AUTH__ADMIN_SECRET)
            .add_source(Environment::with_prefix("NEWSDESK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
