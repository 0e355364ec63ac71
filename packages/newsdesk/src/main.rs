use anyhow::Context;
use tracing::{Level, info};

use newsdesk::config::AppConfig;
use newsdesk::state::AppState;
use newsdesk::{database, seed, services};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load().context("Failed to load config")?;
    info!(url = %config.database.url, "Opening store");

    let db = database::init_db(&config.database)
        .await
        .context("Failed to initialize database")?;
    seed::ensure_indexes(&db)
        .await
        .context("Failed to create indexes")?;

    let state = AppState { db, config };

    seed::seed_default_admin(&state)
        .await
        .context("Failed to seed default admin")?;

    let stats = services::stats::collect(&state)
        .await
        .context("Failed to collect statistics")?;
    info!(
        users = stats.users,
        admins = stats.admins,
        regular_users = stats.regular_users,
        news = stats.news,
        views = stats.views,
        images = stats.images,
        "Store ready"
    );

    Ok(())
}
