use sea_orm::sea_query::{Index, SqliteQueryBuilder};
use sea_orm::*;
use tracing::info;

use crate::entity::{game_news, news_view};
use crate::error::AppError;
use crate::models::auth::RegisterRequest;
use crate::services::auth;
use crate::state::AppState;

/// Register the configured default admin account unless its username is
/// already taken. An existing account is left untouched.
pub async fn seed_default_admin(state: &AppState) -> Result<(), AppError> {
    let seed = &state.config.seed;
    if !seed.enabled {
        return Ok(());
    }

    let payload = RegisterRequest::new(
        &seed.admin_username,
        &seed.admin_password,
        Some(&state.config.auth.admin_secret),
    );

    match auth::register(state, payload).await {
        Ok(user) => {
            info!(user_id = user.id, username = %user.username, "Seeded default admin");
            Ok(())
        }
        Err(AppError::DuplicateUser) => {
            tracing::debug!("Default admin already present");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Ensure required database indexes exist.
///
/// The view uniqueness index backs the upsert in `record_view`, so failing to
/// create it is an error. The listing index is best-effort.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    let stmt = Index::create()
        .if_not_exists()
        .unique()
        .name("idx_news_views_user_news")
        .table(news_view::Entity)
        .col(news_view::Column::UserId)
        .col(news_view::Column::NewsId)
        .to_string(SqliteQueryBuilder);

    db.execute_unprepared(&stmt).await?;
    info!("Ensured index idx_news_views_user_news exists");

    // News list ordering:
    // SELECT ... FROM game_news ORDER BY date_posted DESC, id DESC
    let stmt = Index::create()
        .if_not_exists()
        .name("idx_game_news_posted")
        .table(game_news::Entity)
        .col(game_news::Column::DatePosted)
        .col(game_news::Column::Id)
        .to_string(SqliteQueryBuilder);

    match db.execute_unprepared(&stmt).await {
        Ok(_) => {
            info!("Ensured index idx_game_news_posted exists");
        }
        Err(e) => {
            tracing::warn!("Failed to create index idx_game_news_posted: {}", e);
        }
    }

    Ok(())
}
