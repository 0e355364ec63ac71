use sea_orm::DatabaseConnection;

use crate::config::AppConfig;

/// Handles every service operation works against. Passed explicitly; there is
/// no process-wide store.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: AppConfig,
}
