//! Storage and service layer for a game news board: accounts with an
//! Admin/User role, news items with images and per-user view tracking, and
//! store-wide statistics.

pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod models;
pub mod seed;
pub mod services;
pub mod state;
pub mod utils;

pub use common::{Category, GameTag, Role};
pub use error::AppError;
pub use state::AppState;
