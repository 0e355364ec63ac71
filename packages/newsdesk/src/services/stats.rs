use sea_orm::*;
use tracing::instrument;

use crate::entity::{game_news, news_image, news_view, user};
use crate::error::AppError;
use crate::models::stats::Statistics;
use crate::state::AppState;
use common::Role;

/// Count users, news, views and images across the whole store.
#[instrument(skip(state))]
pub async fn collect(state: &AppState) -> Result<Statistics, AppError> {
    let db = &state.db;

    let users = user::Entity::find().count(db).await?;
    let admins = user::Entity::find()
        .filter(user::Column::Role.eq(Role::Admin))
        .count(db)
        .await?;
    let regular_users = user::Entity::find()
        .filter(user::Column::Role.eq(Role::User))
        .count(db)
        .await?;
    let news = game_news::Entity::find().count(db).await?;
    let views = news_view::Entity::find().count(db).await?;
    let images = news_image::Entity::find().count(db).await?;

    Ok(Statistics {
        users,
        admins,
        regular_users,
        news,
        views,
        images,
    })
}
