use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// First time a user opened a news item. At most one row per (user, news).
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "news_views")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique_key = "user_news")]
    pub user_id: i32,
    #[sea_orm(unique_key = "user_news")]
    pub news_id: i32,

    #[sea_orm(belongs_to, from = "user_id", to = "id")]
    pub user: HasOne<super::user::Entity>,
    #[sea_orm(belongs_to, from = "news_id", to = "id")]
    pub news: HasOne<super::game_news::Entity>,

    pub view_date: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
