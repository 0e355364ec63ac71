use common::Role;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub username: String,
    /// Argon2 PHC string, never the raw password.
    pub password: String,
    pub role: Role,

    #[sea_orm(has_many)]
    pub news: HasMany<super::game_news::Entity>,

    #[sea_orm(has_many)]
    pub views: HasMany<super::news_view::Entity>,

    pub registration_date: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
