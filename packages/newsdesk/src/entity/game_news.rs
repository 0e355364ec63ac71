use common::{Category, GameTag};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game_news")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub category: Category,
    /// NULL when the item is not about a particular game.
    pub game: Option<GameTag>,

    pub author_id: i32,
    #[sea_orm(belongs_to, from = "author_id", to = "id")]
    pub author: HasOne<super::user::Entity>,

    #[sea_orm(has_many)]
    pub images: HasMany<super::news_image::Entity>,

    #[sea_orm(has_many)]
    pub views: HasMany<super::news_view::Entity>,

    pub date_posted: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
