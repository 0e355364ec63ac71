use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Reference to an image file on the local filesystem. Only the path is
/// stored; the file itself is never copied or owned.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "news_images")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub news_id: i32,
    #[sea_orm(belongs_to, from = "news_id", to = "id")]
    pub news: HasOne<super::game_news::Entity>,

    pub image_path: String,
}

impl ActiveModelBehavior for ActiveModel {}
