use serde::{Deserialize, Serialize};

use crate::entity::{game_news, news_image};
use crate::error::AppError;
use common::{Category, GameTag};

/// Category selector label meaning "every category".
pub const ALL_CATEGORIES: &str = "All news";
/// Game selector label meaning "every game".
pub const ALL_GAMES: &str = "All games";
/// Shown in place of an author that no longer resolves.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

#[derive(Debug, Clone, Deserialize)]
pub struct CreateNewsRequest {
    pub title: String,
    pub content: String,
    pub category: Category,
    #[serde(default)]
    pub game: Option<GameTag>,
    pub author_id: i32,
}

impl CreateNewsRequest {
    /// Build a request from selector labels. An empty game label stores no game.
    pub fn from_labels(
        title: &str,
        content: &str,
        category: &str,
        game: &str,
        author_id: i32,
    ) -> Result<Self, AppError> {
        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
            category: category.trim().parse()?,
            game: GameTag::parse_optional(game)?,
            author_id,
        })
    }
}

pub fn validate_create_news(req: &CreateNewsRequest) -> Result<(), AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::InvalidInput("Title must not be empty".into()));
    }
    if req.content.trim().is_empty() {
        return Err(AppError::InvalidInput("Content must not be empty".into()));
    }
    Ok(())
}

/// Trim edited content, rejecting content that is blank.
pub fn normalize_content(content: &str) -> Result<String, AppError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(AppError::InvalidInput(
            "News content must not be empty".into(),
        ));
    }
    Ok(content.to_string())
}

/// Equality filters for the news list. `None` matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct NewsFilter {
    pub category: Option<Category>,
    pub game: Option<GameTag>,
}

impl NewsFilter {
    pub fn new(category: Option<Category>, game: Option<GameTag>) -> Self {
        Self { category, game }
    }

    /// Build a filter from selector labels, where [`ALL_CATEGORIES`],
    /// [`ALL_GAMES`] and blank labels disable the corresponding filter.
    pub fn from_labels(category: &str, game: &str) -> Result<Self, AppError> {
        let category = match category.trim() {
            "" | ALL_CATEGORIES => None,
            label => Some(label.parse()?),
        };
        let game = match game.trim() {
            "" | ALL_GAMES => None,
            label => Some(label.parse()?),
        };
        Ok(Self { category, game })
    }
}

/// One row of the news list.
#[derive(Debug, Clone, Serialize)]
pub struct NewsSummary {
    pub news: game_news::Model,
    pub author_name: String,
    pub view_count: u64,
}

/// A single news item as shown in the detail view.
#[derive(Debug, Clone, Serialize)]
pub struct NewsDetail {
    pub news: game_news::Model,
    pub author_name: String,
    pub view_count: u64,
    /// Ordered by id, i.e. the order they were attached.
    pub images: Vec<news_image::Model>,
}
