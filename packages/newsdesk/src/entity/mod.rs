pub mod game_news;
pub mod news_image;
pub mod news_view;
pub mod user;
