use std::collections::HashMap;
use std::path::Path;

use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{game_news, news_image, news_view, user};
use crate::error::AppError;
use crate::models::news::{
    CreateNewsRequest, NewsDetail, NewsFilter, NewsSummary, UNKNOWN_AUTHOR, normalize_content,
    validate_create_news,
};
use crate::services::auth::find_user;
use crate::state::AppState;

/// List news, most recent first. Items posted at the same instant are ordered
/// by id, newest first.
#[instrument(skip(state))]
pub async fn list_news(state: &AppState, filter: NewsFilter) -> Result<Vec<NewsSummary>, AppError> {
    let mut select = game_news::Entity::find();

    if let Some(category) = filter.category {
        select = select.filter(game_news::Column::Category.eq(category));
    }
    if let Some(game) = filter.game {
        select = select.filter(game_news::Column::Game.eq(game));
    }

    let rows = select
        .find_also_related(user::Entity)
        .order_by_desc(game_news::Column::DatePosted)
        .order_by_desc(game_news::Column::Id)
        .all(&state.db)
        .await?;

    let ids: Vec<i32> = rows.iter().map(|(news, _)| news.id).collect();
    let counts = view_counts(&state.db, ids).await?;

    Ok(rows
        .into_iter()
        .map(|(news, author)| NewsSummary {
            view_count: counts.get(&news.id).copied().unwrap_or(0),
            author_name: display_author(author),
            news,
        })
        .collect())
}

/// Full detail of one news item, without recording a view.
#[instrument(skip(state))]
pub async fn get_news(state: &AppState, news_id: i32) -> Result<NewsDetail, AppError> {
    load_detail(&state.db, news_id).await
}

/// Publish a news item. The author must be an admin.
#[instrument(skip(state, payload), fields(title = %payload.title, author_id = payload.author_id))]
pub async fn create_news(
    state: &AppState,
    payload: CreateNewsRequest,
) -> Result<game_news::Model, AppError> {
    validate_create_news(&payload)?;

    let txn = state.db.begin().await?;

    let author = find_user(&txn, payload.author_id).await?;
    if !author.role.is_admin() {
        return Err(AppError::PermissionDenied);
    }

    let new_news = game_news::ActiveModel {
        title: Set(payload.title.trim().to_string()),
        content: Set(payload.content),
        category: Set(payload.category),
        game: Set(payload.game),
        author_id: Set(author.id),
        date_posted: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let model = new_news.insert(&txn).await?;
    txn.commit().await?;

    tracing::info!(news_id = model.id, "News created");
    Ok(model)
}

/// Record that `user_id` opened `news_id` and return the refreshed item.
///
/// Only the first visit creates a view; later visits leave the store as is.
#[instrument(skip(state))]
pub async fn record_view(
    state: &AppState,
    user_id: i32,
    news_id: i32,
) -> Result<NewsDetail, AppError> {
    let txn = state.db.begin().await?;

    find_news(&txn, news_id).await?;
    find_user(&txn, user_id).await?;

    let view = news_view::ActiveModel {
        user_id: Set(user_id),
        news_id: Set(news_id),
        view_date: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = news_view::Entity::insert(view)
        .on_conflict(
            OnConflict::columns([news_view::Column::UserId, news_view::Column::NewsId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&txn)
        .await;

    match result {
        Ok(0) | Err(DbErr::RecordNotInserted) => {
            tracing::debug!("News already viewed by this user");
        }
        Ok(_) => tracing::debug!("View recorded"),
        Err(e) => return Err(e.into()),
    }

    let detail = load_detail(&txn, news_id).await?;
    txn.commit().await?;

    Ok(detail)
}

/// Replace the content of a news item. The post date is left unchanged.
#[instrument(skip(state, new_content))]
pub async fn edit_news_content(
    state: &AppState,
    news_id: i32,
    new_content: &str,
) -> Result<game_news::Model, AppError> {
    let content = normalize_content(new_content)?;

    let txn = state.db.begin().await?;

    let existing = find_news(&txn, news_id).await?;
    let mut active: game_news::ActiveModel = existing.into();
    active.content = Set(content);

    let model = active.update(&txn).await?;
    txn.commit().await?;

    tracing::info!("News content updated");
    Ok(model)
}

/// Delete a news item together with its images and views.
#[instrument(skip(state))]
pub async fn delete_news(state: &AppState, news_id: i32) -> Result<(), AppError> {
    let txn = state.db.begin().await?;

    find_news(&txn, news_id).await?;

    let views = news_view::Entity::delete_many()
        .filter(news_view::Column::NewsId.eq(news_id))
        .exec(&txn)
        .await?;
    let images = news_image::Entity::delete_many()
        .filter(news_image::Column::NewsId.eq(news_id))
        .exec(&txn)
        .await?;
    game_news::Entity::delete_by_id(news_id).exec(&txn).await?;

    txn.commit().await?;

    tracing::info!(
        views = views.rows_affected,
        images = images.rows_affected,
        "News deleted"
    );
    Ok(())
}

/// Attach an image file to a news item. The file must exist now; it is
/// referenced by path, never copied.
#[instrument(skip(state, path), fields(path = %path.as_ref().display()))]
pub async fn add_image(
    state: &AppState,
    news_id: i32,
    path: impl AsRef<Path>,
) -> Result<news_image::Model, AppError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AppError::FileNotFound(path.to_path_buf()));
    }

    find_news(&state.db, news_id).await?;

    let model = new_image(news_id, path).insert(&state.db).await?;

    tracing::info!(image_id = model.id, "Image attached");
    Ok(model)
}

/// Attach several files at once, as picked from a multi-select dialog.
/// Paths that do not exist are skipped.
#[instrument(skip(state, paths), fields(count = paths.len()))]
pub async fn add_images<P: AsRef<Path>>(
    state: &AppState,
    news_id: i32,
    paths: &[P],
) -> Result<Vec<news_image::Model>, AppError> {
    let txn = state.db.begin().await?;

    find_news(&txn, news_id).await?;

    let mut added = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Skipping missing image file");
            continue;
        }
        added.push(new_image(news_id, path).insert(&txn).await?);
    }

    txn.commit().await?;

    tracing::info!(added = added.len(), "Images attached");
    Ok(added)
}

/// Remove one image reference. The file on disk is left alone.
#[instrument(skip(state))]
pub async fn delete_image(state: &AppState, image_id: i32) -> Result<(), AppError> {
    let res = news_image::Entity::delete_by_id(image_id)
        .exec(&state.db)
        .await?;

    if res.rows_affected == 0 {
        return Err(AppError::NotFound("Image not found".into()));
    }

    tracing::info!("Image deleted");
    Ok(())
}

#[instrument(skip(state))]
pub async fn list_images(
    state: &AppState,
    news_id: i32,
) -> Result<Vec<news_image::Model>, AppError> {
    find_news(&state.db, news_id).await?;
    images_of(&state.db, news_id).await
}

/// Whether the referenced file can still be displayed.
pub fn image_available(image: &news_image::Model) -> bool {
    Path::new(&image.image_path).exists()
}

/// Number of distinct users that opened the news item.
#[instrument(skip(state))]
pub async fn view_count(state: &AppState, news_id: i32) -> Result<u64, AppError> {
    let count = news_view::Entity::find()
        .filter(news_view::Column::NewsId.eq(news_id))
        .count(&state.db)
        .await?;
    Ok(count)
}

/// Username of the author, or [`UNKNOWN_AUTHOR`] if the id no longer resolves.
#[instrument(skip(state))]
pub async fn author_name(state: &AppState, author_id: i32) -> Result<String, AppError> {
    let author = user::Entity::find_by_id(author_id).one(&state.db).await?;
    Ok(display_author(author))
}

fn display_author(author: Option<user::Model>) -> String {
    author
        .map(|u| u.username)
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}

fn new_image(news_id: i32, path: &Path) -> news_image::ActiveModel {
    news_image::ActiveModel {
        news_id: Set(news_id),
        image_path: Set(path.to_string_lossy().into_owned()),
        ..Default::default()
    }
}

async fn find_news<C: ConnectionTrait>(db: &C, id: i32) -> Result<game_news::Model, AppError> {
    game_news::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("News not found".into()))
}

async fn images_of<C: ConnectionTrait>(
    db: &C,
    news_id: i32,
) -> Result<Vec<news_image::Model>, AppError> {
    let images = news_image::Entity::find()
        .filter(news_image::Column::NewsId.eq(news_id))
        .order_by_asc(news_image::Column::Id)
        .all(db)
        .await?;
    Ok(images)
}

async fn load_detail<C: ConnectionTrait>(db: &C, news_id: i32) -> Result<NewsDetail, AppError> {
    let (news, author) = game_news::Entity::find_by_id(news_id)
        .find_also_related(user::Entity)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("News not found".into()))?;

    let view_count = news_view::Entity::find()
        .filter(news_view::Column::NewsId.eq(news_id))
        .count(db)
        .await?;
    let images = images_of(db, news_id).await?;

    Ok(NewsDetail {
        news,
        author_name: display_author(author),
        view_count,
        images,
    })
}

/// View counts keyed by news id. Ids without views are absent.
async fn view_counts<C: ConnectionTrait>(
    db: &C,
    news_ids: Vec<i32>,
) -> Result<HashMap<i32, u64>, AppError> {
    if news_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = news_view::Entity::find()
        .select_only()
        .column(news_view::Column::NewsId)
        .column_as(news_view::Column::Id.count(), "views")
        .filter(news_view::Column::NewsId.is_in(news_ids))
        .group_by(news_view::Column::NewsId)
        .into_tuple::<(i32, i64)>()
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(news_id, views)| (news_id, views as u64))
        .collect())
}
