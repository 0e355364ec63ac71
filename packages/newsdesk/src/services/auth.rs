use sea_orm::*;
use tracing::instrument;

use crate::entity::user;
use crate::error::AppError;
use crate::models::auth::{RegisterRequest, validate_register_request};
use crate::state::AppState;
use crate::utils::hash;
use common::Role;

/// Create an account. The role is `Admin` when the supplied secret matches the
/// configured admin secret, `User` otherwise.
#[instrument(skip(state, payload), fields(username = %payload.username))]
pub async fn register(state: &AppState, payload: RegisterRequest) -> Result<user::Model, AppError> {
    validate_register_request(&payload)?;

    let username = payload.username.trim().to_string();

    let txn = state.db.begin().await?;

    let taken = user::Entity::find()
        .filter(user::Column::Username.eq(&username))
        .one(&txn)
        .await?
        .is_some();
    if taken {
        return Err(AppError::DuplicateUser);
    }

    let role = Role::for_secret(
        payload.secret_key.as_deref(),
        &state.config.auth.admin_secret,
    );

    let hash = hash::hash_password(&payload.password)
        .map_err(|e| AppError::Internal(format!("Password hash error: {}", e)))?;

    let new_user = user::ActiveModel {
        username: Set(username),
        password: Set(hash),
        role: Set(role),
        registration_date: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let user = new_user.insert(&txn).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            tracing::debug!("Registration race condition: unique constraint caught on insert");
            AppError::DuplicateUser
        }
        _ => AppError::from(e),
    })?;
    txn.commit().await?;

    tracing::info!(user_id = user.id, role = %user.role, "User registered");
    Ok(user)
}

/// Look up the account matching the exact username and password.
#[instrument(skip(state, password))]
pub async fn login(state: &AppState, username: &str, password: &str) -> Result<user::Model, AppError> {
    let user = user::Entity::find()
        .filter(user::Column::Username.eq(username.trim()))
        .one(&state.db)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let is_valid = hash::verify_password(password, &user.password)
        .map_err(|e| AppError::Internal(format!("Password verify error: {}", e)))?;

    if !is_valid {
        return Err(AppError::InvalidCredentials);
    }

    tracing::info!(user_id = user.id, "User logged in");
    Ok(user)
}

/// Profile of a single user.
#[instrument(skip(state))]
pub async fn get_user(state: &AppState, user_id: i32) -> Result<user::Model, AppError> {
    find_user(&state.db, user_id).await
}

pub(crate) async fn find_user<C: ConnectionTrait>(db: &C, id: i32) -> Result<user::Model, AppError> {
    user::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))
}
