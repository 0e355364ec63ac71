use serde::{Deserialize, Serialize};

use crate::entity::user;
use crate::error::AppError;
use common::Role;

/// Input for account registration.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    /// Grants the Admin role when it matches the configured admin secret.
    #[serde(default)]
    pub secret_key: Option<String>,
}

impl RegisterRequest {
    pub fn new(username: &str, password: &str, secret_key: Option<&str>) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            secret_key: secret_key.map(str::to_string),
        }
    }
}

pub fn validate_register_request(payload: &RegisterRequest) -> Result<(), AppError> {
    if payload.username.trim().is_empty() {
        return Err(AppError::InvalidInput("Username must not be empty".into()));
    }
    if payload.password.is_empty() {
        return Err(AppError::InvalidInput("Password must not be empty".into()));
    }
    Ok(())
}

/// The logged-in user, held by the presentation layer for the lifetime of
/// the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user_id: i32,
    pub username: String,
    pub role: Role,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Returns `Ok(())` for admins, `Err(PermissionDenied)` otherwise.
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::PermissionDenied)
        }
    }
}

impl From<user::Model> for Session {
    fn from(user: user::Model) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
            role: user.role,
        }
    }
}
