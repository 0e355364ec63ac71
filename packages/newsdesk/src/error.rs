use std::path::PathBuf;

use sea_orm::DbErr;
use thiserror::Error;

/// Error returned by every service operation.
///
/// All variants are recoverable at the call site. A failed operation leaves
/// the store unchanged.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required field is missing or a label is not one of the fixed values.
    #[error("{0}")]
    InvalidInput(String),

    #[error("User already exists")]
    DuplicateUser,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("{0}")]
    NotFound(String),

    #[error("Insufficient permissions")]
    PermissionDenied,

    #[error("An unexpected error occurred")]
    Internal(String),
}

impl AppError {
    /// Machine-readable error code for the presentation layer. One of:
    /// `INVALID_INPUT`, `DUPLICATE_USER`, `INVALID_CREDENTIALS`,
    /// `FILE_NOT_FOUND`, `NOT_FOUND`, `PERMISSION_DENIED`, `INTERNAL_ERROR`.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::DuplicateUser => "DUPLICATE_USER",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::FileNotFound(_) => "FILE_NOT_FOUND",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::PermissionDenied => "PERMISSION_DENIED",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        tracing::error!("Internal error: {}", err);
        AppError::Internal(err.to_string())
    }
}

impl From<common::ParseLabelError> for AppError {
    fn from(err: common::ParseLabelError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
