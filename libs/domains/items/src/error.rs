use axum_helpers::{AppError, ErrorCode};
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

/// Body message for every failed update or delete
pub const ITEM_NOT_FOUND: &str = "Item not found";

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(ObjectId),

    #[error("Invalid item id: {0:?}")]
    InvalidId(String),

    #[error("Item name is required")]
    MissingName,

    #[error("Item name cannot be cast to a string: {0}")]
    InvalidName(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

impl ItemError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ItemError::NotFound(_) => ErrorCode::DatabaseNotFound,
            ItemError::InvalidId(_) => ErrorCode::InvalidObjectId,
            ItemError::MissingName | ItemError::InvalidName(_) => ErrorCode::BadRequest,
            ItemError::Database(_) => ErrorCode::DatabaseError,
        }
    }

    /// Collapse used by list and create: every failure is a 500.
    pub fn into_store_failure(self) -> AppError {
        tracing::warn!(
            error_code = self.error_code().code(),
            error = %self,
            "Item store operation failed"
        );
        AppError::InternalServerError(self.to_string())
    }

    /// Collapse used by update and delete: every failure is a 400 "Item not found".
    pub fn into_lookup_failure(self) -> AppError {
        tracing::info!(
            error_code = self.error_code().code(),
            error = %self,
            "Item lookup failed"
        );
        AppError::BadRequest(ITEM_NOT_FOUND.to_string())
    }
}

impl From<mongodb::error::Error> for ItemError {
    fn from(err: mongodb::error::Error) -> Self {
        ItemError::Database(err.to_string())
    }
}
