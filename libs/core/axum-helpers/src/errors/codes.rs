//! Type-safe error codes for structured logs.
//!
//! Response bodies only ever carry `{"message": ...}`; the codes below are
//! attached to log events (`error_code = ...`) so failures that share a
//! status code on the wire can still be told apart when debugging.
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::InvalidObjectId;
//! assert_eq!(code.as_str(), "INVALID_OBJECT_ID");
//! assert_eq!(code.code(), 1002);
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Generic bad request
    BadRequest,

    /// Path id is not a 24-character hex ObjectId
    InvalidObjectId,

    /// Request body could not be read
    BodyExtraction,

    /// No route, static file or document matched
    NotFound,

    /// Unexpected server-side failure
    InternalError,

    /// Request body is not valid JSON for the target type
    InvalidJson,

    /// A dependency is not reachable
    ServiceUnavailable,

    // Database errors (2000-2999)
    /// Lookup by id matched no document
    DatabaseNotFound,

    /// The document store rejected or failed an operation
    DatabaseError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidObjectId => "INVALID_OBJECT_ID",
            Self::BodyExtraction => "BODY_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::InvalidJson => "INVALID_JSON",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::DatabaseNotFound => "DATABASE_NOT_FOUND",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// Integer code for logging and monitoring.
    ///
    /// - 1000-1999: Client errors
    /// - 2000-2999: Database errors
    pub fn code(&self) -> i32 {
        match self {
            // Client errors (1000-1999)
            Self::BadRequest => 1001,
            Self::InvalidObjectId => 1002,
            Self::BodyExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::InvalidJson => 1010,
            Self::ServiceUnavailable => 1011,

            // Database errors (2000-2999)
            Self::DatabaseNotFound => 2001,
            Self::DatabaseError => 2003,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
