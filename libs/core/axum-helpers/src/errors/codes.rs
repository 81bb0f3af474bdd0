//! Type-safe error codes for API responses.
//!
//! Each error code carries:
//! - String representation for client consumption (e.g., "INVALID_JSON")
//! - Integer code for logging and monitoring (e.g., 1001)
//! - Default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::InvalidJson;
//! assert_eq!(code.as_str(), "INVALID_JSON");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Invalid JSON request body");
//! ```

use serde::Serialize;
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request body is not valid JSON or does not match the expected shape
    InvalidJson,

    /// Query string could not be deserialized
    InvalidQuery,

    /// Requested resource was not found
    NotFound,

    // Database errors (2000-2999)
    /// No database connection was established at startup
    DatabaseUnavailable,

    /// Database operation failed
    DatabaseError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier clients can match on.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidJson => "INVALID_JSON",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::NotFound => "NOT_FOUND",
            Self::DatabaseUnavailable => "DATABASE_UNAVAILABLE",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// Integer code for structured logs.
    ///
    /// - 1000-1999: Client errors
    /// - 2000-2999: Database errors
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidJson => 1001,
            Self::InvalidQuery => 1002,
            Self::NotFound => 1004,
            Self::DatabaseUnavailable => 2001,
            Self::DatabaseError => 2003,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidJson => "Invalid JSON request body",
            Self::InvalidQuery => "Invalid query parameters",
            Self::NotFound => "The requested resource was not found",
            Self::DatabaseUnavailable => "Database not configured",
            Self::DatabaseError => "Database error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
