//! Typed error handling for BizTime
//!
//! Two layers of errors flow through the crate:
//!
//! - [`StoreError`]: what a persistence backend reports. Constraint failures
//!   are classified into a closed set of variants so that resource managers
//!   can branch on them without looking at raw database codes.
//! - [`BizError`]: the uniform failure value a resource manager hands to the
//!   HTTP boundary. Each variant carries a message and maps to one status.
//!
//! # Example
//!
//! ```rust,ignore
//! use biztime::prelude::*;
//!
//! match store.insert_invoice(new_invoice).await {
//!     Ok(invoice) => Ok(invoice),
//!     Err(StoreError::ForeignKeyViolation { .. }) => Err(BizError::not_found("company not found")),
//!     Err(e) => Err(e.into()),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

// =============================================================================
// Store Errors
// =============================================================================

/// Failures surfaced by a [`BizStore`](crate::core::store::BizStore) backend
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// A unique or primary key constraint was violated
    #[error("duplicate key value violates unique constraint: {message}")]
    DuplicateKey { message: String },

    /// A referenced row does not exist
    #[error("foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// A CHECK constraint rejected the row
    #[error("check constraint violation: {message}")]
    CheckViolation { message: String },

    /// A parameter could not be converted to the column type
    #[error("invalid input syntax: {message}")]
    InvalidInput { message: String },

    /// Anything else; carries the backend's raw message
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for store calls
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Domain Errors
// =============================================================================

/// The error signal returned by every resource manager operation
#[derive(Debug)]
pub enum BizError {
    /// Required field(s) absent or empty, or a value the store rejected
    Validation { message: String },

    /// Uniqueness violation on create or update
    Conflict { message: String },

    /// No row for a keyed lookup, a non-numeric id, or a missing FK target
    NotFound { message: String },

    /// Unclassified storage failure, surfaced with the store's raw message
    Storage(StoreError),
}

impl BizError {
    pub fn validation(message: impl Into<String>) -> Self {
        BizError::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        BizError::Conflict {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        BizError::NotFound {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// Conflicts answer 400, not 409.
    pub fn status_code(&self) -> StatusCode {
        match self {
            BizError::Validation { .. } => StatusCode::BAD_REQUEST,
            BizError::Conflict { .. } => StatusCode::BAD_REQUEST,
            BizError::NotFound { .. } => StatusCode::NOT_FOUND,
            BizError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BizError::Validation { .. } => "VALIDATION_ERROR",
            BizError::Conflict { .. } => "CONFLICT",
            BizError::NotFound { .. } => "NOT_FOUND",
            BizError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorDetail {
                status: self.status_code().as_u16(),
                code: self.error_code().to_string(),
            },
            message: self.to_string(),
        }
    }
}

impl fmt::Display for BizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BizError::Validation { message }
            | BizError::Conflict { message }
            | BizError::NotFound { message } => write!(f, "{}", message),
            BizError::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for BizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BizError::Storage(e) => Some(e),
            _ => None,
        }
    }
}

/// Error response structure for HTTP responses: `{error, message}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    /// Human-readable error message
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub status: u16,
    pub code: String,
}

impl IntoResponse for BizError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed: {}", self);
        }
        (status, Json(self.to_response())).into_response()
    }
}

// =============================================================================
// Conversions
// =============================================================================

/// Unclassified store failures bubble up unmodified
impl From<StoreError> for BizError {
    fn from(err: StoreError) -> Self {
        BizError::Storage(err)
    }
}

impl From<serde_json::Error> for BizError {
    fn from(err: serde_json::Error) -> Self {
        BizError::validation(format!("Invalid JSON: {}", err))
    }
}

/// A specialized Result type for resource manager operations
pub type BizResult<T> = Result<T, BizError>;

// =============================================================================
// Tests
// =============================================================================
