pub mod codes;
pub mod handlers;

pub use codes::ErrorCode;

use async_graphql::ErrorExtensions;
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// JSON body for errors raised outside GraphQL (unknown routes, failed readiness).
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Resource not found"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: i32,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn from_code(code: ErrorCode) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: code.default_message().to_string(),
            details: None,
        }
    }
}

/// Application error surfaced to GraphQL clients.
///
/// Domain errors convert into this type; [`ErrorExtensions::extend`] turns it into an
/// `async_graphql::Error` carrying:
/// - `extensions.code`: machine-readable identifier (e.g. `VALIDATION_ERROR`)
/// - `extensions.errorCode`: integer code
/// - `extensions.details`: per-field validation failures, when present
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid ObjectId: {0}")]
    InvalidObjectId(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::ValidationError(_) => ErrorCode::ValidationError,
            AppError::InvalidObjectId(_) => ErrorCode::InvalidObjectId,
            AppError::Database(_) => ErrorCode::DatabaseError,
        }
    }

    /// Client-facing message. Database messages pass through unchanged.
    fn message(&self) -> String {
        match self {
            AppError::ValidationError(_) => ErrorCode::ValidationError
                .default_message()
                .to_string(),
            AppError::InvalidObjectId(value) => {
                format!("'{}' is not a valid ObjectId", value)
            }
            AppError::Database(msg) => msg.clone(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::ValidationError(e) => serde_json::to_value(e).ok(),
            _ => None,
        }
    }

    fn log(&self) {
        let code = self.error_code();
        if code.is_client_error() {
            tracing::info!(error_code = code.code(), "{}", self);
        } else {
            tracing::error!(error_code = code.code(), "{}", self);
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        self.log();

        let code = self.error_code();
        let details = self
            .details()
            .and_then(|d| async_graphql::Value::from_json(d).ok());

        async_graphql::Error::new(self.message()).extend_with(|_, ext| {
            ext.set("code", code.as_str());
            ext.set("errorCode", code.code());
            if let Some(details) = details {
                ext.set("details", details);
            }
        })
    }
}
