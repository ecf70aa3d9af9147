use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("Invalid video id: {0}")]
    InvalidVideoId(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type FeedbackResult<T> = Result<T, FeedbackError>;

impl From<FeedbackError> for AppError {
    fn from(err: FeedbackError) -> Self {
        match err {
            FeedbackError::InvalidVideoId(id) => AppError::InvalidObjectId(id),
            FeedbackError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl From<mongodb::error::Error> for FeedbackError {
    fn from(err: mongodb::error::Error) -> Self {
        FeedbackError::Database(err.to_string())
    }
}
