use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VideoError {
    #[error("Database error: {0}")]
    Database(String),
}

pub type VideoResult<T> = Result<T, VideoError>;

impl From<VideoError> for AppError {
    fn from(err: VideoError) -> Self {
        match err {
            VideoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl From<mongodb::error::Error> for VideoError {
    fn from(err: mongodb::error::Error) -> Self {
        VideoError::Database(err.to_string())
    }
}
