use async_trait::async_trait;

use crate::error::VideoResult;
use crate::models::Video;

/// Read access to stored videos
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Every video document, in natural store order
    async fn find_all(&self) -> VideoResult<Vec<Video>>;
}
