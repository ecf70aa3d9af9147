use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::FeedbackResult;
use crate::models::{Feedback, NewFeedback};

/// Repository trait for Feedback persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Insert one feedback and return it with its generated id
    async fn create(&self, input: NewFeedback) -> FeedbackResult<Feedback>;

    /// All feedback whose `video` equals `video_id`, unsorted
    async fn find_by_video_id(&self, video_id: ObjectId) -> FeedbackResult<Vec<Feedback>>;
}
