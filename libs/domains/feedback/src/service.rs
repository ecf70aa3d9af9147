//! Feedback Service - Business logic layer

use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{FeedbackError, FeedbackResult};
use crate::models::{CreateFeedbackInput, FeedbackResponse, NewFeedback};
use crate::repository::FeedbackRepository;

/// Creates and lists feedback for the GraphQL layer.
///
/// Inputs are expected to be validated by the caller; the service only turns the video
/// id into an ObjectId and maps documents to responses.
#[derive(Clone)]
pub struct FeedbackService {
    repository: Arc<dyn FeedbackRepository>,
}

impl FeedbackService {
    pub fn new(repository: impl FeedbackRepository + 'static) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(video_id = %input.video_id))]
    pub async fn create_feedback(
        &self,
        input: CreateFeedbackInput,
    ) -> FeedbackResult<FeedbackResponse> {
        let video = parse_video_id(&input.video_id)?;

        let feedback = self
            .repository
            .create(NewFeedback {
                rating: input.rating.value(),
                comment: input.comment,
                user: input.user,
                video,
            })
            .await?;

        Ok(feedback.into())
    }

    #[instrument(skip(self))]
    pub async fn list_by_video(&self, video_id: &str) -> FeedbackResult<Vec<FeedbackResponse>> {
        let video = parse_video_id(video_id)?;
        let feedback = self.repository.find_by_video_id(video).await?;
        Ok(feedback.into_iter().map(FeedbackResponse::from).collect())
    }
}

fn parse_video_id(video_id: &str) -> FeedbackResult<ObjectId> {
    ObjectId::parse_str(video_id).map_err(|_| FeedbackError::InvalidVideoId(video_id.to_string()))
}
