//! GraphQL resolvers for feedback

use async_graphql::{Context, ErrorExtensions, Object, Result};
use axum_helpers::{AppError, validated};

use crate::models::{CreateFeedbackInput, FeedbackByVideoArgs, FeedbackResponse};
use crate::service::FeedbackService;

/// Query fields contributed by the feedback domain.
///
/// Expects a [`FeedbackService`] in the schema data.
#[derive(Default)]
pub struct FeedbackQuery;

#[Object]
impl FeedbackQuery {
    /// Feedback recorded against one video
    async fn feedback_by_video(
        &self,
        ctx: &Context<'_>,
        video_id: String,
    ) -> Result<Vec<FeedbackResponse>> {
        let args = validated(FeedbackByVideoArgs { video_id }).map_err(|e| e.extend())?;
        let service = ctx.data::<FeedbackService>()?;
        service
            .list_by_video(&args.video_id)
            .await
            .map_err(|e| AppError::from(e).extend())
    }
}

#[derive(Default)]
pub struct FeedbackMutation;

#[Object]
impl FeedbackMutation {
    /// Store feedback for a video and return it with its generated id
    async fn create_feedback(
        &self,
        ctx: &Context<'_>,
        input: CreateFeedbackInput,
    ) -> Result<FeedbackResponse> {
        let input = validated(input).map_err(|e| e.extend())?;
        let service = ctx.data::<FeedbackService>()?;
        service
            .create_feedback(input)
            .await
            .map_err(|e| AppError::from(e).extend())
    }
}
