//! Schema composition
//!
//! Each domain contributes its own query and mutation objects; they are merged into the
//! root types here.

use async_graphql::{EmptySubscription, MergedObject, Schema};
use domain_feedback::{FeedbackMutation, FeedbackQuery, FeedbackService};
use domain_videos::{VideoQuery, VideoService};

#[derive(MergedObject, Default)]
pub struct QueryRoot(VideoQuery, FeedbackQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(FeedbackMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(video_service: VideoService, feedback_service: FeedbackService) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(video_service)
    .data(feedback_service)
    .finish()
}

#[cfg(test)]
mod tests {
    use crate::testing::offline_schema;

    #[tokio::test]
    async fn test_sdl_declares_operations() {
        let sdl = offline_schema().await.sdl();

        for expected in [
            "videos: [Video!]!",
            "feedbackByVideo(videoId: String!): [Feedback!]!",
            "createFeedback(input: CreateFeedbackInput!): Feedback!",
            "input CreateFeedbackInput",
            "rating: Int!",
            "videoId: String!",
            "feedbacks: [FeedbackReference!]!",
            "video: VideoReference!",
        ] {
            assert!(sdl.contains(expected), "missing `{}` in:\n{}", expected, sdl);
        }
    }

    #[tokio::test]
    async fn test_sdl_has_no_subscriptions() {
        let sdl = offline_schema().await.sdl();
        assert!(!sdl.contains("type Subscription"));
    }
}
