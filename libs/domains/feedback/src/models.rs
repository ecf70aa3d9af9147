use async_graphql::{ID, InputObject, SimpleObject};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::rating::{Rating, validate_rating};

/// Feedback document as stored in the `feedbacks` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub rating: i32,
    pub comment: String,
    pub user: String,
    /// Referenced video. Existence is not checked.
    pub video: ObjectId,
}

impl Feedback {
    /// Assigns a fresh ObjectId to `input`
    pub fn new(input: NewFeedback) -> Self {
        Self {
            id: ObjectId::new(),
            rating: input.rating,
            comment: input.comment,
            user: input.user,
            video: input.video,
        }
    }
}

/// Validated feedback ready to be persisted
#[derive(Debug, Clone, PartialEq)]
pub struct NewFeedback {
    pub rating: i32,
    pub comment: String,
    pub user: String,
    pub video: ObjectId,
}

/// Arguments of the `createFeedback` mutation
#[derive(Debug, Clone, InputObject, Validate)]
pub struct CreateFeedbackInput {
    #[validate(custom(function = "validate_rating"))]
    pub rating: Rating,

    #[validate(length(min = 1, max = 500, message = "Comment must be 1-500 characters"))]
    pub comment: String,

    #[validate(length(min = 1, message = "User is required"))]
    pub user: String,

    #[validate(length(min = 1, message = "Video id is required"))]
    pub video_id: String,
}

/// Arguments of the `feedbackByVideo` query
#[derive(Debug, Clone, Validate)]
pub struct FeedbackByVideoArgs {
    #[validate(length(min = 1, message = "Video id is required"))]
    pub video_id: String,
}

/// `{ id }` wrapper for the video a feedback belongs to
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct VideoReference {
    pub id: ID,
}

/// `Feedback` as returned over GraphQL
#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(name = "Feedback")]
pub struct FeedbackResponse {
    pub id: ID,
    pub rating: i32,
    pub comment: String,
    pub user: String,
    pub video: VideoReference,
}

impl From<Feedback> for FeedbackResponse {
    fn from(feedback: Feedback) -> Self {
        Self {
            id: ID(feedback.id.to_hex()),
            rating: feedback.rating,
            comment: feedback.comment,
            user: feedback.user,
            video: VideoReference {
                id: ID(feedback.video.to_hex()),
            },
        }
    }
}
