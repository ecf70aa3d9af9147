//! Feedback Domain
//!
//! Stores user feedback (a 1-5 rating plus a comment) against a video and lists it back
//! per video. Exposed as the `feedbackByVideo` query and the `createFeedback` mutation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   GraphQL   │  ← Resolvers, input validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← ObjectId parsing, response mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Documents, inputs, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_feedback::{CreateFeedbackInput, FeedbackService, MongoFeedbackRepository, Rating};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let repository = MongoFeedbackRepository::new(client.database("feedback"));
//! repository.create_indexes().await?;
//!
//! let service = FeedbackService::new(repository);
//! let created = service
//!     .create_feedback(CreateFeedbackInput {
//!         rating: Rating(5),
//!         comment: "Great video".to_string(),
//!         user: "alice".to_string(),
//!         video_id: "65a1b2c3d4e5f6a7b8c9d0e1".to_string(),
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod graphql;
pub mod models;
pub mod mongodb;
pub mod rating;
pub mod repository;
pub mod service;

pub use crate::mongodb::{FEEDBACKS_COLLECTION, MongoFeedbackRepository};
pub use error::{FeedbackError, FeedbackResult};
pub use graphql::{FeedbackMutation, FeedbackQuery};
pub use models::{
    CreateFeedbackInput, Feedback, FeedbackByVideoArgs, FeedbackResponse, NewFeedback,
    VideoReference,
};
pub use rating::Rating;
pub use repository::FeedbackRepository;
pub use service::FeedbackService;
