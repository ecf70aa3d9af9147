//! Videos Domain
//!
//! Read-only access to the `videos` collection, exposed as the `videos` GraphQL query.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   GraphQL   │  ← `videos` query resolver
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Document → response mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Documents, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_videos::{MongoVideoRepository, VideoService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("feedback");
//!
//! let service = VideoService::new(MongoVideoRepository::new(db));
//! let videos = service.list_videos().await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod graphql;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{VideoError, VideoResult};
pub use graphql::VideoQuery;
pub use models::{FeedbackReference, Video, VideoResponse};
pub use crate::mongodb::{MongoVideoRepository, VIDEOS_COLLECTION};
pub use repository::VideoRepository;
pub use service::VideoService;
