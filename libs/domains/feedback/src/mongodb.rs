//! MongoDB implementation of FeedbackRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
};
use tracing::instrument;

use crate::error::FeedbackResult;
use crate::models::{Feedback, NewFeedback};
use crate::repository::FeedbackRepository;

pub const FEEDBACKS_COLLECTION: &str = "feedbacks";

/// MongoDB implementation of the FeedbackRepository
pub struct MongoFeedbackRepository {
    collection: Collection<Feedback>,
}

impl MongoFeedbackRepository {
    /// Repository over the `feedbacks` collection of `db`
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Feedback>(FEEDBACKS_COLLECTION);
        Self { collection }
    }

    pub fn collection(&self) -> &Collection<Feedback> {
        &self.collection
    }

    /// Create indexes for efficient per-video lookups
    pub async fn create_indexes(&self) -> FeedbackResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "video": 1 })
            .options(
                IndexOptions::builder()
                    .name("video_1".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;

        tracing::info!("Feedback indexes created");
        Ok(())
    }
}

#[async_trait]
impl FeedbackRepository for MongoFeedbackRepository {
    #[instrument(skip(self, input), fields(video_id = %input.video))]
    async fn create(&self, input: NewFeedback) -> FeedbackResult<Feedback> {
        let feedback = Feedback::new(input);

        self.collection.insert_one(&feedback).await?;

        tracing::info!(feedback_id = %feedback.id, "Feedback created successfully");
        Ok(feedback)
    }

    #[instrument(skip(self))]
    async fn find_by_video_id(&self, video_id: ObjectId) -> FeedbackResult<Vec<Feedback>> {
        let cursor = self.collection.find(doc! { "video": video_id }).await?;
        let feedback: Vec<Feedback> = cursor.try_collect().await?;

        tracing::debug!(count = feedback.len(), "Fetched feedback");
        Ok(feedback)
    }
}
