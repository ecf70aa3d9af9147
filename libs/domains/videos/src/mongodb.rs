//! MongoDB implementation of VideoRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{Collection, Database, bson::doc};
use tracing::instrument;

use crate::error::VideoResult;
use crate::models::Video;
use crate::repository::VideoRepository;

pub const VIDEOS_COLLECTION: &str = "videos";

/// MongoDB implementation of the VideoRepository
pub struct MongoVideoRepository {
    collection: Collection<Video>,
}

impl MongoVideoRepository {
    /// Repository over the `videos` collection of `db`
    ///
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoVideoRepository::new(client.database("feedback"));
    /// ```
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Video>(VIDEOS_COLLECTION);
        Self { collection }
    }

    /// Underlying collection, used for seeding in tests
    pub fn collection(&self) -> &Collection<Video> {
        &self.collection
    }
}

#[async_trait]
impl VideoRepository for MongoVideoRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> VideoResult<Vec<Video>> {
        let cursor = self.collection.find(doc! {}).await?;
        let videos: Vec<Video> = cursor.try_collect().await?;

        tracing::debug!(count = videos.len(), "Fetched videos");
        Ok(videos)
    }
}
