use domain_feedback::{FeedbackService, MongoFeedbackRepository};
use domain_videos::{MongoVideoRepository, VideoService};
use mongodb::Client;

use crate::graphql::{AppSchema, build_schema};

/// Schema over a client that never connects. Enough for introspection and for requests
/// rejected before any database call.
pub(crate) async fn offline_schema() -> AppSchema {
    let client = Client::with_uri_str("mongodb://127.0.0.1:1").await.unwrap();
    let db = client.database("offline");

    build_schema(
        VideoService::new(MongoVideoRepository::new(db.clone())),
        FeedbackService::new(MongoFeedbackRepository::new(db)),
    )
}
