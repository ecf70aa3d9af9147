//! Video Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::VideoResult;
use crate::models::VideoResponse;
use crate::repository::VideoRepository;

/// Lists videos for the GraphQL layer.
///
/// Holds the repository behind a trait object so one concrete service type can be
/// registered as schema data regardless of the backing store.
#[derive(Clone)]
pub struct VideoService {
    repository: Arc<dyn VideoRepository>,
}

impl VideoService {
    pub fn new(repository: impl VideoRepository + 'static) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All videos with ids stringified. No filtering, sorting or pagination.
    #[instrument(skip(self))]
    pub async fn list_videos(&self) -> VideoResult<Vec<VideoResponse>> {
        let videos = self.repository.find_all().await?;
        Ok(videos.into_iter().map(VideoResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VideoError;
    use crate::models::Video;
    use crate::repository::MockVideoRepository;
    use mongodb::bson::oid::ObjectId;

    fn sample_video(title: &str, feedbacks: Vec<ObjectId>) -> Video {
        Video {
            id: ObjectId::new(),
            title: title.to_string(),
            url: format!("https://videos.example.com/{}.mp4", title.to_lowercase()),
            feedbacks,
        }
    }

    #[tokio::test]
    async fn test_list_videos_preserves_store_order() {
        let first = sample_video("Intro", vec![]);
        let second = sample_video("Deep Dive", vec![ObjectId::new()]);
        let stored = vec![first.clone(), second.clone()];

        let mut mock_repo = MockVideoRepository::new();
        mock_repo
            .expect_find_all()
            .times(1)
            .returning(move || Ok(stored.clone()));

        let service = VideoService::new(mock_repo);
        let videos = service.list_videos().await.unwrap();

        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].id.as_str(), first.id.to_hex());
        assert_eq!(videos[0].title, "Intro");
        assert_eq!(videos[1].id.as_str(), second.id.to_hex());
        assert_eq!(videos[1].feedbacks.len(), 1);
    }

    #[tokio::test]
    async fn test_list_videos_empty_store() {
        let mut mock_repo = MockVideoRepository::new();
        mock_repo.expect_find_all().returning(|| Ok(vec![]));

        let service = VideoService::new(mock_repo);

        assert!(service.list_videos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_videos_propagates_store_error() {
        let mut mock_repo = MockVideoRepository::new();
        mock_repo
            .expect_find_all()
            .returning(|| Err(VideoError::Database("connection reset".to_string())));

        let service = VideoService::new(mock_repo);
        let err = service.list_videos().await.unwrap_err();

        assert!(matches!(err, VideoError::Database(ref msg) if msg == "connection reset"));
    }
}
