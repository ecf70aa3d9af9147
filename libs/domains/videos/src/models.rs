use async_graphql::{ID, SimpleObject};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Video document as stored in the `videos` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub url: String,
    /// Ids of feedback documents. Declared by the document shape only; no write path
    /// in this service appends to it.
    #[serde(default)]
    pub feedbacks: Vec<ObjectId>,
}

/// `{ id }` wrapper for a feedback id listed on a video
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct FeedbackReference {
    pub id: ID,
}

/// `Video` as returned over GraphQL
#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(name = "Video")]
pub struct VideoResponse {
    pub id: ID,
    pub title: String,
    pub url: String,
    pub feedbacks: Vec<FeedbackReference>,
}

impl From<Video> for VideoResponse {
    fn from(video: Video) -> Self {
        Self {
            id: ID(video.id.to_hex()),
            title: video.title,
            url: video.url,
            feedbacks: video
                .feedbacks
                .into_iter()
                .map(|id| FeedbackReference { id: ID(id.to_hex()) })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_response_stringifies_ids_in_order() {
        let first = ObjectId::new();
        let second = ObjectId::new();
        let video = Video {
            id: ObjectId::new(),
            title: "Intro".to_string(),
            url: "https://videos.example.com/intro.mp4".to_string(),
            feedbacks: vec![first, second],
        };
        let video_id = video.id.to_hex();

        let response = VideoResponse::from(video);

        assert_eq!(response.id.as_str(), video_id);
        assert_eq!(
            response.feedbacks,
            vec![
                FeedbackReference { id: ID(first.to_hex()) },
                FeedbackReference { id: ID(second.to_hex()) },
            ]
        );
    }

    #[test]
    fn test_document_without_feedbacks_defaults_to_empty() {
        let id = ObjectId::new();
        let document = doc! {
            "_id": id,
            "title": "Outro",
            "url": "https://videos.example.com/outro.mp4",
        };

        let video: Video = bson::from_document(document).unwrap();

        assert_eq!(video.id, id);
        assert!(video.feedbacks.is_empty());
    }
}
