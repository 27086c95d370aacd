use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entity::post;

/// Response DTO for a single persisted post.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct PostResponse {
    /// Post ID (UUIDv7).
    #[schema(example = "01936f0e-1234-7abc-8000-000000000001")]
    pub id: String,
    #[schema(example = "hello")]
    pub caption: String,
    /// Public URL on the image host.
    #[schema(example = "https://ik.imagekit.io/demo/cat_VB9YQWcCz.jpg")]
    pub url: String,
    /// `image` or `video`.
    #[schema(example = "image")]
    pub file_type: String,
    /// File name assigned by the image host.
    #[schema(example = "cat_VB9YQWcCz.jpg")]
    pub file_name: String,
    pub created_at: DateTime<Utc>,
}

/// Response DTO for the feed, newest first.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct FeedResponse {
    pub posts: Vec<PostResponse>,
}

impl From<post::Model> for PostResponse {
    fn from(model: post::Model) -> Self {
        Self {
            id: model.id.to_string(),
            caption: model.caption,
            url: model.url,
            file_type: model.file_type,
            file_name: model.file_name,
            created_at: model.created_at,
        }
    }
}
