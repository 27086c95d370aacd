use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::catalog::StaticPost;

/// A single text post.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "New Post")]
    pub title: String,
    #[schema(example = "Cool post")]
    pub content: String,
}

impl From<&StaticPost> for PostResponse {
    fn from(post: &StaticPost) -> Self {
        Self {
            id: post.id,
            title: post.title.to_string(),
            content: post.content.to_string(),
        }
    }
}

/// Result of `GET /posts`.
///
/// A positive `limit` yields an array; otherwise every post is returned as an
/// object keyed by post id.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum PostListing {
    Sequence(Vec<PostResponse>),
    Mapping(BTreeMap<i32, PostResponse>),
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPostsQuery {
    /// Maximum number of posts to return. Zero, negative or absent returns all.
    pub limit: Option<i64>,
}
