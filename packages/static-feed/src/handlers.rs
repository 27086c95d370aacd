use axum::Json;
use axum::extract::State;
use common::error::{AppError, ErrorBody};
use common::extractors::{AppPath, AppQuery};
use tracing::instrument;

use crate::models::{ListPostsQuery, PostListing, PostResponse};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/posts",
    tag = "Posts",
    operation_id = "listPosts",
    summary = "List text posts",
    description = "With a positive `limit`, returns the first `limit` posts as an array in \
        insertion order. Without one (or with zero or a negative value), returns every post \
        as an object keyed by post id.",
    params(ListPostsQuery),
    responses(
        (status = 200, description = "Posts", body = PostListing),
        (status = 400, description = "Malformed query (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip_all, fields(limit = ?query.limit))]
pub async fn list_posts(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListPostsQuery>,
) -> Json<PostListing> {
    let listing = match query.limit {
        Some(limit) if limit > 0 => PostListing::Sequence(
            state
                .catalog
                .take(limit)
                .iter()
                .map(PostResponse::from)
                .collect(),
        ),
        _ => PostListing::Mapping(
            state
                .catalog
                .all()
                .iter()
                .map(|post| (post.id, PostResponse::from(post)))
                .collect(),
        ),
    };

    Json(listing)
}

#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "Posts",
    operation_id = "getPost",
    summary = "Get a text post by id",
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post", body = PostResponse),
        (status = 400, description = "Id is not an integer (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Post not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip_all, fields(post_id = id))]
pub async fn get_post(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<PostResponse>, AppError> {
    state
        .catalog
        .get(id)
        .map(|post| Json(PostResponse::from(post)))
        .ok_or_else(|| AppError::NotFound("Post not found".into()))
}
