use axum::Json;
use axum::extract::State;
use common::error::{AppError, ErrorBody};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};
use tracing::instrument;

use crate::entity::post;
use crate::models::post::{FeedResponse, PostResponse};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/feed",
    tag = "Feed",
    operation_id = "getFeed",
    summary = "List every post, newest first",
    responses(
        (status = 200, description = "Feed", body = FeedResponse),
        (status = 500, description = "Database failure (STORAGE_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip_all)]
pub async fn get_feed(State(state): State<AppState>) -> Result<Json<FeedResponse>, AppError> {
    Ok(Json(load_feed(&state.db).await?))
}

/// All posts ordered by `created_at` descending. Ties fall back to the
/// time-ordered id.
pub async fn load_feed<C: ConnectionTrait>(db: &C) -> Result<FeedResponse, DbErr> {
    let posts = post::Entity::find()
        .order_by_desc(post::Column::CreatedAt)
        .order_by_desc(post::Column::Id)
        .all(db)
        .await?;

    Ok(FeedResponse {
        posts: posts.into_iter().map(PostResponse::from).collect(),
    })
}
