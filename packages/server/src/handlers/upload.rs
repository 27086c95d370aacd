use axum::Json;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use common::error::{AppError, ErrorBody};
use sea_orm::{ActiveModelTrait, Set};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::entity::post;
use crate::image_host::UploadRequest;
use crate::models::post::PostResponse;
use crate::staging::{StagedFile, multipart_error, stage_field};
use crate::state::AppState;
use crate::utils::filename::upload_file_name;
use crate::utils::media::{MediaKind, resolve_content_type};

/// Multipart framing and the caption on top of the file itself.
const FORM_OVERHEAD: usize = 64 * 1024;

pub fn upload_body_limit(max_file_size: u64) -> DefaultBodyLimit {
    let file_limit = usize::try_from(max_file_size).unwrap_or(usize::MAX);
    DefaultBodyLimit::max(file_limit.saturating_add(FORM_OVERHEAD))
}

/// The `file` part after staging.
struct IncomingFile {
    staged: StagedFile,
    file_name: String,
    content_type: String,
    kind: MediaKind,
}

#[utoipa::path(
    post,
    path = "/upload",
    tag = "Feed",
    operation_id = "uploadPost",
    summary = "Upload a photo or video as a new post",
    description = "Accepts a multipart form with a required `file` part (image or video) and an \
        optional `caption`. The file is forwarded to the image host; on success a post \
        referencing the hosted URL is stored and returned.",
    request_body(content_type = "multipart/form-data", description = "File upload with optional caption"),
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 413, description = "File too large (PAYLOAD_TOO_LARGE)", body = ErrorBody),
        (status = 500, description = "Post could not be stored (STORAGE_ERROR, INTERNAL_ERROR)", body = ErrorBody),
        (status = 502, description = "Image host failed (UPSTREAM_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip_all)]
pub async fn upload_post(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let upload_config = &state.config.upload;

    let mut incoming: Option<IncomingFile> = None;
    let mut caption: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        match field.name() {
            Some("file") => {
                let raw_name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .ok_or_else(|| AppError::Validation("File field must have a filename".into()))?;
                let file_name = upload_file_name(&raw_name)
                    .map_err(|e| AppError::Validation(e.message().into()))?
                    .to_string();

                let content_type = resolve_content_type(field.content_type(), &file_name);
                let kind = MediaKind::from_content_type(&content_type).ok_or_else(|| {
                    AppError::Validation(format!(
                        "Unsupported content type '{content_type}': only images and videos are accepted"
                    ))
                })?;

                let staged = stage_field(
                    field,
                    &upload_config.staging_dir,
                    upload_config.max_file_size,
                )
                .await?;

                incoming = Some(IncomingFile {
                    staged,
                    file_name,
                    content_type,
                    kind,
                });
            }
            Some("caption") => {
                caption = Some(field.text().await.map_err(multipart_error)?);
            }
            _ => {} // Ignore unknown fields.
        }
    }

    let incoming = incoming.ok_or_else(|| AppError::Validation("Missing 'file' field".into()))?;
    let caption = caption.unwrap_or_default();

    info!(
        size = incoming.staged.size(),
        file_name = %incoming.file_name,
        kind = %incoming.kind,
        "Upload staged"
    );

    let hosted = state
        .image_host
        .upload(UploadRequest {
            path: incoming.staged.path(),
            size: incoming.staged.size(),
            file_name: &incoming.file_name,
            content_type: &incoming.content_type,
            tag: &upload_config.tag,
        })
        .await?;

    info!(file_id = %hosted.file_id, url = %hosted.url, "Stored on image host");

    let model = post::ActiveModel {
        id: Set(Uuid::now_v7()),
        caption: Set(caption),
        url: Set(hosted.url),
        file_type: Set(incoming.kind.as_str().to_string()),
        file_name: Set(hosted.name),
        created_at: Set(Utc::now()),
    }
    .insert(&state.db)
    .await?;

    info!(post_id = %model.id, "Post created");

    Ok((StatusCode::CREATED, Json(PostResponse::from(model))))
}
