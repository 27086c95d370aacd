use std::path::{Path, PathBuf};

use axum::extract::multipart::{Field, MultipartError};
use axum::http::StatusCode;
use common::AppError;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// A local copy of an upload. The file is removed when the guard drops, so
/// every exit path of the handler (including cancellation) cleans up.
#[derive(Debug)]
pub struct StagedFile {
    path: PathBuf,
    size: u64,
}

impl StagedFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        // Best effort.
        if let Err(e) = std::fs::remove_file(&self.path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            tracing::warn!(path = %self.path.display(), "Failed to remove staged upload: {}", e);
        }
    }
}

/// Stream a multipart field into a fresh file under `dir`, rejecting
/// anything larger than `max_size` bytes.
pub async fn stage_field(
    mut field: Field<'_>,
    dir: &Path,
    max_size: u64,
) -> Result<StagedFile, AppError> {
    let mut staged = StagedFile {
        path: dir.join(format!("feed-upload-{}", Uuid::new_v4())),
        size: 0,
    };

    let mut file = tokio::fs::File::create(&staged.path)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to create staging file: {e}")))?;

    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(multipart_error)?
    {
        staged.size += chunk.len() as u64;
        if staged.size > max_size {
            return Err(AppError::PayloadTooLarge(format!(
                "File exceeds maximum size of {max_size} bytes"
            )));
        }
        file.write_all(&chunk)
            .await
            .map_err(|e| AppError::Internal(format!("Staging file write failed: {e}")))?;
    }

    file.flush()
        .await
        .map_err(|e| AppError::Internal(format!("Staging file flush failed: {e}")))?;

    Ok(staged)
}

/// Map a multipart read failure, keeping body-limit overruns as 413.
pub fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(format!("Multipart error: {err}"))
    }
}
