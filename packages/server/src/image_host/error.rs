use common::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageHostError {
    #[error("Image host request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Image host rejected upload with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Unexpected image host response: {0}")]
    Decode(String),

    #[error("Failed to read staged upload: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid content type for upload: {0}")]
    ContentType(String),
}

impl From<ImageHostError> for AppError {
    fn from(err: ImageHostError) -> Self {
        match err {
            ImageHostError::Io(_) | ImageHostError::ContentType(_) => {
                AppError::Internal(err.to_string())
            }
            other => AppError::Upstream(other.to_string()),
        }
    }
}
