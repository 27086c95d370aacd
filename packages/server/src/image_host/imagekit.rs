use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, StatusCode};
use tokio_util::io::ReaderStream;
use tracing::{debug, instrument};

use super::{HostedFile, ImageHost, ImageHostError, UploadRequest};
use crate::config::ImageHostConfig;

/// Longest slice of a rejection body kept for logs.
const MAX_ERROR_BODY: usize = 512;

/// ImageKit upload API client.
pub struct ImageKitClient {
    client: Client,
    upload_url: String,
    private_key: String,
}

impl ImageKitClient {
    pub fn new(config: &ImageHostConfig) -> Result<Self, ImageHostError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            upload_url: config.upload_url.clone(),
            private_key: config.private_key.clone(),
        })
    }

    /// Build the upload form, streaming the staged file from disk.
    async fn form(request: UploadRequest<'_>) -> Result<Form, ImageHostError> {
        let file = tokio::fs::File::open(request.path).await?;
        let body = Body::wrap_stream(ReaderStream::new(file));

        let part = Part::stream_with_length(body, request.size)
            .file_name(request.file_name.to_string())
            .mime_str(request.content_type)
            .map_err(|_| ImageHostError::ContentType(request.content_type.to_string()))?;

        Ok(Form::new()
            .part("file", part)
            .text("fileName", request.file_name.to_string())
            .text("useUniqueFileName", "true")
            .text("tags", request.tag.to_string()))
    }
}

#[async_trait]
impl ImageHost for ImageKitClient {
    #[instrument(skip_all, fields(file_name = request.file_name))]
    async fn upload(&self, request: UploadRequest<'_>) -> Result<HostedFile, ImageHostError> {
        let form = Self::form(request).await?;
        debug!(size = request.size, "Sending file to image host");

        let response = self
            .client
            .post(&self.upload_url)
            .basic_auth(&self.private_key, Some(""))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body: String = response
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(MAX_ERROR_BODY)
                .collect();
            return Err(ImageHostError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<HostedFile>()
            .await
            .map_err(|e| ImageHostError::Decode(e.to_string()))
    }
}
