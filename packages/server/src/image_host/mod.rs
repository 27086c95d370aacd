//! Client side of the external image host.
//!
//! Handlers talk to [`ImageHost`]; production wires in [`ImageKitClient`].

mod error;
mod imagekit;

use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

pub use error::ImageHostError;
pub use imagekit::ImageKitClient;

/// A staged file to hand over to the image host.
#[derive(Debug, Clone, Copy)]
pub struct UploadRequest<'a> {
    /// Local path of the staged copy.
    pub path: &'a Path,
    /// Byte length of the staged copy.
    pub size: u64,
    /// Requested name on the host. The host appends a suffix to keep it unique.
    pub file_name: &'a str,
    pub content_type: &'a str,
    pub tag: &'a str,
}

/// What the host reports back for a stored file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HostedFile {
    pub file_id: String,
    /// Final name, including the uniqueness suffix.
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub file_type: Option<String>,
}

#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Upload one file. Only an HTTP 200 answer counts as success.
    async fn upload(&self, request: UploadRequest<'_>) -> Result<HostedFile, ImageHostError>;
}
