use std::path::PathBuf;

use common::config::{ServerConfig, config_path};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// Pool upper bound. Default: 10.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Pool lower bound. Default: 1.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Seconds to wait when opening a connection. Default: 8.
    #[serde(default = "default_pool_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Seconds to wait for a free pooled connection. Default: 8.
    #[serde(default = "default_pool_timeout_secs")]
    pub acquire_timeout_secs: u64,
    /// Seconds before an idle connection is closed. Default: 300.
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
}

fn default_max_connections() -> u32 {
    10
}
fn default_min_connections() -> u32 {
    1
}
fn default_pool_timeout_secs() -> u64 {
    8
}
fn default_idle_timeout_secs() -> u64 {
    300
}

/// Upload pipeline settings.
#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    /// Directory holding uploads while they are forwarded. Default: system temp dir.
    #[serde(default = "default_staging_dir")]
    pub staging_dir: PathBuf,
    /// Maximum accepted file size in bytes. Default: 50 MiB.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
    /// Tag attached to every file sent to the image host. Default: "backend-upload".
    #[serde(default = "default_tag")]
    pub tag: String,
}

fn default_staging_dir() -> PathBuf {
    std::env::temp_dir()
}
fn default_max_file_size() -> u64 {
    50 * 1024 * 1024
}
fn default_tag() -> String {
    "backend-upload".into()
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            staging_dir: default_staging_dir(),
            max_file_size: default_max_file_size(),
            tag: default_tag(),
        }
    }
}

/// External image host (ImageKit-compatible upload API).
#[derive(Debug, Deserialize, Clone)]
pub struct ImageHostConfig {
    #[serde(default = "default_upload_url")]
    pub upload_url: String,
    /// Private API key, sent as the basic-auth username.
    pub private_key: String,
    /// Request timeout in seconds. Default: 30.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_upload_url() -> String {
    "https://upload.imagekit.io/api/v1/files/upload".into()
}
fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub upload: UploadConfig,
    pub image_host: ImageHostConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path("FEED_SERVER_CONFIG", "config/feed-server");

        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8001)?
            .set_default("database.url", "sqlite://feed.db?mode=rwc")?
            .add_source(File::with_name(&path).required(false))
            // Override from environment (e.g., FEED_SERVER__IMAGE_HOST__PRIVATE_KEY)
            .add_source(Environment::with_prefix("FEED_SERVER").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
