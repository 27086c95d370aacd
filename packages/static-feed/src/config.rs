use common::config::{ServerConfig, config_path};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path("STATIC_FEED_CONFIG", "config/static-feed");

        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .add_source(File::with_name(&path).required(false))
            // Override from environment (e.g., STATIC_FEED__SERVER__PORT)
            .add_source(Environment::with_prefix("STATIC_FEED").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
