use serde::Deserialize;

/// Cross-origin settings shared by both services.
#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Allowed origins. Empty disables the CORS layer entirely.
    #[serde(default)]
    pub allow_origins: Vec<String>,
    /// Preflight cache duration in seconds. Default: 3600.
    #[serde(default = "default_cors_max_age")]
    pub max_age: u64,
}

fn default_cors_max_age() -> u64 {
    3600
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origins: Vec::new(),
            max_age: default_cors_max_age(),
        }
    }
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub cors: CorsConfig,
}

/// Resolve the config file path from `env_var`, falling back to `default`.
///
/// The returned path has no extension; the `config` crate probes the
/// supported formats itself.
pub fn config_path(env_var: &str, default: &str) -> String {
    std::env::var(env_var).unwrap_or_else(|_| default.to_string())
}
