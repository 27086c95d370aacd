use tracing_subscriber::{EnvFilter, fmt};

/// Install the global `fmt` subscriber. `RUST_LOG` takes precedence over
/// `default_filter`.
pub fn init_tracing(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt().with_env_filter(env_filter).with_target(false).init();
}
