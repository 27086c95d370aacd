use std::sync::Arc;

use anyhow::Context;
use static_feed::catalog::PostCatalog;
use static_feed::config::AppConfig;
use static_feed::state::AppState;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    common::telemetry::init_tracing("info");

    let config = AppConfig::load().context("Failed to load config")?;

    let catalog = PostCatalog::seeded();
    info!(posts = catalog.len(), "Post catalog ready");

    let state = AppState {
        catalog: Arc::new(catalog),
        config: config.clone(),
    };

    common::http::serve(static_feed::build_router(state), &config.server)
        .await
        .context("Server error")?;

    Ok(())
}
