use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use feed_server::config::AppConfig;
use feed_server::database::init_db;
use feed_server::image_host::ImageKitClient;
use feed_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    common::telemetry::init_tracing("info,sqlx=warn");

    let config = AppConfig::load().context("Failed to load config")?;

    tokio::fs::create_dir_all(&config.upload.staging_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to create staging directory {}",
                config.upload.staging_dir.display()
            )
        })?;

    let db = init_db(&config.database)
        .await
        .context("Failed to initialize database")?;

    let image_host =
        ImageKitClient::new(&config.image_host).context("Failed to build image host client")?;
    info!(upload_url = %config.image_host.upload_url, "Image host client ready");

    let state = AppState {
        db,
        image_host: Arc::new(image_host),
        config: config.clone(),
    };

    common::http::serve(feed_server::build_router(state), &config.server)
        .await
        .context("Server error")?;

    Ok(())
}
