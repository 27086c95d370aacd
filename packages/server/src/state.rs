use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::AppConfig;
use crate::image_host::ImageHost;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub image_host: Arc<dyn ImageHost>,
    pub config: AppConfig,
}
