use std::sync::Arc;

use crate::catalog::PostCatalog;
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<PostCatalog>,
    pub config: AppConfig,
}
