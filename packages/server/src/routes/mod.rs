use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::config::UploadConfig;
use crate::handlers;
use crate::state::AppState;

pub fn api_routes(upload: &UploadConfig) -> OpenApiRouter<AppState> {
    let upload = OpenApiRouter::new()
        .routes(routes!(handlers::upload::upload_post))
        .layer(handlers::upload::upload_body_limit(upload.max_file_size));

    OpenApiRouter::new()
        .routes(routes!(handlers::feed::get_feed))
        .merge(upload)
}
