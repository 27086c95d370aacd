pub mod catalog;
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Static Feed API",
        version = "1.0.0",
        description = "Read-only access to a fixed set of text posts"
    ),
    tags((name = "Posts", description = "Static text posts")),
)]
struct ApiDoc;

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let cors = state.config.server.cors.clone();

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routes::api_routes())
        .split_for_parts();

    let router = router
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
        .merge(Scalar::with_url("/scalar", api));

    common::http::add_tracing(common::http::add_cors(router, &cors))
}
