//! Axum router configuration for all endpoints

use axum::{extract::DefaultBodyLimit, middleware, routing::get, routing::post, Router};

use crate::server::handlers::{analysis, downloads, status};
use crate::server::middleware::request_context_middleware;
use crate::server::state::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
  let body_limit = state.config.server.max_upload_bytes;

  Router::new()
    // Status and version endpoints
    .route("/status", get(status::status))
    .route("/version", get(status::version))
    .route("/api", get(status::api_info))
    .route("/api/schema", get(status::api_schema))
    // Analysis endpoints
    .route("/analyze", post(analysis::analyze))
    .route("/demo", get(analysis::demo))
    .route("/sessions/{id}", get(analysis::session))
    // Downloads
    .route("/sessions/{id}/insights", get(downloads::session_insights))
    .route("/sessions/{id}/dataset", get(downloads::session_dataset))
    .route("/download-insights", get(downloads::download_insights))
    .route("/download-dataset", get(downloads::download_dataset))
    .layer(DefaultBodyLimit::max(body_limit))
    .layer(middleware::from_fn(request_context_middleware))
    .with_state(state)
}
