//! REST API module for FeedbackSense
//!
//! HTTP endpoints for uploading feedback datasets, retrieving insights and
//! downloading exports. Uses axum for routing and schemars for the response
//! schema.

pub mod handlers;
pub mod middleware;
pub mod routing;
#[allow(clippy::module_inception)]
pub mod server;
pub mod session;
pub mod state;
pub mod types;

pub use routing::create_router;
pub use server::start_server;
pub use state::AppState;
