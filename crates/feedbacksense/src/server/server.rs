//! REST server startup and configuration

use anyhow::Result;
use axum::serve;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::config::Config;
use crate::server::routing::create_router;
use crate::server::state::AppState;

/// Start the REST server
pub async fn start_server(addr: SocketAddr, config: Config) -> Result<()> {
  info!("Starting FeedbackSense REST server on {addr}");

  let app = create_router(AppState::new(config))
    .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(CorsLayer::permissive()));

  let listener = TcpListener::bind(addr).await?;
  info!("Server listening on {addr}");

  match serve(listener, app).await {
    Ok(()) => {
      info!("Server shutdown gracefully");
      Ok(())
    }
    Err(e) => {
      error!("Server error: {e}");
      Err(anyhow::anyhow!("Server error: {e}"))
    }
  }
}
