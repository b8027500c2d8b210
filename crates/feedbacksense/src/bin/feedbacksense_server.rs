//! FeedbackSense REST Server
//!
//! HTTP API for uploading feedback datasets and retrieving insights,
//! chart series and exports.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use feedbacksense::config::Config;
use feedbacksense::server::start_server;

#[derive(Parser)]
#[command(name = "feedbacksense_server")]
#[command(about = "FeedbackSense REST API Server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
  /// Server bind address (defaults to the configured one)
  #[arg(long)]
  bind: Option<SocketAddr>,

  /// Path to a JSON config file
  #[arg(long, env = "FEEDBACKSENSE_CONFIG")]
  config: Option<PathBuf>,

  /// Enable verbose logging
  #[arg(short, long)]
  verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  let default = if args.verbose { "debug" } else { "feedbacksense=info,sentiment=info,tower_http=info,warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
  tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

  let config = Config::load(args.config.as_deref())?;
  let addr = args.bind.unwrap_or(config.server.bind);

  info!("Starting FeedbackSense REST Server v{}", env!("CARGO_PKG_VERSION"));
  info!("Binding to address: {addr}");

  start_server(addr, config).await
}
