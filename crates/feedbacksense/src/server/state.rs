//! Shared server state

use std::sync::Arc;

use sentiment::DatasetAnalyzer;

use crate::config::Config;
use crate::server::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
  pub analyzer: Arc<DatasetAnalyzer>,
  pub sessions: Arc<SessionStore>,
  pub config: Arc<Config>,
}

impl AppState {
  pub fn new(config: Config) -> Self {
    Self {
      analyzer: Arc::new(DatasetAnalyzer::new()),
      sessions: Arc::new(SessionStore::new(config.server.max_sessions)),
      config: Arc::new(config),
    }
  }
}
