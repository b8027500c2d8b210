//! In-memory analysis sessions
//!
//! Each completed analysis is stored under a generated id. The store also
//! remembers the most recent session so the "download current result"
//! endpoints keep working; a new analysis replaces it as latest.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use chrono::{DateTime, Local};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::analysis::AnalysisRun;
use crate::server::types::SessionSummary;

#[derive(Debug)]
pub struct AnalysisSession {
  pub id: Uuid,
  /// Upload filename, or "demo"
  pub source: String,
  pub run: AnalysisRun,
  pub created_at: DateTime<Local>,
}

impl AnalysisSession {
  pub fn summary(&self) -> SessionSummary {
    SessionSummary {
      session_id: self.id,
      source: self.source.clone(),
      text_column: self.run.report.text_column.clone(),
      stats: self.run.report.stats,
      created_at: self.created_at,
    }
  }
}

#[derive(Default)]
struct Sessions {
  by_id: HashMap<Uuid, Arc<AnalysisSession>>,
  /// Insertion order, oldest first
  order: VecDeque<Uuid>,
}

/// Bounded session store; the oldest session is evicted beyond capacity
pub struct SessionStore {
  capacity: usize,
  inner: RwLock<Sessions>,
}

impl SessionStore {
  pub fn new(capacity: usize) -> Self {
    Self { capacity: capacity.max(1), inner: RwLock::new(Sessions::default()) }
  }

  pub async fn insert(&self, source: impl Into<String>, run: AnalysisRun) -> Arc<AnalysisSession> {
    let session =
      Arc::new(AnalysisSession { id: Uuid::new_v4(), source: source.into(), run, created_at: Local::now() });

    let mut sessions = self.inner.write().await;
    sessions.by_id.insert(session.id, session.clone());
    sessions.order.push_back(session.id);

    while sessions.order.len() > self.capacity {
      if let Some(evicted) = sessions.order.pop_front() {
        sessions.by_id.remove(&evicted);
        debug!(session = %evicted, "Evicted oldest session");
      }
    }

    session
  }

  pub async fn get(&self, id: &Uuid) -> Option<Arc<AnalysisSession>> {
    self.inner.read().await.by_id.get(id).cloned()
  }

  /// Most recently stored session
  pub async fn latest(&self) -> Option<Arc<AnalysisSession>> {
    let sessions = self.inner.read().await;
    sessions.order.back().and_then(|id| sessions.by_id.get(id)).cloned()
  }

  pub async fn len(&self) -> usize {
    self.inner.read().await.by_id.len()
  }

  pub async fn is_empty(&self) -> bool {
    self.len().await == 0
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::analysis::run_analysis;
  use crate::config::ChartSettings;
  use sentiment::{DatasetAnalyzer, TabularDataset};

  fn run(csv: &str) -> AnalysisRun {
    let dataset = TabularDataset::from_csv_str(csv).unwrap();
    run_analysis(&DatasetAnalyzer::new(), &dataset, &ChartSettings::default()).unwrap()
  }

  #[tokio::test]
  async fn test_latest_tracks_newest_insert() {
    let store = SessionStore::new(4);
    assert!(store.latest().await.is_none());
    assert!(store.is_empty().await);

    let first = store.insert("a.csv", run("feedback\ngreat\n")).await;
    let second = store.insert("b.csv", run("feedback\nawful\n")).await;

    assert_eq!(store.latest().await.unwrap().id, second.id);
    assert_eq!(store.get(&first.id).await.unwrap().source, "a.csv");
    assert_eq!(store.len().await, 2);
  }

  #[tokio::test]
  async fn test_oldest_session_is_evicted() {
    let store = SessionStore::new(2);
    let first = store.insert("a.csv", run("feedback\ngreat\n")).await;
    store.insert("b.csv", run("feedback\ngreat\n")).await;
    let third = store.insert("c.csv", run("feedback\ngreat\n")).await;

    assert_eq!(store.len().await, 2);
    assert!(store.get(&first.id).await.is_none());
    assert_eq!(store.latest().await.unwrap().id, third.id);
  }
}
