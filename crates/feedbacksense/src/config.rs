//! Configuration management for FeedbackSense
//!
//! Server limits and chart settings, loaded from JSON. Every field has a
//! default, so a partial file only overrides what it names.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "FEEDBACKSENSE_CONFIG";

/// Config files looked up in the working directory, in order
const LOCAL_CONFIG_FILES: [&str; 2] = [".feedbacksense.json", "feedbacksense.json"];

#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("Failed to read config file {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Invalid config file {path}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("Failed to write config file {path}: {source}")]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub server: ServerSettings,
  #[serde(default)]
  pub charts: ChartSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
  /// Address the REST server binds to
  #[serde(default = "default_bind")]
  pub bind: SocketAddr,
  /// Largest accepted upload body
  #[serde(default = "default_max_upload_bytes")]
  pub max_upload_bytes: usize,
  /// Stored sessions; the oldest is evicted beyond this
  #[serde(default = "default_max_sessions")]
  pub max_sessions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
  #[serde(default = "default_histogram_bins")]
  pub histogram_bins: usize,
  #[serde(default = "default_top_words")]
  pub top_words: usize,
  /// Category breakdown is skipped when the column has more distinct values
  #[serde(default = "default_max_categories")]
  pub max_categories: usize,
  #[serde(default = "default_min_word_length")]
  pub min_word_length: usize,
  #[serde(default = "default_stop_words")]
  pub stop_words: Vec<String>,
}

fn default_bind() -> SocketAddr {
  SocketAddr::from(([127, 0, 0, 1], 5000))
}
fn default_max_upload_bytes() -> usize {
  16 * 1024 * 1024
}
fn default_max_sessions() -> usize {
  16
}
fn default_histogram_bins() -> usize {
  25
}
fn default_top_words() -> usize {
  20
}
fn default_max_categories() -> usize {
  10
}
fn default_min_word_length() -> usize {
  4
}
fn default_stop_words() -> Vec<String> {
  [
    "the", "and", "was", "were", "are", "is", "to", "of", "a", "an", "for", "with", "on", "in", "at", "by", "very",
    "but", "it", "that", "this",
  ]
  .into_iter()
  .map(str::to_string)
  .collect()
}

impl Default for ServerSettings {
  fn default() -> Self {
    Self {
      bind: default_bind(),
      max_upload_bytes: default_max_upload_bytes(),
      max_sessions: default_max_sessions(),
    }
  }
}

impl Default for ChartSettings {
  fn default() -> Self {
    Self {
      histogram_bins: default_histogram_bins(),
      top_words: default_top_words(),
      max_categories: default_max_categories(),
      min_word_length: default_min_word_length(),
      stop_words: default_stop_words(),
    }
  }
}

impl Config {
  /// Load configuration from a file
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content =
      std::fs::read_to_string(path).map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
  }

  /// Load from the explicit path, `FEEDBACKSENSE_CONFIG`, the working
  /// directory or `~/.feedbacksense/config.json`, falling back to defaults
  pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
    if let Some(path) = explicit {
      debug!(path = %path.display(), "Loading config from explicit path");
      return Self::load_from_file(path);
    }

    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
      debug!(path = ?path, "Loading config from {CONFIG_ENV}");
      return Self::load_from_file(PathBuf::from(path));
    }

    for path in config_candidates() {
      if path.exists() {
        debug!(path = %path.display(), "Loading config");
        return Self::load_from_file(path);
      }
    }

    debug!("No config file found, using defaults");
    Ok(Config::default())
  }

  /// Save configuration to a file
  pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let content =
      serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
    std::fs::write(path, content).map_err(|source| ConfigError::Write { path: path.to_path_buf(), source })
  }
}

fn config_candidates() -> Vec<PathBuf> {
  let mut candidates: Vec<PathBuf> = LOCAL_CONFIG_FILES.iter().map(PathBuf::from).collect();
  if let Some(home) = dirs::home_dir() {
    candidates.push(home.join(".feedbacksense").join("config.json"));
  }
  candidates
}
