//! FeedbackSense - feedback sentiment analysis application
//!
//! Wraps the `sentiment` pipeline with configuration, a bundled demo
//! dataset, chart series, report and CSV exports, a CLI and a REST server.

pub mod analysis;
pub mod charts;
pub mod cli;
pub mod config;
pub mod demo;
pub mod export;
pub mod server;

pub use analysis::{run_analysis, AnalysisReport, AnalysisRun};
pub use config::Config;
