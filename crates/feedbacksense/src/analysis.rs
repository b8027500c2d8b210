//! One end-to-end analysis run
//!
//! Shared by the CLI and the REST server: analyze a dataset, derive the
//! insights, summary and chart series, and keep the records for exports.

use chrono::{DateTime, Local};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use sentiment::insights::generate_from_aggregate;
use sentiment::{
  AggregateSentiment, AnalyzedRecord, ColumnResolution, DatasetAnalyzer, Insight, SentimentDistribution,
  SummaryStats, TabularDataset,
};

use crate::charts::ChartData;
use crate::config::ChartSettings;
use crate::export;

/// Serializable result of one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
  pub text_column: String,
  pub resolution: ColumnResolution,
  pub insights: Vec<Insight>,
  pub charts: ChartData,
  pub stats: SummaryStats,
}

/// A finished run: the report plus the records it was derived from
#[derive(Debug, Clone)]
pub struct AnalysisRun {
  pub report: AnalysisReport,
  pub records: Vec<AnalyzedRecord>,
  pub distribution: SentimentDistribution,
  pub completed_at: DateTime<Local>,
}

pub fn run_analysis(
  analyzer: &DatasetAnalyzer,
  dataset: &TabularDataset,
  chart_settings: &ChartSettings,
) -> sentiment::Result<AnalysisRun> {
  let analysis = analyzer.analyze(dataset)?;
  let aggregate = AggregateSentiment::from_records(&analysis.records)?;

  let report = AnalysisReport {
    text_column: analysis.text_column,
    resolution: analysis.resolution,
    insights: generate_from_aggregate(&aggregate),
    charts: ChartData::build(&analysis.records, chart_settings),
    stats: SummaryStats::from_aggregate(&aggregate),
  };

  info!(
    rows = analysis.records.len(),
    column = %report.text_column,
    positive_pct = report.stats.positive_pct,
    "Analysis run complete"
  );

  Ok(AnalysisRun {
    report,
    records: analysis.records,
    distribution: aggregate.distribution,
    completed_at: Local::now(),
  })
}

impl AnalysisRun {
  /// Insights report stamped with the run's completion time
  pub fn render_report(&self) -> String {
    export::render_report(&self.report.stats, &self.distribution, &self.report.insights, &self.completed_at)
  }

  pub fn dataset_csv(&self) -> csv::Result<String> {
    export::dataset::to_csv_string(&self.records)
  }

  pub fn report_filename(&self) -> String {
    export::report_filename(&self.completed_at)
  }

  pub fn dataset_filename(&self) -> String {
    export::dataset_filename(&self.completed_at)
  }
}
