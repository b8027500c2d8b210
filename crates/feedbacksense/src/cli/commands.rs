use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::*;

use sentiment::{DatasetAnalyzer, TabularDataset};

use crate::analysis::{run_analysis, AnalysisRun};
use crate::cli::display::{
  display_insight, display_method_comparison, display_summary, display_text_analysis,
};
use crate::config::Config;
use crate::demo::demo_dataset;
use crate::server::start_server;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
  /// Colored human-readable summary
  #[default]
  Pretty,
  /// The analysis payload as JSON
  Json,
}

/// Where to write optional exports
#[derive(Debug, Default)]
pub struct ExportTargets<'a> {
  pub dataset: Option<&'a Path>,
  pub report: Option<&'a Path>,
}

/// Analyze a CSV file of feedback
pub fn analyze(path: &Path, format: OutputFormat, exports: ExportTargets<'_>, config: &Config) -> Result<()> {
  let dataset =
    TabularDataset::from_path(path).with_context(|| format!("Failed to load dataset {}", path.display()))?;

  let run = run_analysis(&DatasetAnalyzer::new(), &dataset, &config.charts).context("Analysis failed")?;

  print_run(&run, format)?;
  write_exports(&run, &exports, format)
}

/// Analyze the bundled demo dataset
pub fn demo(format: OutputFormat, exports: ExportTargets<'_>, config: &Config) -> Result<()> {
  let dataset = demo_dataset()?;
  let run = run_analysis(&DatasetAnalyzer::new(), &dataset, &config.charts).context("Analysis failed")?;

  if format == OutputFormat::Pretty {
    println!("{} Loaded demo dataset with {} entries\n", "✓".green(), dataset.len());
  }
  print_run(&run, format)?;
  write_exports(&run, &exports, format)
}

/// Score a single text with all three classifiers
pub fn classify(text: &str, format: OutputFormat) -> Result<()> {
  let analysis = DatasetAnalyzer::new().analyze_text(text);

  match format {
    OutputFormat::Pretty => display_text_analysis(text, &analysis),
    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
  }
  Ok(())
}

/// Run the REST server in the foreground
pub async fn serve(bind: Option<SocketAddr>, config: Config) -> Result<()> {
  let addr = bind.unwrap_or(config.server.bind);
  println!("{} Serving FeedbackSense on {}", "▶".green(), format!("http://{addr}").cyan());
  start_server(addr, config).await
}

fn print_run(run: &AnalysisRun, format: OutputFormat) -> Result<()> {
  match format {
    OutputFormat::Json => {
      println!("{}", serde_json::to_string_pretty(&run.report)?);
    }
    OutputFormat::Pretty => {
      display_summary(&run.report.text_column, &run.report.stats, &run.distribution);
      println!("{} {}", "🎯".cyan(), "Key Insights".bold());
      println!();
      for (index, insight) in run.report.insights.iter().enumerate() {
        display_insight(index + 1, insight);
      }
      display_method_comparison(&run.report.charts);
    }
  }
  Ok(())
}

fn write_exports(run: &AnalysisRun, exports: &ExportTargets<'_>, format: OutputFormat) -> Result<()> {
  if let Some(path) = exports.dataset {
    let csv = run.dataset_csv().context("Failed to export dataset")?;
    std::fs::write(path, csv).with_context(|| format!("Failed to write {}", path.display()))?;
    if format == OutputFormat::Pretty {
      println!("{} Wrote analyzed dataset to {}", "✓".green(), path.display().to_string().cyan());
    }
  }

  if let Some(path) = exports.report {
    std::fs::write(path, run.render_report()).with_context(|| format!("Failed to write {}", path.display()))?;
    if format == OutputFormat::Pretty {
      println!("{} Wrote insights report to {}", "✓".green(), path.display().to_string().cyan());
    }
  }

  Ok(())
}
