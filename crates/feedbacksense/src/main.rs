use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use feedbacksense::cli::commands::{self, ExportTargets, OutputFormat};
use feedbacksense::Config;

#[derive(Parser)]
#[command(name = "feedbacksense")]
#[command(about = "FeedbackSense - Feedback Sentiment Analysis\nThree-method sentiment scoring and insights for feedback datasets")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
  /// Path to a JSON config file
  #[arg(long, global = true, env = "FEEDBACKSENSE_CONFIG")]
  config: Option<PathBuf>,

  /// Enable verbose logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Command,
}

/// Output and export options shared by analysis commands
#[derive(Args)]
struct OutputArgs {
  /// Output format
  #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
  format: OutputFormat,
  /// Write the analyzed dataset as CSV
  #[arg(long)]
  dataset_out: Option<PathBuf>,
  /// Write the insights report as text
  #[arg(long)]
  report_out: Option<PathBuf>,
}

impl OutputArgs {
  fn exports(&self) -> ExportTargets<'_> {
    ExportTargets { dataset: self.dataset_out.as_deref(), report: self.report_out.as_deref() }
  }
}

#[derive(Subcommand)]
enum Command {
  /// Analyze a CSV file of feedback
  Analyze {
    /// CSV file to analyze
    path: PathBuf,
    #[command(flatten)]
    output: OutputArgs,
  },
  /// Analyze the bundled workshop feedback dataset
  Demo {
    #[command(flatten)]
    output: OutputArgs,
  },
  /// Score a single text with all three classifiers
  Classify {
    /// Text to classify
    text: String,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
  },
  /// Run the REST server
  Serve {
    /// Server bind address (defaults to the configured one)
    #[arg(long)]
    bind: Option<SocketAddr>,
  },
}

fn init_logging(verbose: bool, serving: bool) {
  let default = match (verbose, serving) {
    (true, _) => "debug",
    (false, true) => "feedbacksense=info,sentiment=info,tower_http=info,warn",
    (false, false) => "warn",
  };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

  tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();
}

async fn handle(command: Command, config: Config) -> Result<()> {
  match command {
    Command::Analyze { path, output } => commands::analyze(&path, output.format, output.exports(), &config),
    Command::Demo { output } => commands::demo(output.format, output.exports(), &config),
    Command::Classify { text, format } => commands::classify(&text, format),
    Command::Serve { bind } => commands::serve(bind, config).await,
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  init_logging(cli.verbose, matches!(cli.command, Command::Serve { .. }));

  let config = Config::load(cli.config.as_deref())?;
  handle(cli.command, config).await
}
