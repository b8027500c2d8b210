//! Error taxonomy for dataset-level failures
//!
//! Classifiers never fail; everything here is raised by dataset loading,
//! the dataset analyzer or the insight generator.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
  #[error("Empty dataset")]
  EmptyDataset,

  #[error("Could not find feedback column: {column}")]
  MissingTextColumn { column: String },

  #[error("Cannot generate insights from an empty analysis")]
  EmptyAnalysis,

  #[error("Malformed row at line {line}: {message}")]
  MalformedRow { line: u64, message: String },

  #[error("Failed to read CSV: {0}")]
  Csv(#[from] csv::Error),

  #[error("Failed to read dataset: {0}")]
  Io(#[from] std::io::Error),
}

impl AnalysisError {
  pub fn missing_text_column(column: impl Into<String>) -> Self {
    Self::MissingTextColumn { column: column.into() }
  }

  pub fn malformed_row(line: u64, message: impl Into<String>) -> Self {
    Self::MalformedRow { line, message: message.into() }
  }

  /// Stable key used by API error envelopes
  pub fn key(&self) -> &'static str {
    match self {
      Self::EmptyDataset => "empty_dataset",
      Self::MissingTextColumn { .. } => "missing_text_column",
      Self::EmptyAnalysis => "empty_analysis",
      Self::MalformedRow { .. } => "malformed_row",
      Self::Csv(_) => "csv_error",
      Self::Io(_) => "io_error",
    }
  }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_messages() {
    assert_eq!(AnalysisError::EmptyDataset.to_string(), "Empty dataset");
    assert_eq!(
      AnalysisError::missing_text_column("notes").to_string(),
      "Could not find feedback column: notes"
    );
    assert_eq!(
      AnalysisError::malformed_row(4, "expected 3 fields, found 2").to_string(),
      "Malformed row at line 4: expected 3 fields, found 2"
    );
  }

  #[test]
  fn test_error_keys() {
    assert_eq!(AnalysisError::EmptyDataset.key(), "empty_dataset");
    assert_eq!(AnalysisError::EmptyAnalysis.key(), "empty_analysis");
    assert_eq!(AnalysisError::missing_text_column("x").key(), "missing_text_column");
  }
}
