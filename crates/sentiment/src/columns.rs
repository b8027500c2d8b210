//! Text column resolution
//!
//! Picks the column holding the free-text feedback through three stages:
//! a name hint, then the longest text on average, then the first column.

use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "schemars")]
use schemars::JsonSchema;

use crate::dataset::{CellValue, ColumnKind, TabularDataset};

/// Substrings that mark a column name as feedback text, in priority order
pub const TEXT_COLUMN_HINTS: [&str; 7] =
  ["feedback", "review", "comment", "text", "response", "opinion", "message"];

/// Length a missing cell contributes to a column's mean, as its "nan" rendering
const MISSING_CELL_LENGTH: usize = 3;

/// Which stage picked the text column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum ColumnResolution {
  /// Column name contains a hint, case-insensitively
  ExactHint { column: String, hint: String },
  /// Text column with the greatest mean length in characters
  LongestText { column: String, mean_length: f64 },
  FirstColumn { column: String },
}

impl ColumnResolution {
  pub fn column(&self) -> &str {
    match self {
      ColumnResolution::ExactHint { column, .. }
      | ColumnResolution::LongestText { column, .. }
      | ColumnResolution::FirstColumn { column } => column,
    }
  }

  pub fn strategy(&self) -> &'static str {
    match self {
      ColumnResolution::ExactHint { .. } => "exact_hint",
      ColumnResolution::LongestText { .. } => "longest_text",
      ColumnResolution::FirstColumn { .. } => "first_column",
    }
  }
}

/// Resolve the feedback column. `None` only for a dataset without columns.
pub fn resolve_text_column(dataset: &TabularDataset) -> Option<ColumnResolution> {
  by_name_hint(dataset).or_else(|| by_longest_text(dataset)).or_else(|| {
    let first = dataset.columns().first()?;
    debug!(column = %first.name, "Falling back to the first column");
    Some(ColumnResolution::FirstColumn { column: first.name.clone() })
  })
}

fn by_name_hint(dataset: &TabularDataset) -> Option<ColumnResolution> {
  dataset.columns().iter().find_map(|column| {
    let lower = column.name.to_lowercase();
    let hint = TEXT_COLUMN_HINTS.iter().find(|hint| lower.contains(*hint))?;

    debug!(column = %column.name, hint, "Text column matched a name hint");
    Some(ColumnResolution::ExactHint { column: column.name.clone(), hint: hint.to_string() })
  })
}

fn by_longest_text(dataset: &TabularDataset) -> Option<ColumnResolution> {
  if dataset.is_empty() {
    return None;
  }

  let mut best: Option<(usize, f64)> = None;
  for (index, column) in dataset.columns().iter().enumerate() {
    if column.kind != ColumnKind::Text {
      continue;
    }

    let total: usize = dataset.column_values(index).map(rendered_length).sum();
    let mean = total as f64 / dataset.len() as f64;

    if best.map_or(true, |(_, best_mean)| mean > best_mean) {
      best = Some((index, mean));
    }
  }

  let (index, mean_length) = best?;
  let column = dataset.columns()[index].name.clone();
  debug!(column = %column, mean_length, "Text column picked by mean length");
  Some(ColumnResolution::LongestText { column, mean_length })
}

fn rendered_length(value: &CellValue) -> usize {
  if value.is_empty() {
    MISSING_CELL_LENGTH
  } else {
    value.to_string().chars().count()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn resolve(csv: &str) -> ColumnResolution {
    let dataset = TabularDataset::from_csv_str(csv).unwrap();
    resolve_text_column(&dataset).unwrap()
  }

  #[test]
  fn test_hint_match_is_case_insensitive_substring() {
    let resolution = resolve("id,Workshop_Feedback,rating\n1,Great,5\n");
    assert_eq!(
      resolution,
      ColumnResolution::ExactHint { column: "Workshop_Feedback".into(), hint: "feedback".into() }
    );
  }

  #[test]
  fn test_first_hinted_column_in_column_order_wins() {
    let resolution = resolve("user_message,review\nhi,fine\n");
    assert_eq!(resolution.column(), "user_message");
    assert_eq!(
      resolution,
      ColumnResolution::ExactHint { column: "user_message".into(), hint: "message".into() }
    );
  }

  #[test]
  fn test_longest_mean_text() {
    let resolution = resolve("a,b,c\nabcde,aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa,xyz\n");
    assert_eq!(resolution.column(), "b");
    assert_eq!(resolution.strategy(), "longest_text");
    match resolution {
      ColumnResolution::LongestText { mean_length, .. } => assert_eq!(mean_length, 40.0),
      other => panic!("unexpected resolution: {other:?}"),
    }
  }

  #[test]
  fn test_missing_cells_count_as_nan_length() {
    // b: ("" -> 3, "" -> 3, "x" -> 1) / 3 beats a: ("ab", "ab", "ab") / 3
    let resolution = resolve("a,b\nab,\nab,\nab,x\n");
    assert_eq!(resolution.column(), "b");
    match resolution {
      ColumnResolution::LongestText { mean_length, .. } => assert_eq!(mean_length, 7.0 / 3.0),
      other => panic!("unexpected resolution: {other:?}"),
    }
  }

  #[test]
  fn test_longest_text_tie_keeps_first() {
    assert_eq!(resolve("a,b\nxx,yy\n").column(), "a");
  }

  #[test]
  fn test_numeric_columns_are_not_text() {
    assert_eq!(resolve("score,name\n123456789,al\n").column(), "name");
  }

  #[test]
  fn test_first_column_fallback() {
    let resolution = resolve("x,y\n1,2\n");
    assert_eq!(resolution, ColumnResolution::FirstColumn { column: "x".into() });
  }

  #[test]
  fn test_no_columns() {
    assert_eq!(resolve_text_column(&TabularDataset::default()), None);
  }

  #[test]
  fn test_resolution_serializes_with_strategy_tag() {
    let json = serde_json::to_value(ColumnResolution::FirstColumn { column: "x".into() }).unwrap();
    assert_eq!(json, serde_json::json!({ "strategy": "first_column", "column": "x" }));
  }
}
