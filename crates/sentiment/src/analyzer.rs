//! Dataset analyzer
//!
//! Runs all three classifiers over every row of a dataset and keeps the
//! remaining columns alongside each result.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::{debug, info};

#[cfg(feature = "schemars")]
use schemars::{gen::SchemaGenerator, schema::Schema, JsonSchema};

use crate::columns::{resolve_text_column, ColumnResolution};
use crate::dataset::{CellValue, TabularDataset};
use crate::error::{AnalysisError, Result};
use crate::keyword::{KeywordClassifier, KeywordScore};
use crate::lexicon::{LexiconClassifier, LexiconScore};
use crate::valence::{ValenceClassifier, ValenceScore};

/// Prefix that namespaces sidecar columns in flat exports
pub const SIDECAR_PREFIX: &str = "original_";

/// The non-text columns of one source row, in source column order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnSidecar {
  entries: Vec<(String, CellValue)>,
}

impl ColumnSidecar {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, column: impl Into<String>, value: CellValue) {
    self.entries.push((column.into(), value));
  }

  pub fn get(&self, column: &str) -> Option<&CellValue> {
    self.entries.iter().find(|(name, _)| name == column).map(|(_, value)| value)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
    self.entries.iter().map(|(name, value)| (name.as_str(), value))
  }

  /// Column names with [`SIDECAR_PREFIX`] applied
  pub fn prefixed_names(&self) -> impl Iterator<Item = String> + '_ {
    self.entries.iter().map(|(name, _)| format!("{SIDECAR_PREFIX}{name}"))
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl Serialize for ColumnSidecar {
  fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.entries.len()))?;
    for (name, value) in &self.entries {
      map.serialize_entry(name, value)?;
    }
    map.end()
  }
}

#[cfg(feature = "schemars")]
impl JsonSchema for ColumnSidecar {
  fn schema_name() -> String {
    "ColumnSidecar".to_string()
  }

  fn json_schema(gen: &mut SchemaGenerator) -> Schema {
    <std::collections::BTreeMap<String, CellValue>>::json_schema(gen)
  }
}

/// One analyzed source row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct AnalyzedRecord {
  /// Zero-based position of the row in the source dataset
  pub original_index: usize,
  pub feedback_text: String,
  pub lexicon: LexiconScore,
  pub valence: ValenceScore,
  pub keyword: KeywordScore,
  pub original: ColumnSidecar,
}

/// The three classifier results for one text
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct TextAnalysis {
  pub lexicon: LexiconScore,
  pub valence: ValenceScore,
  pub keyword: KeywordScore,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct DatasetAnalysis {
  pub text_column: String,
  pub resolution: ColumnResolution,
  pub records: Vec<AnalyzedRecord>,
}

pub struct DatasetAnalyzer {
  lexicon: LexiconClassifier,
  valence: ValenceClassifier,
  keyword: KeywordClassifier,
}

impl Default for DatasetAnalyzer {
  fn default() -> Self {
    Self::new()
  }
}

impl DatasetAnalyzer {
  /// Analyzer with the bundled lexicons
  pub fn new() -> Self {
    Self::with_classifiers(LexiconClassifier::new(), ValenceClassifier::new(), KeywordClassifier::new())
  }

  pub fn with_classifiers(
    lexicon: LexiconClassifier,
    valence: ValenceClassifier,
    keyword: KeywordClassifier,
  ) -> Self {
    Self { lexicon, valence, keyword }
  }

  pub fn analyze_text(&self, text: &str) -> TextAnalysis {
    TextAnalysis {
      lexicon: self.lexicon.classify(text),
      valence: self.valence.classify(text),
      keyword: self.keyword.classify(text),
    }
  }

  pub fn analyze(&self, dataset: &TabularDataset) -> Result<DatasetAnalysis> {
    if dataset.is_empty() {
      return Err(AnalysisError::EmptyDataset);
    }

    let resolution = resolve_text_column(dataset).ok_or(AnalysisError::EmptyDataset)?;
    let text_index = dataset
      .column_index(resolution.column())
      .ok_or_else(|| AnalysisError::missing_text_column(resolution.column()))?;

    info!(
      rows = dataset.len(),
      column = resolution.column(),
      strategy = resolution.strategy(),
      "Analyzing dataset"
    );

    let columns = dataset.columns();
    let records: Vec<AnalyzedRecord> = dataset
      .rows()
      .enumerate()
      .map(|(original_index, row)| {
        let feedback_text = row[text_index].to_string();
        let TextAnalysis { lexicon, valence, keyword } = self.analyze_text(&feedback_text);

        let mut original = ColumnSidecar::new();
        for (index, (column, value)) in columns.iter().zip(row).enumerate() {
          if index != text_index {
            original.push(column.name.clone(), value.clone());
          }
        }

        debug!(row = original_index, label = %lexicon.label, "Row analyzed");
        AnalyzedRecord { original_index, feedback_text, lexicon, valence, keyword, original }
      })
      .collect();

    info!(rows = records.len(), "Dataset analysis complete");

    Ok(DatasetAnalysis { text_column: resolution.column().to_string(), resolution, records })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::label::SentimentLabel;
  use crate::lexicon::{MockPolarityModel, PolarityScores};

  fn sample() -> TabularDataset {
    TabularDataset::from_csv_str(
      "id,comment,rating\n1,Excellent and very helpful,5\n2,Terrible and boring,1\n3,It was on Monday,3\n",
    )
    .unwrap()
  }

  #[test]
  fn test_one_record_per_row_in_order() {
    let analysis = DatasetAnalyzer::new().analyze(&sample()).unwrap();

    assert_eq!(analysis.text_column, "comment");
    assert_eq!(analysis.records.len(), 3);
    let indexes: Vec<usize> = analysis.records.iter().map(|r| r.original_index).collect();
    assert_eq!(indexes, vec![0, 1, 2]);
    assert_eq!(analysis.records[1].feedback_text, "Terrible and boring");
    assert_eq!(analysis.records[0].lexicon.label, SentimentLabel::Positive);
    assert_eq!(analysis.records[1].lexicon.label, SentimentLabel::Negative);
  }

  #[test]
  fn test_sidecar_keeps_other_columns_in_order() {
    let analysis = DatasetAnalyzer::new().analyze(&sample()).unwrap();
    let sidecar = &analysis.records[0].original;

    let names: Vec<&str> = sidecar.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["id", "rating"]);
    assert_eq!(sidecar.get("rating"), Some(&CellValue::Integer(5)));
    assert_eq!(sidecar.get("comment"), None);

    let prefixed: Vec<String> = sidecar.prefixed_names().collect();
    assert_eq!(prefixed, vec!["original_id", "original_rating"]);
  }

  #[test]
  fn test_sidecar_serializes_as_ordered_map() {
    let mut sidecar = ColumnSidecar::new();
    sidecar.push("zeta", CellValue::Integer(1));
    sidecar.push("alpha", CellValue::Empty);
    assert_eq!(serde_json::to_string(&sidecar).unwrap(), r#"{"zeta":1,"alpha":null}"#);
  }

  #[test]
  fn test_empty_dataset() {
    let dataset = TabularDataset::from_csv_str("feedback\n").unwrap();
    let err = DatasetAnalyzer::new().analyze(&dataset).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyDataset));
  }

  #[test]
  fn test_non_text_cells_are_stringified() {
    let dataset = TabularDataset::from_csv_str("feedback\n4.0\n\"\"\n").unwrap();
    let analysis = DatasetAnalyzer::new().analyze(&dataset).unwrap();
    assert_eq!(analysis.records[0].feedback_text, "4.0");
    assert_eq!(analysis.records[1].feedback_text, "");
    assert_eq!(analysis.records[1].keyword.confidence, 0.5);
  }

  #[test]
  fn test_custom_polarity_model_is_used() {
    let mut model = MockPolarityModel::new();
    model
      .expect_score()
      .times(3)
      .returning(|_| PolarityScores { polarity: -0.9, subjectivity: 0.2 });

    let analyzer = DatasetAnalyzer::with_classifiers(
      LexiconClassifier::with_model(model),
      ValenceClassifier::new(),
      KeywordClassifier::new(),
    );
    let analysis = analyzer.analyze(&sample()).unwrap();
    assert!(analysis.records.iter().all(|r| r.lexicon.label == SentimentLabel::Negative));
  }

  #[test]
  fn test_analysis_is_deterministic() {
    let analyzer = DatasetAnalyzer::new();
    let dataset = sample();
    assert_eq!(analyzer.analyze(&dataset).unwrap(), analyzer.analyze(&dataset).unwrap());
  }
}
