//! Tabular dataset
//!
//! Named columns with typed cells, loaded from CSV. Each column gets a kind
//! inferred from all of its non-missing values, the way a dataframe loader
//! would: a column that is entirely integers is an integer column, one that
//! mixes integers and decimals is a float column, and anything that does not
//! parse uniformly is text.

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[cfg(feature = "schemars")]
use schemars::JsonSchema;

use crate::error::{AnalysisError, Result};

/// Raw values read as missing
const MISSING_MARKERS: [&str; 7] = ["", "NA", "N/A", "NaN", "nan", "null", "NULL"];

/// One typed cell. Missing cells serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
#[serde(untagged)]
pub enum CellValue {
  Empty,
  Boolean(bool),
  Integer(i64),
  Float(f64),
  Text(String),
}

impl CellValue {
  pub fn is_empty(&self) -> bool {
    matches!(self, CellValue::Empty)
  }

  fn parse(raw: &str, kind: ColumnKind) -> Self {
    if is_missing(raw) {
      return CellValue::Empty;
    }

    let parsed = match kind {
      ColumnKind::Integer => raw.trim().parse().ok().map(CellValue::Integer),
      ColumnKind::Float => raw.trim().parse().ok().map(CellValue::Float),
      ColumnKind::Boolean => parse_bool(raw).map(CellValue::Boolean),
      ColumnKind::Text | ColumnKind::Empty => None,
    };

    parsed.unwrap_or_else(|| CellValue::Text(raw.to_string()))
  }
}

impl fmt::Display for CellValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CellValue::Empty => Ok(()),
      CellValue::Boolean(value) => write!(f, "{value}"),
      CellValue::Integer(value) => write!(f, "{value}"),
      CellValue::Float(value) if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 => {
        write!(f, "{value:.1}")
      }
      CellValue::Float(value) => write!(f, "{value}"),
      CellValue::Text(value) => f.write_str(value),
    }
  }
}

impl From<&str> for CellValue {
  fn from(value: &str) -> Self {
    CellValue::Text(value.to_string())
  }
}

impl From<String> for CellValue {
  fn from(value: String) -> Self {
    CellValue::Text(value)
  }
}

impl From<i64> for CellValue {
  fn from(value: i64) -> Self {
    CellValue::Integer(value)
  }
}

impl From<f64> for CellValue {
  fn from(value: f64) -> Self {
    CellValue::Float(value)
  }
}

impl From<bool> for CellValue {
  fn from(value: bool) -> Self {
    CellValue::Boolean(value)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
  /// No non-missing values at all
  Empty,
  Boolean,
  Integer,
  Float,
  Text,
}

impl ColumnKind {
  /// Infer the kind of a column from its raw CSV strings
  fn infer_raw<'a>(values: impl Iterator<Item = &'a str>) -> Self {
    let present: Vec<&str> = values.filter(|v| !is_missing(v)).collect();
    if present.is_empty() {
      ColumnKind::Empty
    } else if present.iter().all(|v| v.trim().parse::<i64>().is_ok()) {
      ColumnKind::Integer
    } else if present.iter().all(|v| v.trim().parse::<f64>().is_ok()) {
      ColumnKind::Float
    } else if present.iter().all(|v| parse_bool(v).is_some()) {
      ColumnKind::Boolean
    } else {
      ColumnKind::Text
    }
  }

  /// Infer the kind of a column from already typed cells
  fn infer_cells(values: &[CellValue]) -> Self {
    let mut kind = ColumnKind::Empty;
    for value in values {
      let cell_kind = match value {
        CellValue::Empty => continue,
        CellValue::Boolean(_) => ColumnKind::Boolean,
        CellValue::Integer(_) => ColumnKind::Integer,
        CellValue::Float(_) => ColumnKind::Float,
        CellValue::Text(_) => ColumnKind::Text,
      };

      kind = match (kind, cell_kind) {
        (ColumnKind::Empty, next) => next,
        (current, next) if current == next => current,
        (ColumnKind::Integer, ColumnKind::Float) | (ColumnKind::Float, ColumnKind::Integer) => {
          ColumnKind::Float
        }
        _ => ColumnKind::Text,
      };
    }
    kind
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct Column {
  pub name: String,
  pub kind: ColumnKind,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabularDataset {
  columns: Vec<Column>,
  rows: Vec<Vec<CellValue>>,
}

impl TabularDataset {
  /// Build from a header row and raw string records.
  ///
  /// Every record must have exactly one value per header; line numbers in
  /// errors count the header as line 1.
  pub fn from_raw(headers: Vec<String>, records: Vec<Vec<String>>) -> Result<Self> {
    for (index, record) in records.iter().enumerate() {
      if record.len() != headers.len() {
        return Err(AnalysisError::malformed_row(
          index as u64 + 2,
          format!("expected {} fields, found {}", headers.len(), record.len()),
        ));
      }
    }

    let names = unique_headers(headers);
    let columns: Vec<Column> = names
      .into_iter()
      .enumerate()
      .map(|(index, name)| {
        let kind = ColumnKind::infer_raw(records.iter().map(|r| r[index].as_str()));
        Column { name, kind }
      })
      .collect();

    let rows = records
      .iter()
      .map(|record| {
        record.iter().zip(&columns).map(|(raw, column)| CellValue::parse(raw, column.kind)).collect()
      })
      .collect();

    Ok(Self { columns, rows })
  }

  pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).flexible(false).from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut records = Vec::new();
    for result in reader.records() {
      let record = result.map_err(framing_error)?;
      records.push(record.iter().map(str::to_string).collect());
    }

    Self::from_raw(headers, records)
  }

  pub fn from_csv_str(content: &str) -> Result<Self> {
    Self::from_csv_reader(content.as_bytes())
  }

  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let file = File::open(path.as_ref())?;
    Self::from_csv_reader(file)
  }

  /// Build from typed columns of equal length
  pub fn from_columns(columns: Vec<(String, Vec<CellValue>)>) -> Result<Self> {
    let height = columns.first().map(|(_, values)| values.len()).unwrap_or(0);
    if let Some((name, values)) = columns.iter().find(|(_, values)| values.len() != height) {
      return Err(AnalysisError::malformed_row(
        0,
        format!("column '{name}' has {} values, expected {height}", values.len()),
      ));
    }

    let (names, values): (Vec<String>, Vec<Vec<CellValue>>) = columns.into_iter().unzip();
    let columns = unique_headers(names)
      .into_iter()
      .zip(&values)
      .map(|(name, cells)| Column { name, kind: ColumnKind::infer_cells(cells) })
      .collect();

    let rows = (0..height).map(|row| values.iter().map(|cells| cells[row].clone()).collect()).collect();

    Ok(Self { columns, rows })
  }

  pub fn columns(&self) -> &[Column] {
    &self.columns
  }

  pub fn column_names(&self) -> impl Iterator<Item = &str> {
    self.columns.iter().map(|c| c.name.as_str())
  }

  pub fn column_index(&self, name: &str) -> Option<usize> {
    self.columns.iter().position(|c| c.name == name)
  }

  /// Number of rows
  pub fn len(&self) -> usize {
    self.rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  /// Rows in their original order
  pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
    self.rows.iter().map(Vec::as_slice)
  }

  pub fn column_values(&self, index: usize) -> impl Iterator<Item = &CellValue> {
    self.rows.iter().filter_map(move |row| row.get(index))
  }
}

fn is_missing(raw: &str) -> bool {
  MISSING_MARKERS.contains(&raw.trim())
}

fn parse_bool(raw: &str) -> Option<bool> {
  match raw.trim().to_ascii_lowercase().as_str() {
    "true" => Some(true),
    "false" => Some(false),
    _ => None,
  }
}

/// Blank headers become `Unnamed: <i>`; repeats get a `.<n>` suffix
fn unique_headers(headers: Vec<String>) -> Vec<String> {
  let mut seen: HashMap<String, usize> = HashMap::new();
  headers
    .into_iter()
    .enumerate()
    .map(|(index, header)| {
      let base = if header.trim().is_empty() { format!("Unnamed: {index}") } else { header };
      let count = seen.entry(base.clone()).or_insert(0);
      let name = if *count == 0 { base } else { format!("{base}.{count}") };
      *count += 1;
      name
    })
    .collect()
}

fn framing_error(error: csv::Error) -> AnalysisError {
  if let csv::ErrorKind::UnequalLengths { pos, expected_len, len } = error.kind() {
    let line = pos.as_ref().map(|p| p.line()).unwrap_or(0);
    return AnalysisError::malformed_row(line, format!("expected {expected_len} fields, found {len}"));
  }
  AnalysisError::Csv(error)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  #[test]
  fn test_kind_inference() {
    let dataset = TabularDataset::from_csv_str(
      "id,score,passed,comment,blank\n1,4.5,true,Great,\n2,3,False,Meh,NA\n",
    )
    .unwrap();

    let kinds: Vec<ColumnKind> = dataset.columns().iter().map(|c| c.kind).collect();
    assert_eq!(
      kinds,
      vec![ColumnKind::Integer, ColumnKind::Float, ColumnKind::Boolean, ColumnKind::Text, ColumnKind::Empty]
    );

    let first: Vec<CellValue> = dataset.rows().next().unwrap().to_vec();
    assert_eq!(first[0], CellValue::Integer(1));
    assert_eq!(first[1], CellValue::Float(4.5));
    assert_eq!(first[2], CellValue::Boolean(true));
    assert_eq!(first[3], CellValue::Text("Great".into()));
    assert_eq!(first[4], CellValue::Empty);
  }

  #[test]
  fn test_missing_cells_in_text_column() {
    let dataset = TabularDataset::from_csv_str("comment\nhello\n\"\"\nworld\n").unwrap();
    let values: Vec<String> = dataset.column_values(0).map(|v| v.to_string()).collect();
    assert_eq!(values, vec!["hello", "", "world"]);
    assert_eq!(dataset.columns()[0].kind, ColumnKind::Text);
  }

  #[test]
  fn test_display_coercion() {
    assert_eq!(CellValue::Float(3.0).to_string(), "3.0");
    assert_eq!(CellValue::Float(2.25).to_string(), "2.25");
    assert_eq!(CellValue::Integer(-7).to_string(), "-7");
    assert_eq!(CellValue::Boolean(false).to_string(), "false");
    assert_eq!(CellValue::Empty.to_string(), "");
  }

  #[test]
  fn test_ragged_row_is_malformed() {
    let err = TabularDataset::from_csv_str("a,b\n1,2\n3\n").unwrap_err();
    assert!(matches!(err, AnalysisError::MalformedRow { .. }));
    assert_eq!(err.key(), "malformed_row");
  }

  #[test]
  fn test_header_only_is_empty() {
    let dataset = TabularDataset::from_csv_str("feedback,rating\n").unwrap();
    assert!(dataset.is_empty());
    assert_eq!(dataset.columns().len(), 2);
    assert_eq!(dataset.columns()[0].kind, ColumnKind::Empty);
  }

  #[test]
  fn test_duplicate_and_blank_headers() {
    let dataset = TabularDataset::from_csv_str("note,note,\nx,y,z\n").unwrap();
    let names: Vec<&str> = dataset.column_names().collect();
    assert_eq!(names, vec!["note", "note.1", "Unnamed: 2"]);
  }

  #[test]
  fn test_from_columns() {
    let dataset = TabularDataset::from_columns(vec![
      ("text".to_string(), vec!["a".into(), "b".into()]),
      ("n".to_string(), vec![1i64.into(), 2.5f64.into()]),
    ])
    .unwrap();
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.columns()[1].kind, ColumnKind::Float);

    let ragged = TabularDataset::from_columns(vec![
      ("a".to_string(), vec!["x".into()]),
      ("b".to_string(), vec![]),
    ]);
    assert!(matches!(ragged, Err(AnalysisError::MalformedRow { .. })));
  }

  #[test]
  fn test_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "feedback\nLoved it").unwrap();

    let dataset = TabularDataset::from_path(file.path()).unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.column_index("feedback"), Some(0));

    let missing = TabularDataset::from_path("/definitely/not/here.csv");
    assert!(matches!(missing, Err(AnalysisError::Io(_))));
  }

  #[test]
  fn test_cell_serde() {
    let json = serde_json::to_string(&vec![CellValue::Empty, CellValue::Integer(2), "x".into()]).unwrap();
    assert_eq!(json, "[null,2,\"x\"]");
  }
}
