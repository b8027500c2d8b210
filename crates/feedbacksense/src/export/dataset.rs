//! Analyzed dataset as CSV

use std::io::Write;

use sentiment::AnalyzedRecord;

/// Fixed leading columns; sidecar columns follow with an `original_` prefix
pub const DATASET_COLUMNS: [&str; 14] = [
  "original_index",
  "feedback_text",
  "lexicon_sentiment",
  "lexicon_polarity",
  "lexicon_subjectivity",
  "valence_sentiment",
  "valence_compound",
  "valence_positive",
  "valence_negative",
  "valence_neutral",
  "keyword_sentiment",
  "keyword_confidence",
  "keyword_positive_hits",
  "keyword_negative_hits",
];

pub fn write_csv<W: Write>(records: &[AnalyzedRecord], writer: W) -> csv::Result<()> {
  let mut out = csv::Writer::from_writer(writer);

  let mut header: Vec<String> = DATASET_COLUMNS.iter().map(|c| c.to_string()).collect();
  if let Some(first) = records.first() {
    header.extend(first.original.prefixed_names());
  }
  out.write_record(&header)?;

  for record in records {
    let mut row = vec![
      record.original_index.to_string(),
      record.feedback_text.clone(),
      record.lexicon.label.to_string(),
      record.lexicon.polarity.to_string(),
      record.lexicon.subjectivity.to_string(),
      record.valence.label.to_string(),
      record.valence.compound.to_string(),
      record.valence.positive.to_string(),
      record.valence.negative.to_string(),
      record.valence.neutral.to_string(),
      record.keyword.label.to_string(),
      record.keyword.confidence.to_string(),
      record.keyword.positive_hits.to_string(),
      record.keyword.negative_hits.to_string(),
    ];
    row.extend(record.original.iter().map(|(_, value)| value.to_string()));
    out.write_record(&row)?;
  }

  out.flush()?;
  Ok(())
}

/// Render to an in-memory CSV string
pub fn to_csv_string(records: &[AnalyzedRecord]) -> csv::Result<String> {
  let mut buffer = Vec::new();
  write_csv(records, &mut buffer)?;
  Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
  use super::*;
  use sentiment::{DatasetAnalyzer, TabularDataset};

  #[test]
  fn test_csv_layout() {
    let dataset =
      TabularDataset::from_csv_str("id,comment,track\n1,\"Excellent, truly\",A\n2,Terrible,\n").unwrap();
    let records = DatasetAnalyzer::new().analyze(&dataset).unwrap().records;

    let csv = to_csv_string(&records).unwrap();
    let mut reader = csv::Reader::from_reader(csv.as_bytes());

    let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
    assert_eq!(headers.len(), 16);
    assert_eq!(headers[0], "original_index");
    assert_eq!(&headers[14..], ["original_id", "original_track"]);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][1], "Excellent, truly");
    assert_eq!(&rows[0][2], "Positive");
    assert_eq!(&rows[1][10], "Negative");
    assert_eq!(&rows[1][15], "");
  }

  #[test]
  fn test_empty_records_write_header_only() {
    let csv = to_csv_string(&[]).unwrap();
    assert_eq!(csv.lines().count(), 1);
    assert!(csv.starts_with("original_index,feedback_text,"));
  }
}
