//! Downloadable exports: the insights text report and the analyzed dataset CSV

pub mod dataset;
pub mod report;

use chrono::{DateTime, TimeZone};

pub use dataset::{write_csv, DATASET_COLUMNS};
pub use report::render_report;

const FILENAME_TIMESTAMP: &str = "%Y%m%d_%H%M%S";

pub fn report_filename<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
  Tz::Offset: std::fmt::Display,
{
  format!("sentiment_analysis_insights_{}.txt", at.format(FILENAME_TIMESTAMP))
}

pub fn dataset_filename<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
  Tz::Offset: std::fmt::Display,
{
  format!("sentiment_analysis_dataset_{}.csv", at.format(FILENAME_TIMESTAMP))
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Utc;

  #[test]
  fn test_filenames() {
    let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
    assert_eq!(report_filename(&at), "sentiment_analysis_insights_20240309_140507.txt");
    assert_eq!(dataset_filename(&at), "sentiment_analysis_dataset_20240309_140507.csv");
  }
}
