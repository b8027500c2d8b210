//! Aggregate statistics over analyzed records
//!
//! Only the lexicon classifier's labels and scores feed the aggregates; the
//! other two methods are kept for comparison.

use serde::{Deserialize, Serialize};

#[cfg(feature = "schemars")]
use schemars::JsonSchema;

use crate::analyzer::AnalyzedRecord;
use crate::error::{AnalysisError, Result};
use crate::label::SentimentLabel;

/// Round the exact binary value to `decimals` places, ties to even
pub fn round_to(value: f64, decimals: usize) -> f64 {
  format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Label counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct SentimentDistribution {
  pub positive: usize,
  pub negative: usize,
  pub neutral: usize,
}

impl SentimentDistribution {
  pub fn from_labels(labels: impl IntoIterator<Item = SentimentLabel>) -> Self {
    labels.into_iter().fold(Self::default(), |mut counts, label| {
      match label {
        SentimentLabel::Positive => counts.positive += 1,
        SentimentLabel::Negative => counts.negative += 1,
        SentimentLabel::Neutral => counts.neutral += 1,
      }
      counts
    })
  }

  pub fn count(&self, label: SentimentLabel) -> usize {
    match label {
      SentimentLabel::Positive => self.positive,
      SentimentLabel::Negative => self.negative,
      SentimentLabel::Neutral => self.neutral,
    }
  }

  pub fn total(&self) -> usize {
    self.positive + self.negative + self.neutral
  }

  /// Share of `label`, in percent rounded to one decimal. Zero when empty.
  pub fn percent(&self, label: SentimentLabel) -> f64 {
    let total = self.total();
    if total == 0 {
      return 0.0;
    }
    round_to(self.count(label) as f64 / total as f64 * 100.0, 1)
  }

  /// Label with the greatest count; ties go to the earliest in [`SentimentLabel::ALL`]
  pub fn dominant(&self) -> (SentimentLabel, usize) {
    SentimentLabel::ALL.iter().fold((SentimentLabel::Positive, self.positive), |best, &label| {
      let count = self.count(label);
      if count > best.1 {
        (label, count)
      } else {
        best
      }
    })
  }
}

/// Unrounded aggregates of the lexicon results
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateSentiment {
  pub distribution: SentimentDistribution,
  pub mean_polarity: f64,
  pub mean_subjectivity: f64,
}

impl AggregateSentiment {
  pub fn from_records(records: &[AnalyzedRecord]) -> Result<Self> {
    if records.is_empty() {
      return Err(AnalysisError::EmptyAnalysis);
    }

    let count = records.len() as f64;
    Ok(Self {
      distribution: SentimentDistribution::from_labels(records.iter().map(|r| r.lexicon.label)),
      mean_polarity: records.iter().map(|r| r.lexicon.polarity).sum::<f64>() / count,
      mean_subjectivity: records.iter().map(|r| r.lexicon.subjectivity).sum::<f64>() / count,
    })
  }

  pub fn total(&self) -> usize {
    self.distribution.total()
  }

  pub fn positive_pct(&self) -> f64 {
    self.distribution.percent(SentimentLabel::Positive)
  }

  pub fn negative_pct(&self) -> f64 {
    self.distribution.percent(SentimentLabel::Negative)
  }

  pub fn neutral_pct(&self) -> f64 {
    self.distribution.percent(SentimentLabel::Neutral)
  }
}

/// Presentation-ready summary: percentages to one decimal, means to three
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct SummaryStats {
  pub total: usize,
  pub positive_pct: f64,
  pub negative_pct: f64,
  pub neutral_pct: f64,
  pub mean_polarity: f64,
  pub mean_subjectivity: f64,
}

impl SummaryStats {
  pub fn from_records(records: &[AnalyzedRecord]) -> Result<Self> {
    AggregateSentiment::from_records(records).map(|aggregate| Self::from_aggregate(&aggregate))
  }

  pub fn from_aggregate(aggregate: &AggregateSentiment) -> Self {
    Self {
      total: aggregate.total(),
      positive_pct: aggregate.positive_pct(),
      negative_pct: aggregate.negative_pct(),
      neutral_pct: aggregate.neutral_pct(),
      mean_polarity: round_to(aggregate.mean_polarity, 3),
      mean_subjectivity: round_to(aggregate.mean_subjectivity, 3),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_round_to() {
    assert_eq!(round_to(66.666, 1), 66.7);
    assert_eq!(round_to(0.12345, 3), 0.123);
    assert_eq!(round_to(-0.5, 0), 0.0);
    assert_eq!(round_to(2.5, 0), 2.0);
  }

  #[test]
  fn test_percent_ties_round_to_even() {
    let one_in_sixteen = SentimentDistribution { positive: 1, negative: 0, neutral: 15 };
    assert_eq!(one_in_sixteen.percent(SentimentLabel::Positive), 6.2);
    assert_eq!(one_in_sixteen.percent(SentimentLabel::Neutral), 93.8);

    let five_in_sixteen = SentimentDistribution { positive: 5, negative: 0, neutral: 11 };
    assert_eq!(five_in_sixteen.percent(SentimentLabel::Positive), 31.2);
  }

  #[test]
  fn test_distribution_percentages() {
    let distribution = SentimentDistribution { positive: 2, negative: 1, neutral: 0 };
    assert_eq!(distribution.total(), 3);
    assert_eq!(distribution.percent(SentimentLabel::Positive), 66.7);
    assert_eq!(distribution.percent(SentimentLabel::Negative), 33.3);
    assert_eq!(distribution.percent(SentimentLabel::Neutral), 0.0);
    assert_eq!(SentimentDistribution::default().percent(SentimentLabel::Positive), 0.0);
  }

  #[test]
  fn test_dominant_tie_break_order() {
    let tie = SentimentDistribution { positive: 3, negative: 3, neutral: 3 };
    assert_eq!(tie.dominant(), (SentimentLabel::Positive, 3));

    let negative_neutral = SentimentDistribution { positive: 1, negative: 4, neutral: 4 };
    assert_eq!(negative_neutral.dominant(), (SentimentLabel::Negative, 4));

    let neutral = SentimentDistribution { positive: 0, negative: 0, neutral: 2 };
    assert_eq!(neutral.dominant(), (SentimentLabel::Neutral, 2));
  }

  #[test]
  fn test_empty_records() {
    assert!(matches!(AggregateSentiment::from_records(&[]), Err(AnalysisError::EmptyAnalysis)));
    assert!(matches!(SummaryStats::from_records(&[]), Err(AnalysisError::EmptyAnalysis)));
  }
}
