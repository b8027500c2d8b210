//! Chart-ready data series
//!
//! Rendering lives with the consumer; this module only computes the series
//! each chart needs from the analyzed records.

use std::collections::{BTreeMap, HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use sentiment::summary::round_to;
use sentiment::{AnalyzedRecord, SentimentDistribution, SentimentLabel};

use crate::config::ChartSettings;

static ASCII_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-zA-Z]+\b").expect("word pattern compiles"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChartData {
  /// Lexicon label counts
  pub sentiment_distribution: SentimentDistribution,
  /// Positive share per value of the first extra column, when it has few values
  pub category_breakdown: Option<CategoryBreakdown>,
  pub polarity_histogram: Vec<HistogramBin>,
  pub word_frequency: Vec<WordCount>,
  pub method_comparison: MethodComparison,
  pub scatter: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryBreakdown {
  pub column: String,
  pub categories: Vec<CategoryShare>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryShare {
  pub category: String,
  pub total: usize,
  pub positive_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HistogramBin {
  pub start: f64,
  pub end: f64,
  pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordCount {
  pub word: String,
  pub count: usize,
}

/// Label counts per classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MethodComparison {
  pub lexicon: SentimentDistribution,
  pub valence: SentimentDistribution,
  pub keyword: SentimentDistribution,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScatterPoint {
  pub polarity: f64,
  pub subjectivity: f64,
}

impl ChartData {
  pub fn build(records: &[AnalyzedRecord], settings: &ChartSettings) -> Self {
    Self {
      sentiment_distribution: SentimentDistribution::from_labels(records.iter().map(|r| r.lexicon.label)),
      category_breakdown: category_breakdown(records, settings.max_categories),
      polarity_histogram: polarity_histogram(records, settings.histogram_bins),
      word_frequency: word_frequency(records, settings),
      method_comparison: MethodComparison {
        lexicon: SentimentDistribution::from_labels(records.iter().map(|r| r.lexicon.label)),
        valence: SentimentDistribution::from_labels(records.iter().map(|r| r.valence.label)),
        keyword: SentimentDistribution::from_labels(records.iter().map(|r| r.keyword.label)),
      },
      scatter: records
        .iter()
        .map(|r| ScatterPoint { polarity: r.lexicon.polarity, subjectivity: r.lexicon.subjectivity })
        .collect(),
    }
  }
}

fn category_breakdown(records: &[AnalyzedRecord], max_categories: usize) -> Option<CategoryBreakdown> {
  let column = records.first()?.original.iter().next()?.0.to_string();

  let mut counts: BTreeMap<String, (usize, usize)> = BTreeMap::new();
  for record in records {
    let Some(value) = record.original.get(&column).filter(|v| !v.is_empty()) else {
      continue;
    };

    let entry = counts.entry(value.to_string()).or_default();
    entry.0 += 1;
    if record.lexicon.label == SentimentLabel::Positive {
      entry.1 += 1;
    }
  }

  if counts.is_empty() || counts.len() > max_categories {
    return None;
  }

  let categories = counts
    .into_iter()
    .map(|(category, (total, positive))| CategoryShare {
      category,
      total,
      positive_pct: round_to(positive as f64 / total as f64 * 100.0, 1),
    })
    .collect();

  Some(CategoryBreakdown { column, categories })
}

/// Equal-width bins over the polarity range; the last bin includes its end
fn polarity_histogram(records: &[AnalyzedRecord], bins: usize) -> Vec<HistogramBin> {
  if records.is_empty() || bins == 0 {
    return Vec::new();
  }

  let polarities: Vec<f64> = records.iter().map(|r| r.lexicon.polarity).collect();
  let mut low = polarities.iter().copied().fold(f64::INFINITY, f64::min);
  let mut high = polarities.iter().copied().fold(f64::NEG_INFINITY, f64::max);
  if low == high {
    low -= 0.5;
    high += 0.5;
  }

  let width = (high - low) / bins as f64;
  let mut histogram: Vec<HistogramBin> = (0..bins)
    .map(|i| HistogramBin { start: low + width * i as f64, end: low + width * (i + 1) as f64, count: 0 })
    .collect();

  for polarity in polarities {
    let index = (((polarity - low) / width) as usize).min(bins - 1);
    histogram[index].count += 1;
  }

  histogram
}

/// Most frequent words, ties broken by first appearance
fn word_frequency(records: &[AnalyzedRecord], settings: &ChartSettings) -> Vec<WordCount> {
  let stop_words: HashSet<&str> = settings.stop_words.iter().map(String::as_str).collect();
  let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
  let mut position = 0usize;

  for record in records {
    let lower = record.feedback_text.to_lowercase();
    for word in ASCII_WORD.find_iter(&lower).map(|m| m.as_str()) {
      if word.len() < settings.min_word_length || stop_words.contains(word) {
        continue;
      }
      counts.entry(word.to_string()).or_insert((0, position)).0 += 1;
      position += 1;
    }
  }

  let mut ranked: Vec<(String, usize, usize)> =
    counts.into_iter().map(|(word, (count, first))| (word, count, first)).collect();
  ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

  ranked.into_iter().take(settings.top_words).map(|(word, count, _)| WordCount { word, count }).collect()
}
