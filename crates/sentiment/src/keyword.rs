//! Keyword heuristic classifier
//!
//! Counts hits against two closed vocabularies of workshop feedback words.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

#[cfg(feature = "schemars")]
use schemars::JsonSchema;

use crate::label::SentimentLabel;
use crate::tokens::word_tokens;

pub const POSITIVE_KEYWORDS: [&str; 25] = [
  "excellent",
  "outstanding",
  "fantastic",
  "amazing",
  "brilliant",
  "superb",
  "great",
  "good",
  "helpful",
  "valuable",
  "useful",
  "informative",
  "engaging",
  "comprehensive",
  "thorough",
  "clear",
  "practical",
  "relevant",
  "effective",
  "perfect",
  "wonderful",
  "inspiring",
  "loved",
  "incredible",
  "awesome",
];

pub const NEGATIVE_KEYWORDS: [&str; 23] = [
  "terrible",
  "awful",
  "poor",
  "bad",
  "disappointing",
  "boring",
  "unclear",
  "confusing",
  "useless",
  "waste",
  "frustrating",
  "unprepared",
  "disorganized",
  "outdated",
  "irrelevant",
  "superficial",
  "rushed",
  "monotonous",
  "hate",
  "horrible",
  "worst",
  "failed",
  "disaster",
];

const TIE_CONFIDENCE: f64 = 0.5;
const MAX_CONFIDENCE: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct KeywordScore {
  pub label: SentimentLabel,
  /// 0.5 on a tie, otherwise up to 0.9
  pub confidence: f64,
  pub positive_hits: usize,
  pub negative_hits: usize,
}

impl KeywordScore {
  fn tie(positive_hits: usize, negative_hits: usize) -> Self {
    Self { label: SentimentLabel::Neutral, confidence: TIE_CONFIDENCE, positive_hits, negative_hits }
  }
}

#[derive(Debug, Clone)]
pub struct KeywordClassifier {
  positive: HashSet<&'static str>,
  negative: HashSet<&'static str>,
}

impl Default for KeywordClassifier {
  fn default() -> Self {
    Self::new()
  }
}

impl KeywordClassifier {
  pub fn new() -> Self {
    Self {
      positive: POSITIVE_KEYWORDS.into_iter().collect(),
      negative: NEGATIVE_KEYWORDS.into_iter().collect(),
    }
  }

  pub fn classify(&self, text: &str) -> KeywordScore {
    let tokens = word_tokens(text);
    if tokens.is_empty() {
      return KeywordScore::tie(0, 0);
    }

    let positive_hits = tokens.iter().filter(|t| self.positive.contains(t.as_str())).count();
    let negative_hits = tokens.iter().filter(|t| self.negative.contains(t.as_str())).count();

    let label = match positive_hits.cmp(&negative_hits) {
      std::cmp::Ordering::Greater => SentimentLabel::Positive,
      std::cmp::Ordering::Less => SentimentLabel::Negative,
      std::cmp::Ordering::Equal => return KeywordScore::tie(positive_hits, negative_hits),
    };

    let margin = positive_hits.abs_diff(negative_hits) as f64;
    let confidence = (TIE_CONFIDENCE + margin / tokens.len() as f64).min(MAX_CONFIDENCE);

    KeywordScore { label, confidence, positive_hits, negative_hits }
  }
}
