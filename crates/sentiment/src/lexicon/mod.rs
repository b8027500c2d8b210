//! Lexicon classifier
//!
//! Labels text from a polarity/subjectivity opinion lexicon. The scoring
//! model sits behind [`PolarityModel`] so another lexicon can be swapped in
//! without touching the labelling policy.
//!
//! The bundled lexicon is a curated subset of about 150 words aimed at
//! workshop and course feedback. Words outside it score 0.0, so text built
//! only from unlisted opinion words labels Neutral. Plug a full lexicon in
//! through [`LexiconClassifier::with_model`] for general-purpose text.

mod data;
mod pattern;

use serde::{Deserialize, Serialize};

#[cfg(feature = "schemars")]
use schemars::JsonSchema;

use crate::label::SentimentLabel;

pub use pattern::PatternLexicon;

/// Polarity above this is Positive, below its negation Negative
pub const POLARITY_THRESHOLD: f64 = 0.1;

/// Raw output of a polarity model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarityScores {
  /// -1.0 (negative) to 1.0 (positive)
  pub polarity: f64,
  /// 0.0 (objective) to 1.0 (subjective)
  pub subjectivity: f64,
}

/// General-purpose opinion lexicon scoring
#[cfg_attr(test, mockall::automock)]
pub trait PolarityModel: Send + Sync {
  fn score(&self, text: &str) -> PolarityScores;
}

/// Lexicon classifier result for one text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct LexiconScore {
  pub label: SentimentLabel,
  pub polarity: f64,
  pub subjectivity: f64,
}

impl LexiconScore {
  pub fn neutral() -> Self {
    Self { label: SentimentLabel::Neutral, polarity: 0.0, subjectivity: 0.0 }
  }
}

/// Map a polarity to a label. Both boundaries are exclusive.
pub fn label_for_polarity(polarity: f64) -> SentimentLabel {
  if polarity > POLARITY_THRESHOLD {
    SentimentLabel::Positive
  } else if polarity < -POLARITY_THRESHOLD {
    SentimentLabel::Negative
  } else {
    SentimentLabel::Neutral
  }
}

pub struct LexiconClassifier {
  model: Box<dyn PolarityModel>,
}

impl Default for LexiconClassifier {
  fn default() -> Self {
    Self::new()
  }
}

impl LexiconClassifier {
  /// Classifier backed by the bundled pattern lexicon
  pub fn new() -> Self {
    Self::with_model(PatternLexicon::new())
  }

  pub fn with_model(model: impl PolarityModel + 'static) -> Self {
    Self { model: Box::new(model) }
  }

  pub fn classify(&self, text: &str) -> LexiconScore {
    if text.trim().is_empty() {
      return LexiconScore::neutral();
    }

    let scores = self.model.score(text);
    let polarity = finite_or_zero(scores.polarity).clamp(-1.0, 1.0);
    let subjectivity = finite_or_zero(scores.subjectivity).clamp(0.0, 1.0);

    LexiconScore { label: label_for_polarity(polarity), polarity, subjectivity }
  }
}

fn finite_or_zero(value: f64) -> f64 {
  if value.is_finite() {
    value
  } else {
    0.0
  }
}
