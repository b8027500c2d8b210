//! Valence classifier
//!
//! Labels text from a weighted valence lexicon tuned for short, informal
//! writing. The thresholds here sit on a different scale from the lexicon
//! classifier and are inclusive.
//!
//! The bundled valence table only covers the vocabulary common in workshop
//! and course feedback, plus the boosters and negations the rules need.
//! Unlisted words carry no valence. Use [`ValenceClassifier::with_model`]
//! to score against a complete lexicon.

mod data;
mod rules;

use serde::{Deserialize, Serialize};

#[cfg(feature = "schemars")]
use schemars::JsonSchema;

use crate::label::SentimentLabel;

pub use rules::ValenceLexicon;

/// Compound at or above this is Positive, at or below its negation Negative
pub const COMPOUND_THRESHOLD: f64 = 0.05;

/// Raw output of a valence model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValenceScores {
  /// Normalized aggregate valence, -1.0 to 1.0
  pub compound: f64,
  pub positive: f64,
  pub negative: f64,
  pub neutral: f64,
}

impl ValenceScores {
  pub fn neutral() -> Self {
    Self { compound: 0.0, positive: 0.0, negative: 0.0, neutral: 1.0 }
  }
}

/// Rule-based valence scoring for informal text
#[cfg_attr(test, mockall::automock)]
pub trait ValenceModel: Send + Sync {
  fn score(&self, text: &str) -> ValenceScores;
}

/// Valence classifier result for one text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct ValenceScore {
  pub label: SentimentLabel,
  pub compound: f64,
  pub positive: f64,
  pub negative: f64,
  pub neutral: f64,
}

pub fn label_for_compound(compound: f64) -> SentimentLabel {
  if compound >= COMPOUND_THRESHOLD {
    SentimentLabel::Positive
  } else if compound <= -COMPOUND_THRESHOLD {
    SentimentLabel::Negative
  } else {
    SentimentLabel::Neutral
  }
}

pub struct ValenceClassifier {
  model: Box<dyn ValenceModel>,
}

impl Default for ValenceClassifier {
  fn default() -> Self {
    Self::new()
  }
}

impl ValenceClassifier {
  pub fn new() -> Self {
    Self::with_model(ValenceLexicon::new())
  }

  pub fn with_model(model: impl ValenceModel + 'static) -> Self {
    Self { model: Box::new(model) }
  }

  pub fn classify(&self, text: &str) -> ValenceScore {
    let scores = sanitize(self.model.score(text));

    ValenceScore {
      label: label_for_compound(scores.compound),
      compound: scores.compound,
      positive: scores.positive,
      negative: scores.negative,
      neutral: scores.neutral,
    }
  }
}

/// Clamp model output into range; anything non-finite becomes fully neutral
fn sanitize(scores: ValenceScores) -> ValenceScores {
  let values = [scores.compound, scores.positive, scores.negative, scores.neutral];
  if values.iter().any(|v| !v.is_finite()) {
    return ValenceScores::neutral();
  }

  ValenceScores {
    compound: scores.compound.clamp(-1.0, 1.0),
    positive: scores.positive.clamp(0.0, 1.0),
    negative: scores.negative.clamp(0.0, 1.0),
    neutral: scores.neutral.clamp(0.0, 1.0),
  }
}
