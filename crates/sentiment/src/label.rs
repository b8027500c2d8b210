//! Sentiment labels shared by every classifier

use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "schemars")]
use schemars::JsonSchema;

/// Three-way sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub enum SentimentLabel {
  Positive,
  Negative,
  Neutral,
}

impl SentimentLabel {
  /// Enumeration order. Dominant-sentiment ties resolve to the earliest entry.
  pub const ALL: [SentimentLabel; 3] =
    [SentimentLabel::Positive, SentimentLabel::Negative, SentimentLabel::Neutral];

  pub fn as_str(&self) -> &'static str {
    match self {
      SentimentLabel::Positive => "Positive",
      SentimentLabel::Negative => "Negative",
      SentimentLabel::Neutral => "Neutral",
    }
  }
}

impl fmt::Display for SentimentLabel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_label_display_and_serde() {
    assert_eq!(SentimentLabel::Positive.to_string(), "Positive");
    assert_eq!(serde_json::to_string(&SentimentLabel::Neutral).unwrap(), "\"Neutral\"");

    let parsed: SentimentLabel = serde_json::from_str("\"Negative\"").unwrap();
    assert_eq!(parsed, SentimentLabel::Negative);
  }

  #[test]
  fn test_enumeration_order() {
    assert_eq!(
      SentimentLabel::ALL,
      [SentimentLabel::Positive, SentimentLabel::Negative, SentimentLabel::Neutral]
    );
  }
}
