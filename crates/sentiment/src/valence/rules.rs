//! Rule-based valence scoring
//!
//! Each token gets a lexicon valence, adjusted by preceding degree modifiers,
//! negations within three tokens, shouting in all caps, and a contrastive
//! "but". The summed valence is amplified by trailing punctuation and squashed
//! into a compound score; the per-token valences also yield the proportion of
//! text that reads positive, negative and neutral.

use std::collections::{HashMap, HashSet};

use super::data::{BOOSTERS, NEGATIONS, VALENCES};
use super::{ValenceModel, ValenceScores};
use crate::summary::round_to;
use crate::tokens::emphasis_tokens;

/// Added to a lexicon word written in caps among mixed-case text
const CAPS_INCREMENT: f64 = 0.733;
/// Multiplier for a negated valence
const NEGATION_SCALAR: f64 = -0.74;
/// Tokens before a word that a modifier or negation can sit at
const LOOKBACK: usize = 3;
/// Modifier strength by distance from the modified word
const DISTANCE_DAMPING: [f64; LOOKBACK] = [1.0, 0.95, 0.9];
const BEFORE_BUT: f64 = 0.5;
const AFTER_BUT: f64 = 1.5;
const EXCLAMATION_STEP: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_STEP: f64 = 0.18;
const QUESTION_CAP: f64 = 0.96;
/// Normalization constant: compound = sum / sqrt(sum^2 + ALPHA)
const ALPHA: f64 = 15.0;

#[derive(Debug, Clone)]
pub struct ValenceLexicon {
  valences: HashMap<&'static str, f64>,
  boosters: HashMap<&'static str, f64>,
  negations: HashSet<&'static str>,
}

impl Default for ValenceLexicon {
  fn default() -> Self {
    Self::new()
  }
}

impl ValenceLexicon {
  pub fn new() -> Self {
    Self {
      valences: VALENCES.iter().copied().collect(),
      boosters: BOOSTERS.iter().copied().collect(),
      negations: NEGATIONS.iter().copied().collect(),
    }
  }

  fn is_negation(&self, lower: &str) -> bool {
    self.negations.contains(lower) || lower.contains("n't")
  }

  /// Strength a preceding modifier adds to `valence`
  fn booster_scalar(&self, token: &str, valence: f64, caps_differ: bool) -> f64 {
    let lower = token.to_lowercase();
    let Some(&base) = self.boosters.get(lower.as_str()) else {
      return 0.0;
    };

    let mut scalar = if valence < 0.0 { -base } else { base };
    if caps_differ && is_shouted(token) {
      scalar += if valence > 0.0 { CAPS_INCREMENT } else { -CAPS_INCREMENT };
    }
    scalar
  }

  fn token_valence(&self, tokens: &[String], index: usize, caps_differ: bool) -> f64 {
    let token = &tokens[index];
    let lower = token.to_lowercase();

    if self.boosters.contains_key(lower.as_str()) {
      return 0.0;
    }
    let Some(&base) = self.valences.get(lower.as_str()) else {
      return 0.0;
    };

    let mut valence = base;
    if caps_differ && is_shouted(token) {
      valence += if valence > 0.0 { CAPS_INCREMENT } else { -CAPS_INCREMENT };
    }

    for distance in 0..LOOKBACK {
      if index <= distance {
        break;
      }
      let previous = &tokens[index - distance - 1];
      let previous_lower = previous.to_lowercase();
      if self.valences.contains_key(previous_lower.as_str()) {
        continue;
      }

      valence += self.booster_scalar(previous, valence, caps_differ) * DISTANCE_DAMPING[distance];
      if self.is_negation(&previous_lower) {
        valence *= NEGATION_SCALAR;
      }
    }

    valence
  }

  fn apply_but(tokens: &[String], sentiments: &mut [f64]) {
    let Some(pivot) = tokens.iter().position(|t| t.eq_ignore_ascii_case("but")) else {
      return;
    };

    for (index, sentiment) in sentiments.iter_mut().enumerate() {
      if index < pivot {
        *sentiment *= BEFORE_BUT;
      } else if index > pivot {
        *sentiment *= AFTER_BUT;
      }
    }
  }
}

/// Caps emphasis only counts when some tokens are shouted and others are not
fn caps_differ(tokens: &[String]) -> bool {
  let shouted = tokens.iter().filter(|t| is_shouted(t)).count();
  shouted > 0 && shouted < tokens.len()
}

fn is_shouted(token: &str) -> bool {
  token.chars().any(char::is_alphabetic) && !token.chars().any(char::is_lowercase)
}

fn punctuation_emphasis(text: &str) -> f64 {
  let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
  let questions = text.matches('?').count();

  let question_emphasis = match questions {
    0 | 1 => 0.0,
    2 | 3 => questions as f64 * QUESTION_STEP,
    _ => QUESTION_CAP,
  };

  exclamations as f64 * EXCLAMATION_STEP + question_emphasis
}

fn normalize(sum: f64) -> f64 {
  (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

impl ValenceModel for ValenceLexicon {
  fn score(&self, text: &str) -> ValenceScores {
    let tokens = emphasis_tokens(text);
    if tokens.is_empty() {
      return ValenceScores::neutral();
    }

    let caps = caps_differ(&tokens);
    let mut sentiments: Vec<f64> =
      (0..tokens.len()).map(|index| self.token_valence(&tokens, index, caps)).collect();
    Self::apply_but(&tokens, &mut sentiments);

    let emphasis = punctuation_emphasis(text);
    let sum: f64 = sentiments.iter().sum();
    let compound = if sum > 0.0 {
      normalize(sum + emphasis)
    } else if sum < 0.0 {
      normalize(sum - emphasis)
    } else {
      0.0
    };

    let mut positive_sum = 0.0;
    let mut negative_sum = 0.0;
    let mut neutral_count = 0.0;
    for &sentiment in &sentiments {
      if sentiment > 0.0 {
        positive_sum += sentiment + 1.0;
      } else if sentiment < 0.0 {
        negative_sum += sentiment - 1.0;
      } else {
        neutral_count += 1.0;
      }
    }

    if positive_sum > negative_sum.abs() {
      positive_sum += emphasis;
    } else if positive_sum < negative_sum.abs() {
      negative_sum -= emphasis;
    }

    let total = positive_sum + negative_sum.abs() + neutral_count;
    if total == 0.0 {
      return ValenceScores::neutral();
    }

    ValenceScores {
      compound: round_to(compound, 4),
      positive: round_to((positive_sum / total).abs(), 3),
      negative: round_to((negative_sum / total).abs(), 3),
      neutral: round_to((neutral_count / total).abs(), 3),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn score(text: &str) -> ValenceScores {
    ValenceLexicon::new().score(text)
  }

  #[test]
  fn test_empty_text_is_fully_neutral() {
    assert_eq!(score(""), ValenceScores::neutral());
    assert_eq!(score("  ... "), ValenceScores::neutral());
  }

  #[test]
  fn test_no_lexicon_words() {
    let scores = score("The session was on Tuesday");
    assert_eq!(scores.compound, 0.0);
    assert_eq!(scores.neutral, 1.0);
  }

  #[test]
  fn test_single_word_compound() {
    // 3.1 / sqrt(3.1^2 + 15)
    let scores = score("great");
    assert!((scores.compound - 0.6249).abs() < 1e-4);
    assert_eq!(scores.positive, 1.0);
  }

  #[test]
  fn test_booster_and_negation() {
    let plain = score("The workshop was good");
    let boosted = score("The workshop was very good");
    let negated = score("The workshop was not good");

    assert!(boosted.compound > plain.compound);
    assert!(negated.compound < 0.0);
  }

  #[test]
  fn test_contraction_negates() {
    assert!(score("It wasn't helpful").compound < 0.0);
  }

  #[test]
  fn test_caps_emphasis() {
    assert!(score("The workshop was GREAT").compound > score("The workshop was great").compound);
    // All tokens shouted: no emphasis
    assert_eq!(score("GREAT").compound, score("great").compound);
  }

  #[test]
  fn test_exclamation_emphasis() {
    assert!(score("great!!!").compound > score("great").compound);
    assert_eq!(score("great!!!!!!").compound, score("great!!!!").compound);
  }

  #[test]
  fn test_but_shifts_weight_to_second_clause() {
    let scores = score("The content was good but the pacing was terrible");
    assert!(scores.compound < 0.0);
  }

  #[test]
  fn test_proportions_sum_to_one() {
    let scores = score("Great content, terrible room, on a Tuesday");
    let sum = scores.positive + scores.negative + scores.neutral;
    assert!((sum - 1.0).abs() < 0.002);
  }
}
