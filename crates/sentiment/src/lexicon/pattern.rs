//! Pattern-style opinion lexicon
//!
//! Every lexicon word carries a polarity and a subjectivity. Intensifiers
//! scale the next lexicon word, negations flip and dampen it, and the text
//! score is the mean over all assessed words.

use std::collections::{HashMap, HashSet};

use super::data::{INTENSIFIERS, NEGATIONS, OPINION_WORDS};
use super::{PolarityModel, PolarityScores};
use crate::tokens::lexical_tokens;

/// Polarity multiplier applied to a negated word
const NEGATION_FACTOR: f64 = -0.5;
/// Tokens after a negation that it can still reach
const NEGATION_WINDOW: usize = 3;

#[derive(Debug, Clone, Copy)]
struct Assessment {
  polarity: f64,
  subjectivity: f64,
}

#[derive(Debug, Clone)]
pub struct PatternLexicon {
  words: HashMap<&'static str, Assessment>,
  intensifiers: HashMap<&'static str, f64>,
  negations: HashSet<&'static str>,
}

impl Default for PatternLexicon {
  fn default() -> Self {
    Self::new()
  }
}

impl PatternLexicon {
  pub fn new() -> Self {
    let words = OPINION_WORDS
      .iter()
      .map(|&(word, polarity, subjectivity)| (word, Assessment { polarity, subjectivity }))
      .collect();

    Self {
      words,
      intensifiers: INTENSIFIERS.iter().copied().collect(),
      negations: NEGATIONS.iter().copied().collect(),
    }
  }

  fn is_negation(&self, token: &str) -> bool {
    self.negations.contains(token) || token.ends_with("n't")
  }

  fn assess(&self, tokens: &[String]) -> Vec<Assessment> {
    let mut assessments = Vec::new();
    let mut intensity: Option<f64> = None;
    let mut negation_reach = 0usize;

    for token in tokens {
      let token = token.as_str();

      if self.is_negation(token) {
        negation_reach = NEGATION_WINDOW;
        continue;
      }

      if let Some(&factor) = self.intensifiers.get(token) {
        intensity = Some(intensity.unwrap_or(1.0) * factor);
        continue;
      }

      match self.words.get(token) {
        Some(&entry) => {
          let mut polarity = entry.polarity;
          let mut subjectivity = entry.subjectivity;

          if let Some(factor) = intensity.take() {
            polarity *= factor;
            subjectivity = (subjectivity * factor).min(1.0);
          }

          if negation_reach > 0 {
            polarity *= NEGATION_FACTOR;
            negation_reach = 0;
          }

          assessments.push(Assessment { polarity: polarity.clamp(-1.0, 1.0), subjectivity });
        }
        None => {
          intensity = None;
          negation_reach = negation_reach.saturating_sub(1);
        }
      }
    }

    assessments
  }
}

impl PolarityModel for PatternLexicon {
  fn score(&self, text: &str) -> PolarityScores {
    let tokens = lexical_tokens(text);
    let assessments = self.assess(&tokens);

    if assessments.is_empty() {
      return PolarityScores { polarity: 0.0, subjectivity: 0.0 };
    }

    let count = assessments.len() as f64;
    let polarity = assessments.iter().map(|a| a.polarity).sum::<f64>() / count;
    let subjectivity = assessments.iter().map(|a| a.subjectivity).sum::<f64>() / count;

    PolarityScores { polarity: polarity.clamp(-1.0, 1.0), subjectivity: subjectivity.clamp(0.0, 1.0) }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn score(text: &str) -> PolarityScores {
    PatternLexicon::new().score(text)
  }

  #[test]
  fn test_no_opinion_words_scores_zero() {
    let scores = score("We met on Tuesday in room four");
    assert_eq!(scores.polarity, 0.0);
    assert_eq!(scores.subjectivity, 0.0);
  }

  #[test]
  fn test_single_word_uses_lexicon_entry() {
    let scores = score("excellent");
    assert_eq!(scores.polarity, 1.0);
    assert_eq!(scores.subjectivity, 1.0);
  }

  #[test]
  fn test_intensifier_scales_next_word() {
    let plain = score("good");
    let intensified = score("very good");
    assert!(intensified.polarity > plain.polarity);
    assert!(intensified.subjectivity >= plain.subjectivity);
    assert!(intensified.subjectivity <= 1.0);
  }

  #[test]
  fn test_intensifier_chain_broken_by_other_word() {
    assert!(score("very very good").polarity >= score("very good").polarity);
    assert_eq!(score("very workshop good").polarity, score("good").polarity);
  }

  #[test]
  fn test_negation_flips_and_dampens() {
    let plain = score("good");
    let negated = score("not good");
    assert!((negated.polarity - plain.polarity * NEGATION_FACTOR).abs() < 1e-12);

    let contraction = score("it wasn't good");
    assert!(contraction.polarity < 0.0);
  }

  #[test]
  fn test_negation_window_expires() {
    let far = score("not at all the slightest bit of a good");
    assert!(far.polarity > 0.0);
  }

  #[test]
  fn test_mean_over_assessments() {
    let mixed = score("excellent but terrible");
    assert!(mixed.polarity.abs() < 1e-12);
    assert_eq!(mixed.subjectivity, 1.0);
  }
}
