//! Tokenizers shared by the classifiers

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("word pattern compiles"));

static LEXICAL_WORD: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"[\w']+").expect("lexical word pattern compiles"));

/// Lowercased alphanumeric word runs
pub fn word_tokens(text: &str) -> Vec<String> {
  let lower = text.to_lowercase();
  WORD_RUN.find_iter(&lower).map(|m| m.as_str().to_string()).collect()
}

/// Lowercased words that keep inner apostrophes, so "didn't" stays one token
pub fn lexical_tokens(text: &str) -> Vec<String> {
  let lower = text.to_lowercase();
  LEXICAL_WORD
    .find_iter(&lower)
    .map(|m| m.as_str().trim_matches('\'').to_string())
    .filter(|token| !token.is_empty())
    .collect()
}

/// Whitespace-separated tokens with surrounding punctuation removed.
/// Case is preserved and single-character tokens are dropped.
pub fn emphasis_tokens(text: &str) -> Vec<String> {
  text
    .split_whitespace()
    .map(|raw| raw.trim_matches(|c: char| c.is_ascii_punctuation()))
    .filter(|token| token.chars().count() > 1)
    .map(str::to_string)
    .collect()
}
