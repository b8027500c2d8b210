//! Display formatting utilities for CLI output

use colored::*;

use sentiment::{Insight, Priority, SentimentDistribution, SentimentLabel, SummaryStats, TextAnalysis, Trend};

use crate::charts::ChartData;

const WRAP_WIDTH: usize = 76;

/// Color a piece of text by insight priority
pub fn paint_priority(text: &str, priority: Priority) -> ColoredString {
  match priority {
    Priority::Success => text.green(),
    Priority::Info => text.blue(),
    Priority::Warning => text.yellow(),
    Priority::Danger => text.red(),
  }
}

pub fn paint_label(label: SentimentLabel) -> ColoredString {
  match label {
    SentimentLabel::Positive => label.as_str().green(),
    SentimentLabel::Negative => label.as_str().red(),
    SentimentLabel::Neutral => label.as_str().dimmed(),
  }
}

fn trend_arrow(trend: Trend) -> &'static str {
  match trend {
    Trend::Up => "↑",
    Trend::Down => "↓",
    Trend::Stable => "→",
  }
}

/// Wrap text to fit within a specified width
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
  let mut lines = Vec::new();
  let mut current = String::new();

  for word in text.split_whitespace() {
    if current.is_empty() {
      current = word.to_string();
    } else if current.chars().count() + 1 + word.chars().count() <= width {
      current.push(' ');
      current.push_str(word);
    } else {
      lines.push(std::mem::take(&mut current));
      current = word.to_string();
    }
  }

  if !current.is_empty() {
    lines.push(current);
  }
  lines
}

pub fn display_summary(text_column: &str, stats: &SummaryStats, distribution: &SentimentDistribution) {
  println!("{} {}", "📊".cyan(), "Analysis Summary".bold());
  println!("  Feedback column: {}", text_column.cyan());
  println!("  Total entries:   {}", stats.total.to_string().bold());
  println!(
    "  {} {} ({:.1}%)",
    "Positive:".green(),
    distribution.positive,
    stats.positive_pct
  );
  println!("  {} {} ({:.1}%)", "Negative:".red(), distribution.negative, stats.negative_pct);
  println!("  {} {} ({:.1}%)", "Neutral: ".dimmed(), distribution.neutral, stats.neutral_pct);
  println!("  Mean polarity:     {:.3}", stats.mean_polarity);
  println!("  Mean subjectivity: {:.3}", stats.mean_subjectivity);
  println!();
}

pub fn display_insight(number: usize, insight: &Insight) {
  println!(
    "{} {}. {} {}",
    insight.icon,
    number,
    paint_priority(&insight.title, insight.priority).bold(),
    format!("[{} {}]", insight.metric, trend_arrow(insight.trend)).dimmed()
  );
  for line in wrap_text(&insight.text, WRAP_WIDTH) {
    println!("   {line}");
  }
  for line in wrap_text(&insight.detailed_analysis, WRAP_WIDTH) {
    println!("   {}", line.dimmed());
  }
  println!();
}

pub fn display_method_comparison(charts: &ChartData) {
  println!("{} {}", "⚖️".cyan(), "Method Comparison".bold());
  let rows = [
    ("Lexicon", &charts.method_comparison.lexicon),
    ("Valence", &charts.method_comparison.valence),
    ("Keyword", &charts.method_comparison.keyword),
  ];
  for (name, distribution) in rows {
    println!(
      "  {:<8} {} {}  {} {}  {} {}",
      name,
      "+".green(),
      distribution.positive,
      "-".red(),
      distribution.negative,
      "=".dimmed(),
      distribution.neutral
    );
  }
  println!();
}

pub fn display_text_analysis(text: &str, analysis: &TextAnalysis) {
  println!("{} {}", "📝".cyan(), text.italic());
  println!(
    "  Lexicon: {} (polarity {:.3}, subjectivity {:.3})",
    paint_label(analysis.lexicon.label),
    analysis.lexicon.polarity,
    analysis.lexicon.subjectivity
  );
  println!(
    "  Valence: {} (compound {:.4}, pos {:.3}, neg {:.3}, neu {:.3})",
    paint_label(analysis.valence.label),
    analysis.valence.compound,
    analysis.valence.positive,
    analysis.valence.negative,
    analysis.valence.neutral
  );
  println!(
    "  Keyword: {} (confidence {:.2}, +{} / -{})",
    paint_label(analysis.keyword.label),
    analysis.keyword.confidence,
    analysis.keyword.positive_hits,
    analysis.keyword.negative_hits
  );
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_wrap_text() {
    let lines = wrap_text("one two three four five", 9);
    assert_eq!(lines, vec!["one two", "three", "four five"]);
    assert!(wrap_text("   ", 10).is_empty());
  }

  #[test]
  fn test_wrap_keeps_long_words_whole() {
    let lines = wrap_text("a incomprehensibilities b", 5);
    assert_eq!(lines, vec!["a", "incomprehensibilities", "b"]);
  }
}
