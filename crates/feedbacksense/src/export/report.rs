//! Plain-text insights report

use chrono::{DateTime, TimeZone};
use sentiment::{Insight, SentimentDistribution, SummaryStats};

pub fn render_report<Tz: TimeZone>(
  summary: &SummaryStats,
  distribution: &SentimentDistribution,
  insights: &[Insight],
  generated_at: &DateTime<Tz>,
) -> String
where
  Tz::Offset: std::fmt::Display,
{
  let mut lines: Vec<String> = Vec::new();

  lines.push("🤖 AI-POWERED SENTIMENT ANALYSIS INSIGHTS".to_string());
  lines.push("=".repeat(60));
  lines.push(format!("Generated on: {}", generated_at.format("%B %d, %Y at %I:%M %p")));
  lines.push(String::new());

  lines.push("📊 ANALYSIS SUMMARY".to_string());
  lines.push("-".repeat(30));
  lines.push(format!("Total Feedback Entries: {}", summary.total));
  lines.push(format!("Positive Responses: {} ({:.1}%)", distribution.positive, summary.positive_pct));
  lines.push(format!("Negative Responses: {} ({:.1}%)", distribution.negative, summary.negative_pct));
  lines.push(format!("Neutral Responses: {} ({:.1}%)", distribution.neutral, summary.neutral_pct));
  lines.push(format!("Average Polarity Score: {:.3}", summary.mean_polarity));
  lines.push(format!("Average Subjectivity Score: {:.3}", summary.mean_subjectivity));
  lines.push(String::new());

  lines.push("🎯 KEY INSIGHTS & RECOMMENDATIONS".to_string());
  lines.push("-".repeat(40));

  for (number, insight) in insights.iter().enumerate() {
    lines.push(format!("\n{}. {}", number + 1, insight.title));
    lines.push(format!("   Priority: {}", insight.priority.as_str().to_uppercase()));
    lines.push(format!("   Metric: {}", insight.metric));
    lines.push(format!("   Trend: {}", insight.trend.as_str().to_uppercase()));
    lines.push("   \n   Summary:".to_string());
    lines.push(format!("   {}", insight.text));
    lines.push("   \n   Detailed Analysis:".to_string());
    lines.push(format!("   {}", insight.detailed_analysis));
    lines.push(String::new());
  }

  lines.push("📈 ANALYSIS METHODOLOGY".to_string());
  lines.push("-".repeat(30));
  lines.push("This analysis combines three sentiment analysis methods:".to_string());
  lines.push("1. Lexicon: opinion lexicon scoring with polarity and subjectivity".to_string());
  lines.push("2. Valence: weighted valence lexicon tuned for short, informal text".to_string());
  lines.push("3. Keyword Heuristic: domain-specific keyword counts with confidence scoring".to_string());
  lines.push(String::new());
  lines.push("Aggregate insights are derived from the lexicon results; the other two".to_string());
  lines.push("methods are reported for comparison.".to_string());
  lines.push(String::new());
  lines.push("Generated by FeedbackSense".to_string());

  lines.join("\n")
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Utc;
  use sentiment::insights::generate_from_aggregate;
  use sentiment::AggregateSentiment;

  #[test]
  fn test_report_sections() {
    let aggregate = AggregateSentiment {
      distribution: SentimentDistribution { positive: 7, negative: 2, neutral: 1 },
      mean_polarity: 0.4,
      mean_subjectivity: 0.7,
    };
    let summary = SummaryStats::from_aggregate(&aggregate);
    let insights = generate_from_aggregate(&aggregate);
    let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();

    let report = render_report(&summary, &aggregate.distribution, &insights, &at);

    assert!(report.starts_with("🤖 AI-POWERED SENTIMENT ANALYSIS INSIGHTS\n"));
    assert!(report.contains("Generated on: March 09, 2024 at 02:05 PM"));
    assert!(report.contains("Total Feedback Entries: 10"));
    assert!(report.contains("Positive Responses: 7 (70.0%)"));
    assert!(report.contains("Negative Responses: 2 (20.0%)"));
    assert!(report.contains("Average Polarity Score: 0.400"));
    assert!(report.contains("\n1. Overall Sentiment Analysis"));
    assert!(report.contains("\n5. AI-Powered Recommendations"));
    assert!(report.contains("   Priority: WARNING"));
    assert!(report.contains("   Trend: STABLE"));
    assert!(report.ends_with("Generated by FeedbackSense"));
  }
}
