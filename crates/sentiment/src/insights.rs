//! Insight generation
//!
//! Turns the aggregate lexicon statistics into five findings in a fixed
//! order: overall sentiment, dominant pattern, intensity, subjectivity and a
//! recommendation. The threshold decisions are plain enums computed from the
//! numbers; narrative templating only reads those decisions.

use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "schemars")]
use schemars::JsonSchema;

use crate::analyzer::AnalyzedRecord;
use crate::error::Result;
use crate::label::SentimentLabel;
use crate::summary::AggregateSentiment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Priority {
  Success,
  Info,
  Warning,
  Danger,
}

impl Priority {
  pub fn as_str(&self) -> &'static str {
    match self {
      Priority::Success => "success",
      Priority::Info => "info",
      Priority::Warning => "warning",
      Priority::Danger => "danger",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Trend {
  Up,
  Down,
  Stable,
}

impl Trend {
  pub fn as_str(&self) -> &'static str {
    match self {
      Trend::Up => "up",
      Trend::Down => "down",
      Trend::Stable => "stable",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
  OverallSentiment,
  DominantPattern,
  Intensity,
  Subjectivity,
  Recommendation,
}

/// A generated finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct Insight {
  pub kind: InsightKind,
  pub icon: String,
  pub title: String,
  pub text: String,
  pub priority: Priority,
  pub metric: String,
  pub trend: Trend,
  pub detailed_analysis: String,
}

/// Overall satisfaction from the positive share
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SatisfactionLevel {
  Excellent,
  Good,
  Concerning,
}

impl SatisfactionLevel {
  pub fn from_positive_pct(positive_pct: f64) -> Self {
    if positive_pct >= 70.0 {
      Self::Excellent
    } else if positive_pct >= 50.0 {
      Self::Good
    } else {
      Self::Concerning
    }
  }

  pub fn priority(&self) -> Priority {
    match self {
      Self::Excellent => Priority::Success,
      Self::Good => Priority::Info,
      Self::Concerning => Priority::Danger,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Excellent => "excellent",
      Self::Good => "good",
      Self::Concerning => "concerning",
    }
  }
}

pub fn satisfaction_trend(positive_pct: f64) -> Trend {
  if positive_pct >= 60.0 {
    Trend::Up
  } else {
    Trend::Down
  }
}

/// Emotional intensity from the magnitude of the mean polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntensityLevel {
  Strong,
  Moderate,
  Weak,
}

impl IntensityLevel {
  pub fn from_mean_polarity(mean_polarity: f64) -> Self {
    let magnitude = mean_polarity.abs();
    if magnitude > 0.3 {
      Self::Strong
    } else if magnitude > 0.1 {
      Self::Moderate
    } else {
      Self::Weak
    }
  }

  pub fn priority(&self) -> Priority {
    match self {
      Self::Strong => Priority::Success,
      Self::Moderate => Priority::Info,
      Self::Weak => Priority::Warning,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Strong => "strong",
      Self::Moderate => "moderate",
      Self::Weak => "weak",
    }
  }
}

pub fn intensity_trend(mean_polarity: f64) -> Trend {
  if mean_polarity > 0.0 {
    Trend::Up
  } else {
    Trend::Down
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectivityLevel {
  HighlySubjective,
  ModeratelySubjective,
  Objective,
}

impl SubjectivityLevel {
  pub fn from_mean_subjectivity(mean_subjectivity: f64) -> Self {
    if mean_subjectivity > 0.6 {
      Self::HighlySubjective
    } else if mean_subjectivity > 0.4 {
      Self::ModeratelySubjective
    } else {
      Self::Objective
    }
  }

  pub fn priority(&self) -> Priority {
    match self {
      Self::HighlySubjective | Self::ModeratelySubjective => Priority::Info,
      Self::Objective => Priority::Success,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::HighlySubjective => "highly subjective",
      Self::ModeratelySubjective => "moderately subjective",
      Self::Objective => "objective",
    }
  }

  fn description(&self) -> &'static str {
    match self {
      Self::HighlySubjective => "opinion-driven with personal perspectives",
      Self::ModeratelySubjective => "balanced between opinions and facts",
      Self::Objective => "fact-based with minimal emotional content",
    }
  }
}

/// Action level from the negative share
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationLevel {
  Urgent,
  Monitor,
  Maintain,
}

impl RecommendationLevel {
  pub fn from_negative_pct(negative_pct: f64) -> Self {
    if negative_pct > 30.0 {
      Self::Urgent
    } else if negative_pct > 15.0 {
      Self::Monitor
    } else {
      Self::Maintain
    }
  }

  pub fn priority(&self) -> Priority {
    match self {
      Self::Urgent => Priority::Danger,
      Self::Monitor => Priority::Warning,
      Self::Maintain => Priority::Success,
    }
  }

  fn recommendation(&self) -> &'static str {
    match self {
      Self::Urgent => "Immediate attention needed to address negative feedback patterns",
      Self::Monitor => "Monitor negative trends and implement targeted improvements",
      Self::Maintain => "Maintain current positive momentum while monitoring feedback quality",
    }
  }

  fn action_plan(&self) -> &'static str {
    match self {
      Self::Urgent => {
        "Focus on identifying and resolving the root causes of dissatisfaction. Implement immediate corrective measures and follow-up surveys to track improvement."
      }
      Self::Monitor => {
        "Analyze negative feedback for common themes, develop targeted improvement strategies, and implement changes while monitoring progress."
      }
      Self::Maintain => {
        "Continue current successful practices, implement minor optimizations based on feedback, and maintain regular monitoring to preserve high satisfaction levels."
      }
    }
  }
}

pub fn recommendation_trend(negative_pct: f64) -> Trend {
  if negative_pct < 20.0 {
    Trend::Down
  } else {
    Trend::Up
  }
}

/// Generate the five insights for a non-empty analysis
pub fn generate_insights(records: &[AnalyzedRecord]) -> Result<Vec<Insight>> {
  let aggregate = AggregateSentiment::from_records(records)?;
  Ok(generate_from_aggregate(&aggregate))
}

pub fn generate_from_aggregate(aggregate: &AggregateSentiment) -> Vec<Insight> {
  let insights = vec![
    overall_sentiment(aggregate),
    dominant_pattern(aggregate),
    intensity(aggregate),
    subjectivity(aggregate),
    recommendation(aggregate),
  ];

  debug!(
    priorities = ?insights.iter().map(|i| i.priority.as_str()).collect::<Vec<_>>(),
    "Generated insights"
  );
  insights
}

fn overall_sentiment(aggregate: &AggregateSentiment) -> Insight {
  let total = aggregate.total();
  let distribution = aggregate.distribution;
  let positive_pct = aggregate.positive_pct();
  let negative_pct = aggregate.negative_pct();
  let level = SatisfactionLevel::from_positive_pct(positive_pct);

  Insight {
    kind: InsightKind::OverallSentiment,
    icon: "📊".to_string(),
    title: "Overall Sentiment Analysis".to_string(),
    text: format!(
      "Analysis shows {positive_pct:.1}% positive feedback, indicating {} satisfaction levels across {total} responses.",
      level.as_str()
    ),
    priority: level.priority(),
    metric: format!("{positive_pct:.1}%"),
    trend: satisfaction_trend(positive_pct),
    detailed_analysis: format!(
      "Out of {total} total feedback entries, {} were classified as positive ({positive_pct:.1}%), {} as negative ({negative_pct:.1}%), and {} as neutral. This distribution indicates {} overall satisfaction with the analyzed content.",
      distribution.positive,
      distribution.negative,
      distribution.neutral,
      level.as_str()
    ),
  }
}

fn dominant_pattern(aggregate: &AggregateSentiment) -> Insight {
  let (label, count) = aggregate.distribution.dominant();
  let share = aggregate.distribution.percent(label);

  Insight {
    kind: InsightKind::DominantPattern,
    icon: "🎯".to_string(),
    title: "Dominant Sentiment Pattern".to_string(),
    text: format!(
      "{label} sentiment dominates with {count} responses ({share:.1}%). This indicates clear sentiment direction."
    ),
    priority: Priority::Info,
    metric: format!("{count} responses"),
    trend: Trend::Stable,
    detailed_analysis: format!(
      "The dominant sentiment pattern shows that {} responses represent the majority opinion. This clear dominance suggests consistent patterns in the feedback, which can be valuable for understanding overall trends and making informed decisions.",
      label_lower(label)
    ),
  }
}

fn intensity(aggregate: &AggregateSentiment) -> Insight {
  let mean = aggregate.mean_polarity;
  let level = IntensityLevel::from_mean_polarity(mean);

  let detailed_analysis = match level {
    IntensityLevel::Strong => format!(
      "The average polarity score of {mean:.3} indicates {} emotional intensity in the feedback. Scores closer to +1 or -1 represent stronger emotional responses, while scores near 0 indicate more neutral or balanced feedback. This level of emotional intensity suggests passionate engagement from respondents.",
      level.as_str()
    ),
    IntensityLevel::Moderate => {
      "This level of emotional intensity suggests measured responses from respondents.".to_string()
    }
    IntensityLevel::Weak => {
      "This level of emotional intensity suggests neutral engagement from respondents.".to_string()
    }
  };

  Insight {
    kind: InsightKind::Intensity,
    icon: "⚡".to_string(),
    title: "Sentiment Intensity Analysis".to_string(),
    text: format!(
      "Average sentiment polarity is {mean:.3}, indicating {} emotional responses in the feedback.",
      level.as_str()
    ),
    priority: level.priority(),
    metric: format!("{mean:.3}"),
    trend: intensity_trend(mean),
    detailed_analysis,
  }
}

fn subjectivity(aggregate: &AggregateSentiment) -> Insight {
  let mean = aggregate.mean_subjectivity;
  let level = SubjectivityLevel::from_mean_subjectivity(mean);

  Insight {
    kind: InsightKind::Subjectivity,
    icon: "🔍".to_string(),
    title: "Content Subjectivity Analysis".to_string(),
    text: format!(
      "Feedback is {} (score: {mean:.3}), showing the emotional vs factual nature of responses.",
      level.as_str()
    ),
    priority: level.priority(),
    metric: format!("{mean:.3}"),
    trend: Trend::Stable,
    detailed_analysis: format!(
      "The subjectivity score of {mean:.3} indicates that the feedback is {}. Highly subjective feedback (>0.6) contains more personal opinions and emotional expressions, while objective feedback (<0.4) contains more factual statements. This level suggests that responses are {}.",
      level.as_str(),
      level.description()
    ),
  }
}

fn recommendation(aggregate: &AggregateSentiment) -> Insight {
  let negative_pct = aggregate.negative_pct();
  let level = RecommendationLevel::from_negative_pct(negative_pct);

  let outlook = match level {
    RecommendationLevel::Urgent => "requires immediate intervention.",
    RecommendationLevel::Monitor => "suggests room for improvement.",
    RecommendationLevel::Maintain => {
      "indicates strong performance. Regular monitoring and proactive management will help maintain or improve satisfaction levels."
    }
  };

  Insight {
    kind: InsightKind::Recommendation,
    icon: "💡".to_string(),
    title: "AI-Powered Recommendations".to_string(),
    text: level.recommendation().to_string(),
    priority: level.priority(),
    metric: format!("{negative_pct:.1}% negative"),
    trend: recommendation_trend(negative_pct),
    detailed_analysis: format!(
      "Based on the analysis, {} The current negative feedback rate of {negative_pct:.1}% {outlook}",
      level.action_plan()
    ),
  }
}

fn label_lower(label: SentimentLabel) -> &'static str {
  match label {
    SentimentLabel::Positive => "positive",
    SentimentLabel::Negative => "negative",
    SentimentLabel::Neutral => "neutral",
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::summary::SentimentDistribution;

  fn aggregate(positive: usize, negative: usize, neutral: usize, polarity: f64, subjectivity: f64) -> AggregateSentiment {
    AggregateSentiment {
      distribution: SentimentDistribution { positive, negative, neutral },
      mean_polarity: polarity,
      mean_subjectivity: subjectivity,
    }
  }

  #[test]
  fn test_satisfaction_thresholds() {
    assert_eq!(SatisfactionLevel::from_positive_pct(70.0), SatisfactionLevel::Excellent);
    assert_eq!(SatisfactionLevel::from_positive_pct(69.9), SatisfactionLevel::Good);
    assert_eq!(SatisfactionLevel::from_positive_pct(50.0), SatisfactionLevel::Good);
    assert_eq!(SatisfactionLevel::from_positive_pct(49.9), SatisfactionLevel::Concerning);
    assert_eq!(satisfaction_trend(60.0), Trend::Up);
    assert_eq!(satisfaction_trend(59.9), Trend::Down);
  }

  #[test]
  fn test_intensity_thresholds() {
    assert_eq!(IntensityLevel::from_mean_polarity(0.31), IntensityLevel::Strong);
    assert_eq!(IntensityLevel::from_mean_polarity(-0.31), IntensityLevel::Strong);
    assert_eq!(IntensityLevel::from_mean_polarity(0.3), IntensityLevel::Moderate);
    assert_eq!(IntensityLevel::from_mean_polarity(0.1), IntensityLevel::Weak);
    assert_eq!(intensity_trend(0.0), Trend::Down);
  }

  #[test]
  fn test_subjectivity_thresholds() {
    assert_eq!(SubjectivityLevel::from_mean_subjectivity(0.61), SubjectivityLevel::HighlySubjective);
    assert_eq!(SubjectivityLevel::from_mean_subjectivity(0.6), SubjectivityLevel::ModeratelySubjective);
    assert_eq!(SubjectivityLevel::from_mean_subjectivity(0.4), SubjectivityLevel::Objective);
    assert_eq!(SubjectivityLevel::Objective.priority(), Priority::Success);
  }

  #[test]
  fn test_recommendation_thresholds() {
    assert_eq!(RecommendationLevel::from_negative_pct(30.1), RecommendationLevel::Urgent);
    assert_eq!(RecommendationLevel::from_negative_pct(30.0), RecommendationLevel::Monitor);
    assert_eq!(RecommendationLevel::from_negative_pct(15.0), RecommendationLevel::Maintain);
    assert_eq!(recommendation_trend(20.0), Trend::Up);
    assert_eq!(recommendation_trend(19.9), Trend::Down);
  }

  #[test]
  fn test_fixed_order_and_kinds() {
    let insights = generate_from_aggregate(&aggregate(7, 2, 1, 0.4, 0.7));
    let kinds: Vec<InsightKind> = insights.iter().map(|i| i.kind).collect();
    assert_eq!(
      kinds,
      vec![
        InsightKind::OverallSentiment,
        InsightKind::DominantPattern,
        InsightKind::Intensity,
        InsightKind::Subjectivity,
        InsightKind::Recommendation,
      ]
    );
  }

  #[test]
  fn test_narratives_interpolate_numbers() {
    let insights = generate_from_aggregate(&aggregate(7, 2, 1, 0.41234, 0.5556));

    assert_eq!(
      insights[0].text,
      "Analysis shows 70.0% positive feedback, indicating excellent satisfaction levels across 10 responses."
    );
    assert_eq!(insights[0].metric, "70.0%");
    assert!(insights[0].detailed_analysis.contains("7 were classified as positive (70.0%), 2 as negative (20.0%), and 1 as neutral"));

    assert_eq!(
      insights[1].text,
      "Positive sentiment dominates with 7 responses (70.0%). This indicates clear sentiment direction."
    );
    assert_eq!(insights[1].metric, "7 responses");

    assert_eq!(insights[2].metric, "0.412");
    assert_eq!(insights[2].priority, Priority::Success);
    assert!(insights[2].detailed_analysis.ends_with("passionate engagement from respondents."));

    assert_eq!(insights[3].metric, "0.556");
    assert!(insights[3].text.starts_with("Feedback is moderately subjective (score: 0.556)"));

    assert_eq!(insights[4].metric, "20.0% negative");
    assert_eq!(insights[4].priority, Priority::Warning);
    assert_eq!(insights[4].trend, Trend::Up);
    assert!(insights[4].detailed_analysis.ends_with("rate of 20.0% suggests room for improvement."));
  }

  #[test]
  fn test_weak_intensity_uses_short_narrative() {
    let insights = generate_from_aggregate(&aggregate(1, 1, 8, 0.02, 0.2));
    assert_eq!(insights[2].priority, Priority::Warning);
    assert_eq!(
      insights[2].detailed_analysis,
      "This level of emotional intensity suggests neutral engagement from respondents."
    );
    assert_eq!(insights[1].text, "Neutral sentiment dominates with 8 responses (80.0%). This indicates clear sentiment direction.");
  }

  #[test]
  fn test_serialized_shape() {
    let insights = generate_from_aggregate(&aggregate(1, 0, 0, 0.5, 0.5));
    let json = serde_json::to_value(&insights[0]).unwrap();
    assert_eq!(json["priority"], "success");
    assert_eq!(json["trend"], "up");
    assert_eq!(json["kind"], "overall_sentiment");
    assert_eq!(json["icon"], "📊");
  }
}
