use sentiment::{
  generate_insights, AnalysisError, AnalyzedRecord, ColumnResolution, ColumnSidecar, DatasetAnalyzer, KeywordClassifier,
  KeywordScore, LexiconClassifier, LexiconScore, Priority, SentimentLabel, SummaryStats, TabularDataset, Trend,
  ValenceClassifier, ValenceScore,
};

fn record(index: usize, label: SentimentLabel, polarity: f64) -> AnalyzedRecord {
  AnalyzedRecord {
    original_index: index,
    feedback_text: format!("row {index}"),
    lexicon: LexiconScore { label, polarity, subjectivity: 0.5 },
    valence: ValenceScore { label, compound: polarity, positive: 0.0, negative: 0.0, neutral: 1.0 },
    keyword: KeywordScore { label: SentimentLabel::Neutral, confidence: 0.5, positive_hits: 0, negative_hits: 0 },
    original: ColumnSidecar::new(),
  }
}

fn labelled(positive: usize, negative: usize, neutral: usize) -> Vec<AnalyzedRecord> {
  let labels = std::iter::repeat((SentimentLabel::Positive, 0.6))
    .take(positive)
    .chain(std::iter::repeat((SentimentLabel::Negative, -0.6)).take(negative))
    .chain(std::iter::repeat((SentimentLabel::Neutral, 0.0)).take(neutral));

  labels.enumerate().map(|(index, (label, polarity))| record(index, label, polarity)).collect()
}

#[test]
fn test_seven_two_one_insights() {
  let insights = generate_insights(&labelled(7, 2, 1)).unwrap();
  assert_eq!(insights.len(), 5);

  let overall = &insights[0];
  assert_eq!(overall.metric, "70.0%");
  assert_eq!(overall.priority, Priority::Success);
  assert_eq!(overall.trend, Trend::Up);

  let dominant = &insights[1];
  assert!(dominant.text.starts_with("Positive sentiment dominates with 7 responses (70.0%)"));
  assert_eq!(dominant.priority, Priority::Info);
  assert_eq!(dominant.trend, Trend::Stable);

  let recommendation = &insights[4];
  assert_eq!(recommendation.priority, Priority::Warning);
  assert_eq!(recommendation.text, "Monitor negative trends and implement targeted improvements");
  assert_eq!(recommendation.metric, "20.0% negative");
  assert_eq!(recommendation.trend, Trend::Up);
}

#[test]
fn test_percent_ties_round_half_to_even() {
  let records = labelled(1, 0, 15);
  assert_eq!(SummaryStats::from_records(&records).unwrap().positive_pct, 6.2);

  let insights = generate_insights(&records).unwrap();
  assert_eq!(insights[0].metric, "6.2%");
}

#[test]
fn test_concerning_dataset() {
  let insights = generate_insights(&labelled(2, 5, 3)).unwrap();
  assert_eq!(insights[0].priority, Priority::Danger);
  assert_eq!(insights[0].trend, Trend::Down);
  assert!(insights[1].text.starts_with("Negative sentiment dominates"));
  assert_eq!(insights[4].priority, Priority::Danger);
  assert!(insights[4].detailed_analysis.ends_with("requires immediate intervention."));
}

#[test]
fn test_dominant_tie_goes_to_positive() {
  let insights = generate_insights(&labelled(4, 4, 2)).unwrap();
  assert!(insights[1].text.starts_with("Positive sentiment dominates with 4 responses (40.0%)"));
}

#[test]
fn test_empty_analysis() {
  assert!(matches!(generate_insights(&[]), Err(AnalysisError::EmptyAnalysis)));
}

#[test]
fn test_empty_dataset() {
  let dataset = TabularDataset::from_csv_str("feedback,rating\n").unwrap();
  assert!(matches!(DatasetAnalyzer::new().analyze(&dataset), Err(AnalysisError::EmptyDataset)));
}

#[test]
fn test_csv_to_insights() {
  let csv = "\
id,session,workshop_feedback,rating
1,AM,Excellent workshop with very helpful and clear examples,5
2,AM,Terrible pacing and a boring presentation,1
3,PM,The room was on the second floor,3
4,PM,Great instructor and really engaging content,5
";
  let dataset = TabularDataset::from_csv_str(csv).unwrap();
  let analysis = DatasetAnalyzer::new().analyze(&dataset).unwrap();

  assert_eq!(analysis.text_column, "workshop_feedback");
  assert!(matches!(analysis.resolution, ColumnResolution::ExactHint { .. }));
  assert_eq!(analysis.records.len(), 4);

  let indexes: Vec<usize> = analysis.records.iter().map(|r| r.original_index).collect();
  assert_eq!(indexes, vec![0, 1, 2, 3]);

  let names: Vec<String> = analysis.records[0].original.prefixed_names().collect();
  assert_eq!(names, vec!["original_id", "original_session", "original_rating"]);

  let stats = SummaryStats::from_records(&analysis.records).unwrap();
  assert_eq!(stats.total, 4);
  assert!((stats.positive_pct + stats.negative_pct + stats.neutral_pct - 100.0).abs() < 0.2);

  let insights = generate_insights(&analysis.records).unwrap();
  assert_eq!(insights.len(), 5);
}

#[test]
fn test_analysis_is_idempotent() {
  let dataset = TabularDataset::from_csv_str("comment,n\nGood stuff,1\nAwful,2\n,3\n").unwrap();
  let analyzer = DatasetAnalyzer::new();
  assert_eq!(analyzer.analyze(&dataset).unwrap(), analyzer.analyze(&dataset).unwrap());
}

#[test]
fn test_classifiers_never_fail() {
  let lexicon = LexiconClassifier::new();
  let valence = ValenceClassifier::new();
  let keyword = KeywordClassifier::new();

  let inputs = ["", " ", "!!!", "???", "😀😀", "NOT GOOD AT ALL!!!", "but but but", "\u{0}\t\n", "a"];
  for text in inputs {
    for label in [lexicon.classify(text).label, valence.classify(text).label, keyword.classify(text).label] {
      assert!(SentimentLabel::ALL.contains(&label));
    }
  }

  let score = keyword.classify("");
  assert_eq!(score.label, SentimentLabel::Neutral);
  assert_eq!(score.confidence, 0.5);
  assert_eq!((score.positive_hits, score.negative_hits), (0, 0));
}
