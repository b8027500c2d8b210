//! Bundled workshop feedback dataset for demos

use sentiment::{CellValue, Result, TabularDataset};

const FEEDBACK: [&str; 20] = [
  "The workshop content was extremely comprehensive and well-structured. I learned practical skills that I can apply immediately.",
  "Fantastic workshop! The instructor was knowledgeable and engaging. The hands-on exercises were particularly valuable.",
  "Great learning experience with excellent real-world examples. The pace was perfect and materials were top-quality.",
  "Outstanding workshop content and delivery. The interactive sessions made complex topics easy to understand.",
  "Excellent workshop! Very informative and practical. The instructor answered all questions thoroughly.",
  "The workshop was okay but felt rushed. Some topics could have been explained more clearly.",
  "Content was good but the presentation style was quite boring. More interactive elements would help.",
  "Average workshop. Some sections were useful but others felt repetitive and could be condensed.",
  "The workshop was fine overall but the examples used were somewhat outdated and not very relevant.",
  "Decent content but the delivery was monotonous. The instructor seemed unprepared for questions.",
  "Disappointing workshop. The content was too basic and didn't meet my expectations.",
  "Very poor experience. The workshop was disorganized and the instructor was unclear in explanations.",
  "Terrible workshop! Complete waste of time. The material was outdated and irrelevant.",
  "Extremely dissatisfied. The workshop lacked depth and practical applications. Very disappointing.",
  "Awful experience. The instructor was unprofessional and the content was poorly structured.",
  "The workshop exceeded all my expectations. Brilliant instructor with deep expertise in the subject.",
  "Absolutely loved this workshop! Best learning experience I've had. Highly recommend to everyone.",
  "Incredible workshop with amazing insights. The instructor's teaching style was exceptional.",
  "Perfect balance of theory and practice. The workshop materials were excellent and well-organized.",
  "Superb workshop! Learned so much in such a short time. The instructor was inspiring.",
];

const WORKSHOP_TYPES: [&str; 5] =
  ["Data Science", "Machine Learning", "Python Programming", "Leadership", "Business Analytics"];

const INSTRUCTORS: [&str; 4] =
  ["Dr. Sarah Johnson", "Prof. Michael Chen", "Dr. Emily Rodriguez", "Prof. David Wilson"];

/// Twenty workshop reviews with a cycled workshop type and instructor
pub fn demo_dataset() -> Result<TabularDataset> {
  TabularDataset::from_columns(vec![
    ("feedback".to_string(), FEEDBACK.iter().map(|v| CellValue::from(*v)).collect()),
    ("workshop_type".to_string(), cycled(&WORKSHOP_TYPES)),
    ("instructor".to_string(), cycled(&INSTRUCTORS)),
  ])
}

fn cycled(values: &[&str]) -> Vec<CellValue> {
  values.iter().cycle().take(FEEDBACK.len()).map(|v| CellValue::from(*v)).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_demo_shape() {
    let dataset = demo_dataset().unwrap();
    assert_eq!(dataset.len(), 20);

    let names: Vec<&str> = dataset.column_names().collect();
    assert_eq!(names, vec!["feedback", "workshop_type", "instructor"]);

    let types: Vec<String> = dataset.column_values(1).map(|v| v.to_string()).collect();
    assert_eq!(types[0], "Data Science");
    assert_eq!(types[5], "Data Science");

    let instructors: Vec<String> = dataset.column_values(2).map(|v| v.to_string()).collect();
    assert_eq!(instructors[4], "Dr. Sarah Johnson");
  }
}
