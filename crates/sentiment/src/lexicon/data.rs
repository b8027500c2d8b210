//! Opinion lexicon tables: (word, polarity, subjectivity)
//!
//! Feedback vocabulary only, not a general English lexicon.

pub(super) const OPINION_WORDS: &[(&str, f64, f64)] = &[
  // Positive
  ("excellent", 1.0, 1.0),
  ("outstanding", 0.5, 0.5),
  ("fantastic", 0.4, 0.9),
  ("amazing", 0.6, 0.9),
  ("brilliant", 0.9, 1.0),
  ("superb", 1.0, 1.0),
  ("great", 0.8, 0.75),
  ("good", 0.7, 0.6),
  ("helpful", 0.5, 0.6),
  ("valuable", 0.5, 0.6),
  ("useful", 0.3, 0.1),
  ("informative", 0.5, 0.5),
  ("engaging", 0.4, 0.6),
  ("comprehensive", 0.3, 0.5),
  ("thorough", 0.3, 0.5),
  ("thoroughly", 0.3, 0.5),
  ("clear", 0.1, 0.38),
  ("clearly", 0.1, 0.38),
  ("practical", 0.2, 0.3),
  ("relevant", 0.4, 0.6),
  ("effective", 0.6, 0.8),
  ("perfect", 1.0, 1.0),
  ("wonderful", 1.0, 1.0),
  ("inspiring", 0.5, 1.0),
  ("loved", 0.7, 0.8),
  ("love", 0.5, 0.6),
  ("incredible", 0.9, 0.9),
  ("awesome", 1.0, 1.0),
  ("best", 1.0, 0.3),
  ("better", 0.5, 0.5),
  ("exceptional", 0.67, 1.0),
  ("knowledgeable", 0.4, 0.6),
  ("easy", 0.43, 0.83),
  ("interesting", 0.5, 0.5),
  ("enjoyable", 0.5, 0.6),
  ("enjoyed", 0.5, 0.6),
  ("fun", 0.3, 0.2),
  ("nice", 0.6, 1.0),
  ("happy", 0.8, 1.0),
  ("pleased", 0.5, 1.0),
  ("satisfied", 0.5, 1.0),
  ("impressive", 1.0, 1.0),
  ("insightful", 0.6, 0.8),
  ("interactive", 0.2, 0.4),
  ("organized", 0.3, 0.5),
  ("structured", 0.1, 0.3),
  ("professional", 0.1, 0.1),
  ("expert", 0.4, 0.6),
  ("expertise", 0.3, 0.5),
  ("beneficial", 0.5, 0.6),
  ("recommend", 0.3, 0.5),
  ("recommended", 0.3, 0.5),
  ("okay", 0.5, 0.5),
  ("ok", 0.5, 0.5),
  ("fine", 0.42, 0.5),
  ("decent", 0.17, 0.67),
  ("top", 0.5, 0.5),
  ("quality", 0.1, 0.4),
  ("high", 0.16, 0.54),
  ("strong", 0.43, 0.73),
  ("well", 0.2, 0.3),
  ("smooth", 0.4, 0.7),
  ("friendly", 0.38, 0.5),
  ("patient", 0.2, 0.4),
  ("supportive", 0.4, 0.6),
  ("solid", 0.2, 0.4),
  ("complete", 0.1, 0.4),
  ("real", 0.2, 0.3),
  ("fresh", 0.3, 0.5),
  ("exciting", 0.3, 0.8),
  ("excited", 0.38, 0.75),
  ("glad", 0.5, 1.0),
  ("grateful", 0.5, 0.75),
  ("thank", 0.2, 0.2),
  ("thanks", 0.2, 0.2),
  ("positive", 0.23, 0.55),
  ("success", 0.3, 0.0),
  ("successful", 0.75, 0.95),
  // Negative
  ("terrible", -1.0, 1.0),
  ("awful", -1.0, 1.0),
  ("poor", -0.4, 0.6),
  ("poorly", -0.4, 0.6),
  ("bad", -0.7, 0.67),
  ("disappointing", -0.6, 0.7),
  ("disappointed", -0.75, 0.75),
  ("boring", -1.0, 1.0),
  ("bored", -0.5, 1.0),
  ("unclear", -0.1, 0.2),
  ("confusing", -0.3, 0.4),
  ("confused", -0.4, 0.7),
  ("useless", -0.5, 0.0),
  ("waste", -0.2, 0.0),
  ("frustrating", -0.4, 0.7),
  ("frustrated", -0.7, 0.4),
  ("unprepared", -0.3, 0.5),
  ("disorganized", -0.3, 0.6),
  ("outdated", -0.2, 0.4),
  ("irrelevant", -0.4, 0.5),
  ("superficial", -0.2, 0.5),
  ("rushed", -0.25, 0.4),
  ("monotonous", -0.5, 0.7),
  ("hate", -0.8, 0.9),
  ("hated", -0.9, 0.7),
  ("horrible", -1.0, 1.0),
  ("worst", -1.0, 1.0),
  ("worse", -0.4, 0.6),
  ("failed", -0.5, 0.3),
  ("disaster", -0.7, 0.8),
  ("dissatisfied", -0.5, 0.9),
  ("unprofessional", -0.4, 0.7),
  ("basic", 0.0, 0.125),
  ("average", -0.15, 0.4),
  ("mediocre", -0.4, 0.6),
  ("repetitive", -0.2, 0.3),
  ("slow", -0.3, 0.39),
  ("difficult", -0.5, 1.0),
  ("hard", -0.29, 0.54),
  ("complex", -0.3, 0.7),
  ("annoying", -0.8, 0.9),
  ("tedious", -0.5, 0.8),
  ("dull", -0.3, 0.6),
  ("weak", -0.38, 0.63),
  ("wrong", -0.5, 0.9),
  ("lacking", -0.2, 0.4),
  ("lacked", -0.2, 0.4),
  ("shallow", -0.25, 0.5),
  ("unhelpful", -0.5, 0.6),
  ("sad", -0.5, 1.0),
  ("angry", -0.5, 1.0),
  ("negative", -0.3, 0.4),
  ("problem", -0.2, 0.3),
  ("problems", -0.2, 0.3),
  ("long", -0.05, 0.4),
  ("short", 0.0, 0.3),
  ("expensive", -0.5, 0.7),
  ("crowded", -0.2, 0.4),
  ("late", -0.3, 0.6),
  ("messy", -0.4, 0.6),
];

pub(super) const INTENSIFIERS: &[(&str, f64)] = &[
  ("very", 1.3),
  ("extremely", 1.5),
  ("really", 1.2),
  ("so", 1.3),
  ("too", 1.2),
  ("quite", 1.1),
  ("highly", 1.3),
  ("incredibly", 1.5),
  ("absolutely", 1.5),
  ("particularly", 1.2),
  ("totally", 1.4),
  ("completely", 1.4),
  ("truly", 1.3),
  ("exceptionally", 1.5),
  ("somewhat", 0.7),
  ("slightly", 0.6),
  ("fairly", 0.9),
  ("rather", 0.9),
  ("barely", 0.5),
];

pub(super) const NEGATIONS: &[&str] =
  &["not", "no", "never", "neither", "nor", "without", "hardly", "cannot", "nothing"];
