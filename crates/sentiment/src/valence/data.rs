//! Valence tables. Valences run from -4.0 to 4.0.
//!
//! Feedback vocabulary only, not a general English lexicon.

pub(super) const VALENCES: &[(&str, f64)] = &[
  // Positive
  ("excellent", 2.7),
  ("outstanding", 3.0),
  ("fantastic", 2.6),
  ("amazing", 2.8),
  ("brilliant", 2.8),
  ("superb", 3.1),
  ("great", 3.1),
  ("good", 1.9),
  ("helpful", 1.9),
  ("valuable", 2.1),
  ("useful", 1.9),
  ("informative", 1.4),
  ("engaging", 1.4),
  ("engaged", 1.7),
  ("clear", 1.6),
  ("clearly", 1.1),
  ("effective", 2.0),
  ("perfect", 2.7),
  ("wonderful", 2.7),
  ("inspiring", 2.6),
  ("inspired", 2.2),
  ("loved", 2.9),
  ("love", 3.2),
  ("lovely", 2.8),
  ("incredible", 2.0),
  ("awesome", 3.1),
  ("best", 3.2),
  ("better", 1.9),
  ("exceptional", 2.4),
  ("easy", 1.9),
  ("interesting", 1.7),
  ("enjoy", 2.2),
  ("enjoyable", 1.9),
  ("enjoyed", 2.3),
  ("fun", 2.3),
  ("nice", 1.8),
  ("happy", 2.7),
  ("pleased", 1.9),
  ("pleasant", 2.3),
  ("satisfied", 1.8),
  ("impressive", 2.3),
  ("impressed", 2.1),
  ("insightful", 2.2),
  ("beneficial", 1.9),
  ("benefit", 2.0),
  ("recommend", 1.5),
  ("recommended", 1.5),
  ("okay", 0.9),
  ("ok", 1.2),
  ("fine", 0.8),
  ("decent", 1.2),
  ("strong", 2.3),
  ("smooth", 1.0),
  ("friendly", 2.2),
  ("patient", 1.1),
  ("supportive", 1.9),
  ("solid", 1.5),
  ("exciting", 2.2),
  ("excited", 1.4),
  ("glad", 2.0),
  ("grateful", 2.0),
  ("thank", 1.5),
  ("thanks", 1.9),
  ("positive", 2.6),
  ("success", 2.7),
  ("successful", 2.8),
  ("appreciate", 1.7),
  ("appreciated", 2.3),
  ("like", 1.5),
  ("liked", 1.8),
  ("well", 1.1),
  ("win", 2.8),
  ("worth", 0.9),
  ("wow", 2.8),
  ("yes", 1.7),
  ("clever", 2.0),
  ("creative", 1.9),
  ("confident", 2.2),
  ("fascinating", 2.5),
  ("improve", 1.9),
  ("improved", 2.1),
  ("help", 1.7),
  ("helped", 1.9),
  // Negative
  ("terrible", -2.1),
  ("awful", -2.0),
  ("poor", -2.1),
  ("poorly", -1.8),
  ("bad", -2.5),
  ("disappointing", -2.2),
  ("disappointed", -1.9),
  ("boring", -1.3),
  ("bored", -1.1),
  ("confusing", -0.9),
  ("confused", -1.3),
  ("useless", -1.8),
  ("waste", -1.8),
  ("wasted", -2.2),
  ("frustrating", -1.9),
  ("frustrated", -2.0),
  ("irrelevant", -1.4),
  ("rushed", -1.0),
  ("hate", -2.7),
  ("hated", -3.2),
  ("horrible", -2.5),
  ("worst", -3.1),
  ("worse", -2.1),
  ("fail", -2.5),
  ("failed", -2.3),
  ("disaster", -3.1),
  ("dissatisfied", -1.6),
  ("mediocre", -1.0),
  ("difficult", -1.5),
  ("annoying", -1.7),
  ("annoyed", -1.6),
  ("tedious", -1.5),
  ("dull", -1.7),
  ("weak", -1.9),
  ("wrong", -2.1),
  ("lacking", -1.2),
  ("lack", -1.3),
  ("sad", -2.1),
  ("angry", -2.3),
  ("negative", -2.7),
  ("problem", -1.7),
  ("problems", -1.7),
  ("unhappy", -1.8),
  ("stupid", -2.4),
  ("pointless", -1.7),
  ("painful", -1.9),
  ("mess", -1.5),
  ("messy", -1.5),
  ("hard", -0.4),
  ("slow", -0.6),
  ("expensive", -0.8),
  ("sorry", -0.3),
  ("unfortunately", -1.3),
  ("no", -1.2),
  ("ugh", -1.8),
  ("meh", -0.3),
  ("miss", -0.6),
  ("missed", -1.2),
  ("unprepared", -1.1),
  ("disorganized", -1.4),
];

/// Degree modifiers: (word, scalar). Positive entries amplify, negative dampen.
pub(super) const BOOSTERS: &[(&str, f64)] = &[
  ("absolutely", 0.293),
  ("amazingly", 0.293),
  ("completely", 0.293),
  ("considerably", 0.293),
  ("decidedly", 0.293),
  ("deeply", 0.293),
  ("enormously", 0.293),
  ("entirely", 0.293),
  ("especially", 0.293),
  ("exceptionally", 0.293),
  ("extremely", 0.293),
  ("greatly", 0.293),
  ("highly", 0.293),
  ("hugely", 0.293),
  ("incredibly", 0.293),
  ("intensely", 0.293),
  ("majorly", 0.293),
  ("more", 0.293),
  ("most", 0.293),
  ("particularly", 0.293),
  ("purely", 0.293),
  ("quite", 0.293),
  ("really", 0.293),
  ("remarkably", 0.293),
  ("so", 0.293),
  ("substantially", 0.293),
  ("thoroughly", 0.293),
  ("totally", 0.293),
  ("tremendously", 0.293),
  ("truly", 0.293),
  ("uber", 0.293),
  ("unbelievably", 0.293),
  ("unusually", 0.293),
  ("utterly", 0.293),
  ("very", 0.293),
  ("almost", -0.293),
  ("barely", -0.293),
  ("hardly", -0.293),
  ("less", -0.293),
  ("little", -0.293),
  ("marginally", -0.293),
  ("occasionally", -0.293),
  ("partly", -0.293),
  ("scarcely", -0.293),
  ("slightly", -0.293),
  ("somewhat", -0.293),
  ("sort", -0.293),
];

pub(super) const NEGATIONS: &[&str] = &[
  "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
  "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "never", "none", "nope", "nor",
  "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "wasnt", "werent", "without",
  "wont", "wouldnt", "rarely", "seldom", "despite",
];
