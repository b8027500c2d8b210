//! Sentiment - multi-method sentiment scoring for feedback datasets
//!
//! Three independent classifiers (lexicon polarity, weighted valence and a
//! keyword heuristic) score every row of a tabular dataset. The analyzed rows
//! feed a rule-driven insight generator that turns aggregate statistics into
//! five structured findings.
//!
//! ## Pipeline
//!
//! raw dataset → [`columns::resolve_text_column`] → [`DatasetAnalyzer`] →
//! [`insights::generate_insights`]

pub mod analyzer;
pub mod columns;
pub mod dataset;
pub mod error;
pub mod insights;
pub mod keyword;
pub mod label;
pub mod lexicon;
pub mod summary;
pub mod tokens;
pub mod valence;

pub use analyzer::{AnalyzedRecord, ColumnSidecar, DatasetAnalysis, DatasetAnalyzer, TextAnalysis};
pub use columns::{resolve_text_column, ColumnResolution};
pub use dataset::{CellValue, Column, ColumnKind, TabularDataset};
pub use error::{AnalysisError, Result};
pub use insights::{generate_insights, Insight, InsightKind, Priority, Trend};
pub use keyword::{KeywordClassifier, KeywordScore};
pub use label::SentimentLabel;
pub use lexicon::{LexiconClassifier, LexiconScore, PatternLexicon, PolarityModel, PolarityScores};
pub use summary::{AggregateSentiment, SentimentDistribution, SummaryStats};
pub use valence::{ValenceClassifier, ValenceLexicon, ValenceModel, ValenceScore, ValenceScores};
