//! Lexical sentiment and keyword engine for stock-community posts.
//!
//! Scores short, noisy posts against a curated emotion lexicon, maps the score
//! onto five ordinal labels, and ranks topical keywords across a batch of
//! posts. Every operation is a pure function of its input and the immutable
//! [`EmotionLexicon`], so one analyzer can be shared across threads freely.

pub mod analyzer;
pub mod classify;
pub mod error;
pub mod keywords;
pub mod lexicon;
pub mod normalize;
pub mod probabilities;
pub mod scorer;
pub mod summary;
pub mod types;

pub use analyzer::SentimentAnalyzer;
pub use classify::{classify_score, confidence_for, Confidence, SentimentLabel};
pub use error::SentimentError;
pub use keywords::{extract_top_keywords, DEFAULT_TOP_N};
pub use lexicon::{EmotionLexicon, BUILTIN_LEXICON_YAML};
pub use normalize::normalize_text;
pub use probabilities::{synthesize_probabilities, ClassProbabilities};
pub use scorer::lexicon_score;
pub use summary::{summarize, BatchSummary, LabelShare, SentimentStrength};
pub use types::{AnalysisResult, AnalyzedText, BatchAnalysis, EmotionFeatures};
