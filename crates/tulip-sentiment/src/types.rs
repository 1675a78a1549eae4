use serde::Serialize;

use crate::classify::{Confidence, SentimentLabel};
use crate::probabilities::ClassProbabilities;
use crate::summary::BatchSummary;

/// Per-text lexicon hits. Owned by the call that computed them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmotionFeatures {
    pub has_positive: bool,
    pub has_negative: bool,
    pub has_very_negative: bool,
    pub has_swear: bool,
}

/// Sentiment verdict for one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Rule score in `[0.0, 100.0]`.
    pub score: f64,
    pub label: SentimentLabel,
    pub confidence: Confidence,
    /// Absent only on the degraded fallback path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_probabilities: Option<ClassProbabilities>,
}

impl AnalysisResult {
    /// The result returned when analysis of a text fails internally.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            score: 50.0,
            label: SentimentLabel::Neutral,
            confidence: Confidence::Low,
            class_probabilities: None,
        }
    }

    /// True when this result came from the fallback path rather than scoring.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.class_probabilities.is_none()
    }
}

/// A result paired with the text it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedText {
    pub text: String,
    /// Korean display name of the label, for community-facing output.
    pub label_ko: &'static str,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

/// Everything produced for one batch of texts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchAnalysis {
    pub results: Vec<AnalyzedText>,
    pub top_keywords: Vec<String>,
    pub summary: BatchSummary,
}
