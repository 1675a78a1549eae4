//! Stateless analysis facade.

use std::sync::Arc;

use tulip_core::AppConfig;

use crate::classify::{classify_score, confidence_for};
use crate::error::SentimentError;
use crate::keywords::extract_top_keywords;
use crate::lexicon::EmotionLexicon;
use crate::normalize::normalize_text;
use crate::probabilities::synthesize_probabilities;
use crate::scorer::score_features;
use crate::summary::summarize;
use crate::types::{AnalysisResult, AnalyzedText, BatchAnalysis};

/// Entry point for sentiment and keyword analysis.
///
/// Holds only the shared, immutable lexicon, so clones are cheap and calls
/// never interfere with each other.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: Arc<EmotionLexicon>,
}

impl SentimentAnalyzer {
    #[must_use]
    pub fn new(lexicon: Arc<EmotionLexicon>) -> Self {
        Self { lexicon }
    }

    /// Build an analyzer from application config, loading the lexicon once.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Lexicon`] if the configured lexicon file is
    /// unreadable or invalid.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, SentimentError> {
        let lexicon = EmotionLexicon::load(config.lexicon_path.as_deref())?;
        Ok(Self::new(Arc::new(lexicon)))
    }

    #[must_use]
    pub fn lexicon(&self) -> &EmotionLexicon {
        &self.lexicon
    }

    /// Analyze one text. Never fails.
    ///
    /// Any internal error is logged and replaced by
    /// [`AnalysisResult::fallback`], which carries `Low` confidence and no
    /// class probabilities.
    #[must_use]
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        or_fallback(self.try_analyze(text))
    }

    /// Analyze one text, surfacing internal failures.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::NonFiniteScore`] or
    /// [`SentimentError::DegenerateDistribution`] if scoring misbehaves.
    pub fn try_analyze(&self, text: &str) -> Result<AnalysisResult, SentimentError> {
        let normalized = normalize_text(text);
        let features = self.lexicon.features(&normalized);
        let score = score_features(features, &normalized);
        if !score.is_finite() {
            return Err(SentimentError::NonFiniteScore(score));
        }

        let class_probabilities = synthesize_probabilities(score)?;
        let label = classify_score(score);

        tracing::debug!(score, label = %label, ?features, "scored text");

        Ok(AnalysisResult {
            score,
            label,
            confidence: confidence_for(score),
            class_probabilities: Some(class_probabilities),
        })
    }

    /// Most frequent topical tokens across `texts`; see [`extract_top_keywords`].
    #[must_use]
    pub fn extract_top_keywords<S: AsRef<str>>(&self, texts: &[S], top_n: usize) -> Vec<String> {
        extract_top_keywords(&self.lexicon, texts, top_n)
    }

    /// Analyze every text, rank keywords, and summarize, in one pass over the batch.
    #[must_use]
    pub fn analyze_batch<S: AsRef<str>>(&self, texts: &[S], top_n: usize) -> BatchAnalysis {
        let results: Vec<AnalyzedText> = texts
            .iter()
            .map(|text| {
                let result = self.analyze(text.as_ref());
                AnalyzedText {
                    text: text.as_ref().to_string(),
                    label_ko: result.label.korean_name(),
                    result,
                }
            })
            .collect();

        let summary = summarize(results.iter().map(|r| &r.result));
        let top_keywords = self.extract_top_keywords(texts, top_n);

        BatchAnalysis {
            results,
            top_keywords,
            summary,
        }
    }
}

fn or_fallback(outcome: Result<AnalysisResult, SentimentError>) -> AnalysisResult {
    outcome.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "sentiment analysis degraded to fallback");
        AnalysisResult::fallback()
    })
}
