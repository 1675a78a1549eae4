//! Batch-level aggregation of per-text results.

use serde::Serialize;

use crate::classify::{confidence_for, Confidence, SentimentLabel};
use crate::probabilities::round2;
use crate::types::AnalysisResult;

/// How far the batch average leans from neutral, banded like the labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentStrength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl SentimentStrength {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            SentimentStrength::VeryStrong
        } else if score >= 55.0 {
            SentimentStrength::Strong
        } else if score > 45.0 {
            SentimentStrength::Moderate
        } else if score >= 25.0 {
            SentimentStrength::Weak
        } else {
            SentimentStrength::VeryWeak
        }
    }
}

/// Share of one label within a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelShare {
    pub label: SentimentLabel,
    pub count: usize,
    /// Percentage of the batch, rounded to two decimals.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total_analyzed: usize,
    pub average_score: f64,
    pub dominant_label: SentimentLabel,
    /// Labels in order of first appearance in the batch.
    pub distribution: Vec<LabelShare>,
    pub overall_confidence: Confidence,
    pub strength: SentimentStrength,
}

impl BatchSummary {
    fn empty() -> Self {
        Self {
            total_analyzed: 0,
            average_score: 50.0,
            dominant_label: SentimentLabel::Neutral,
            distribution: Vec::new(),
            overall_confidence: Confidence::Low,
            strength: SentimentStrength::Moderate,
        }
    }
}

/// Aggregate the results of one batch.
///
/// The dominant label is the most frequent one; on a tie the label seen first
/// wins. Confidence is `Low` when the batch is empty or fully degraded.
#[must_use]
pub fn summarize<'a, I>(results: I) -> BatchSummary
where
    I: IntoIterator<Item = &'a AnalysisResult>,
{
    let mut total = 0_usize;
    let mut score_sum = 0.0_f64;
    let mut degraded = 0_usize;
    let mut distribution: Vec<LabelShare> = Vec::new();

    for result in results {
        total += 1;
        score_sum += result.score;
        if result.is_degraded() {
            degraded += 1;
        }
        match distribution.iter_mut().find(|s| s.label == result.label) {
            Some(share) => share.count += 1,
            None => distribution.push(LabelShare {
                label: result.label,
                count: 1,
                percentage: 0.0,
            }),
        }
    }

    if total == 0 {
        return BatchSummary::empty();
    }

    #[allow(clippy::cast_precision_loss)]
    let denom = total as f64;
    for share in &mut distribution {
        #[allow(clippy::cast_precision_loss)]
        let count = share.count as f64;
        share.percentage = round2(count / denom * 100.0);
    }

    let mut dominant = &distribution[0];
    for share in &distribution[1..] {
        if share.count > dominant.count {
            dominant = share;
        }
    }
    let dominant_label = dominant.label;

    let average_score = round2(score_sum / denom);
    let overall_confidence = if degraded == total {
        Confidence::Low
    } else {
        confidence_for(average_score)
    };

    BatchSummary {
        total_analyzed: total,
        average_score,
        dominant_label,
        distribution,
        overall_confidence,
        strength: SentimentStrength::from_score(average_score),
    }
}
