//! Pseudo class distribution derived from a single score.
//!
//! This is a presentation shape for consumers that expect per-class
//! percentages. It is not a calibrated probability: the five values are a
//! triangular kernel of half-width 1.5 centred on `score / 25`, normalized to
//! sum to 100.

use serde::Serialize;

use crate::classify::SentimentLabel;
use crate::error::SentimentError;

const KERNEL_HALF_WIDTH: f64 = 1.5;
const BAND_WIDTH: f64 = 25.0;

/// Percentage per ordinal label, each rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassProbabilities {
    pub strongly_negative: f64,
    pub mildly_negative: f64,
    pub neutral: f64,
    pub mildly_positive: f64,
    pub strongly_positive: f64,
}

impl ClassProbabilities {
    fn from_array(values: [f64; 5]) -> Self {
        let [strongly_negative, mildly_negative, neutral, mildly_positive, strongly_positive] =
            values;
        Self {
            strongly_negative,
            mildly_negative,
            neutral,
            mildly_positive,
            strongly_positive,
        }
    }

    /// Values in label order, strongly negative first.
    #[must_use]
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.strongly_negative,
            self.mildly_negative,
            self.neutral,
            self.mildly_positive,
            self.strongly_positive,
        ]
    }

    /// Label with the largest share; the lower index wins a tie.
    #[must_use]
    pub fn argmax(&self) -> SentimentLabel {
        let values = self.as_array();
        let mut best = 0;
        for (i, value) in values.iter().enumerate().skip(1) {
            if *value > values[best] {
                best = i;
            }
        }
        SentimentLabel::ALL[best]
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

/// Spread `score` into a five-way percentage distribution.
///
/// # Errors
///
/// Returns [`SentimentError::DegenerateDistribution`] if every kernel weight
/// is zero, which only happens for a score outside `[0, 100]`.
pub fn synthesize_probabilities(score: f64) -> Result<ClassProbabilities, SentimentError> {
    let target = score / BAND_WIDTH;

    let mut weights = [0.0_f64; 5];
    for (i, weight) in weights.iter_mut().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let distance = (target - i as f64).abs();
        *weight = (KERNEL_HALF_WIDTH - distance).max(0.0);
    }

    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return Err(SentimentError::DegenerateDistribution { score });
    }

    Ok(ClassProbabilities::from_array(
        weights.map(|w| round2(w / total * 100.0)),
    ))
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
