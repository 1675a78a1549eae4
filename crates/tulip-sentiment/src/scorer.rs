//! Rule-based score composer.

use crate::lexicon::EmotionLexicon;
use crate::normalize::normalize_text;
use crate::types::EmotionFeatures;

const BASELINE: f64 = 50.0;
const SWEAR_SCORE: f64 = 5.0;
const POSITIVE_WEIGHT: f64 = 20.0;
const NEGATIVE_WEIGHT: f64 = -20.0;
const VERY_NEGATIVE_WEIGHT: f64 = -35.0;
const EXCLAMATION_BONUS: f64 = 10.0;
const THUMBS_UP_BONUS: f64 = 5.0;

const THUMBS_UP: &str = "👍🏻";

/// Score raw text against the lexicon.
///
/// Normalizes `text`, then applies [`score_features`]. Returns a value in
/// `[0.0, 100.0]`; text with no lexicon hits scores the 50.0 baseline.
#[must_use]
pub fn lexicon_score(lexicon: &EmotionLexicon, text: &str) -> f64 {
    let normalized = normalize_text(text);
    score_features(lexicon.features(&normalized), &normalized)
}

/// Combine lexicon hits into a clamped score.
///
/// Any swear term pins the score to 5.0 and nothing else applies. Otherwise
/// each category adjusts the 50.0 baseline independently, so mixed posts can
/// cancel out. Positive posts earn extra for `!!` and for a thumbs-up.
#[must_use]
pub fn score_features(features: EmotionFeatures, normalized: &str) -> f64 {
    if features.has_swear {
        return SWEAR_SCORE;
    }

    let mut score = BASELINE;

    if features.has_positive {
        score += POSITIVE_WEIGHT;
    }
    if features.has_negative {
        score += NEGATIVE_WEIGHT;
    }
    if features.has_very_negative {
        score += VERY_NEGATIVE_WEIGHT;
    }

    if features.has_positive {
        // "!!!!" contains "!!", one bonus covers both.
        if normalized.contains("!!") {
            score += EXCLAMATION_BONUS;
        }
        if normalized.contains(THUMBS_UP) {
            score += THUMBS_UP_BONUS;
        }
    }

    score.clamp(0.0, 100.0)
}
