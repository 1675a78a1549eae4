//! Score → ordinal label and confidence tier.

use serde::Serialize;

/// Five ordered sentiment classes, strongly negative first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    StronglyNegative,
    MildlyNegative,
    Neutral,
    MildlyPositive,
    StronglyPositive,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 5] = [
        SentimentLabel::StronglyNegative,
        SentimentLabel::MildlyNegative,
        SentimentLabel::Neutral,
        SentimentLabel::MildlyPositive,
        SentimentLabel::StronglyPositive,
    ];

    /// Ordinal position, 0 (strongly negative) to 4 (strongly positive).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            SentimentLabel::StronglyNegative => 0,
            SentimentLabel::MildlyNegative => 1,
            SentimentLabel::Neutral => 2,
            SentimentLabel::MildlyPositive => 3,
            SentimentLabel::StronglyPositive => 4,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::StronglyNegative => "strongly_negative",
            SentimentLabel::MildlyNegative => "mildly_negative",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::MildlyPositive => "mildly_positive",
            SentimentLabel::StronglyPositive => "strongly_positive",
        }
    }

    /// Label as shown to the Korean-speaking community.
    #[must_use]
    pub fn korean_name(self) -> &'static str {
        match self {
            SentimentLabel::StronglyNegative => "부정",
            SentimentLabel::MildlyNegative => "다소 부정",
            SentimentLabel::Neutral => "중립",
            SentimentLabel::MildlyPositive => "다소 긍정",
            SentimentLabel::StronglyPositive => "긍정",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Only produced by the degraded fallback.
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::Low => write!(f, "low"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::High => write!(f, "high"),
        }
    }
}

/// Map a score in `[0, 100]` onto its label band.
///
/// The neutral band is open on both ends, so exactly 45.0 is mildly negative
/// and exactly 55.0 is mildly positive.
#[must_use]
pub fn classify_score(score: f64) -> SentimentLabel {
    if score >= 75.0 {
        SentimentLabel::StronglyPositive
    } else if score >= 55.0 {
        SentimentLabel::MildlyPositive
    } else if score > 45.0 {
        SentimentLabel::Neutral
    } else if score >= 25.0 {
        SentimentLabel::MildlyNegative
    } else {
        SentimentLabel::StronglyNegative
    }
}

/// `High` when the score sits more than 20 points from the midpoint.
#[must_use]
pub fn confidence_for(score: f64) -> Confidence {
    if (score - 50.0).abs() > 20.0 {
        Confidence::High
    } else {
        Confidence::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(classify_score(100.0), SentimentLabel::StronglyPositive);
        assert_eq!(classify_score(75.0), SentimentLabel::StronglyPositive);
        assert_eq!(classify_score(74.99), SentimentLabel::MildlyPositive);
        assert_eq!(classify_score(55.0), SentimentLabel::MildlyPositive);
        assert_eq!(classify_score(54.99), SentimentLabel::Neutral);
        assert_eq!(classify_score(50.0), SentimentLabel::Neutral);
        assert_eq!(classify_score(45.01), SentimentLabel::Neutral);
        assert_eq!(classify_score(45.0), SentimentLabel::MildlyNegative);
        assert_eq!(classify_score(25.0), SentimentLabel::MildlyNegative);
        assert_eq!(classify_score(24.99), SentimentLabel::StronglyNegative);
        assert_eq!(classify_score(0.0), SentimentLabel::StronglyNegative);
    }

    #[test]
    fn labels_are_monotonic_in_score() {
        let mut previous = classify_score(0.0);
        for step in 0..=1000 {
            let label = classify_score(f64::from(step) / 10.0);
            assert!(label >= previous, "label went backwards at {step}");
            previous = label;
        }
    }

    #[test]
    fn confidence_threshold_is_strict() {
        assert_eq!(confidence_for(70.0), Confidence::Medium);
        assert_eq!(confidence_for(30.0), Confidence::Medium);
        assert_eq!(confidence_for(70.5), Confidence::High);
        assert_eq!(confidence_for(5.0), Confidence::High);
        assert_eq!(confidence_for(50.0), Confidence::Medium);
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, label) in SentimentLabel::ALL.into_iter().enumerate() {
            assert_eq!(label.index(), i);
        }
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&SentimentLabel::MildlyPositive).expect("serialize");
        assert_eq!(json, "\"mildly_positive\"");
        let json = serde_json::to_string(&Confidence::High).expect("serialize");
        assert_eq!(json, "\"high\"");
    }

    #[test]
    fn korean_names_match_community_vocabulary() {
        assert_eq!(SentimentLabel::StronglyPositive.korean_name(), "긍정");
        assert_eq!(SentimentLabel::Neutral.korean_name(), "중립");
        assert_eq!(SentimentLabel::MildlyNegative.korean_name(), "다소 부정");
    }
}
