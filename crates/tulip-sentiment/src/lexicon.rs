//! Emotion lexicon and keyword exclusion set.

use std::collections::HashSet;
use std::path::Path;

use tulip_core::LexiconFile;

use crate::error::SentimentError;
use crate::types::EmotionFeatures;

/// The authoritative lexicon table, compiled into the binary.
pub const BUILTIN_LEXICON_YAML: &str = include_str!("../../../config/lexicon.yaml");

/// Read-only emotion term sets, built once at startup and shared by reference.
///
/// Terms are stored lower-cased so they match against normalized text.
#[derive(Debug, Clone)]
pub struct EmotionLexicon {
    positive: Vec<String>,
    negative: Vec<String>,
    very_negative: Vec<String>,
    swear: Vec<String>,
    stopwords: HashSet<String>,
    /// Stopwords plus every emotion term; never reported as a topic keyword.
    excluded: HashSet<String>,
}

impl EmotionLexicon {
    /// Parse the compiled-in lexicon table.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Lexicon`] if the embedded table fails validation.
    pub fn builtin() -> Result<Self, SentimentError> {
        let file = tulip_core::parse_lexicon(BUILTIN_LEXICON_YAML)?;
        Ok(Self::from_file(file))
    }

    /// Load a lexicon from `path`, or the built-in table when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Lexicon`] if the file cannot be read or is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, SentimentError> {
        match path {
            Some(path) => {
                let file = tulip_core::load_lexicon(path)?;
                tracing::info!(path = %path.display(), "loaded lexicon from file");
                Ok(Self::from_file(file))
            }
            None => Self::builtin(),
        }
    }

    /// Build from an already validated [`LexiconFile`].
    #[must_use]
    pub fn from_file(file: LexiconFile) -> Self {
        let lower = |terms: Vec<String>| -> Vec<String> {
            terms.into_iter().map(|t| t.to_lowercase()).collect()
        };

        let positive = lower(file.positive);
        let negative = lower(file.negative);
        let very_negative = lower(file.very_negative);
        let swear = lower(file.swear);
        let stopwords: HashSet<String> = lower(file.stopwords).into_iter().collect();

        let excluded = stopwords
            .iter()
            .chain(&positive)
            .chain(&negative)
            .chain(&very_negative)
            .chain(&swear)
            .cloned()
            .collect();

        Self {
            positive,
            negative,
            very_negative,
            swear,
            stopwords,
            excluded,
        }
    }

    /// Test each category for a substring hit in already normalized text.
    ///
    /// Matching is not token-aware: a short term such as `오` fires inside any
    /// longer word that contains it.
    #[must_use]
    pub fn features(&self, normalized: &str) -> EmotionFeatures {
        let any_in = |terms: &[String]| terms.iter().any(|t| normalized.contains(t.as_str()));

        EmotionFeatures {
            has_positive: any_in(&self.positive),
            has_negative: any_in(&self.negative),
            has_very_negative: any_in(&self.very_negative),
            has_swear: any_in(&self.swear),
        }
    }

    /// Whether `token` is a stopword or any emotion term.
    #[must_use]
    pub fn is_excluded(&self, token: &str) -> bool {
        self.excluded.contains(token)
    }

    /// Term counts as `(positive, negative, very_negative, swear, stopwords)`.
    #[must_use]
    pub fn category_sizes(&self) -> (usize, usize, usize, usize, usize) {
        (
            self.positive.len(),
            self.negative.len(),
            self.very_negative.len(),
            self.swear.len(),
            self.stopwords.len(),
        )
    }
}
