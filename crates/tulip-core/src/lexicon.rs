//! Lexicon data file: schema, loading and validation.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// The only lexicon file layout this build understands.
pub const LEXICON_FORMAT_VERSION: u32 = 1;

/// On-disk shape of the emotion lexicon and keyword stopwords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconFile {
    pub version: u32,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub very_negative: Vec<String>,
    pub swear: Vec<String>,
    #[serde(default)]
    pub stopwords: Vec<String>,
}

impl LexiconFile {
    fn categories(&self) -> [(&'static str, &[String]); 5] {
        [
            ("positive", self.positive.as_slice()),
            ("negative", self.negative.as_slice()),
            ("very_negative", self.very_negative.as_slice()),
            ("swear", self.swear.as_slice()),
            ("stopwords", self.stopwords.as_slice()),
        ]
    }
}

/// Load and validate a lexicon from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_lexicon(path: &Path) -> Result<LexiconFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LexiconFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_lexicon(&content)
}

/// Parse and validate a lexicon from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_lexicon(yaml: &str) -> Result<LexiconFile, ConfigError> {
    let lexicon: LexiconFile = serde_yaml::from_str(yaml)?;
    validate_lexicon(&lexicon)?;
    Ok(lexicon)
}

fn validate_lexicon(lexicon: &LexiconFile) -> Result<(), ConfigError> {
    if lexicon.version != LEXICON_FORMAT_VERSION {
        return Err(ConfigError::Validation(format!(
            "unsupported lexicon version {}; expected {LEXICON_FORMAT_VERSION}",
            lexicon.version
        )));
    }

    for (name, terms) in lexicon.categories() {
        let mut seen = HashSet::new();
        for term in terms {
            if term.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "category '{name}' contains a blank term"
                )));
            }
            if !seen.insert(term.to_lowercase()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate term '{term}' in category '{name}'"
                )));
            }
        }
    }

    // Terms are matched lowercased, so overlap is checked on the folded forms.
    // negative / very_negative may share intensifiers; the rest must not overlap.
    let exclusive_pairs = [
        ("positive", &lexicon.positive, "negative", &lexicon.negative),
        (
            "positive",
            &lexicon.positive,
            "very_negative",
            &lexicon.very_negative,
        ),
        ("positive", &lexicon.positive, "swear", &lexicon.swear),
        ("swear", &lexicon.swear, "negative", &lexicon.negative),
        (
            "swear",
            &lexicon.swear,
            "very_negative",
            &lexicon.very_negative,
        ),
    ];

    for (left_name, left, right_name, right) in exclusive_pairs {
        let left: HashSet<String> = left.iter().map(|t| t.to_lowercase()).collect();
        if let Some(term) = right.iter().find(|t| left.contains(&t.to_lowercase())) {
            return Err(ConfigError::Validation(format!(
                "term '{term}' appears in both '{left_name}' and '{right_name}'"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "lexicon_test.rs"]
mod tests;
