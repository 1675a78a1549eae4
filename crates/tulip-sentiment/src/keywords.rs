//! Topic keyword extraction across a batch of posts.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::EmotionLexicon;
use crate::normalize::normalize_text;

/// Keyword count used when a caller does not ask for one.
pub const DEFAULT_TOP_N: usize = 3;

/// Runs of two or more Hangul syllables, Latin letters, or digits.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[가-힣a-zA-Z0-9]{2,}").expect("valid token regex"));

/// Rank the most frequent topical tokens across `texts`.
///
/// Tokens that are stopwords, emotion-lexicon terms, or purely numeric are
/// skipped, so the result never overlaps the sentiment vocabulary. Blank
/// entries are ignored. Ties keep first-seen order. Returns at most `top_n`
/// lower-cased tokens; an empty batch yields an empty list.
#[must_use]
pub fn extract_top_keywords<S: AsRef<str>>(
    lexicon: &EmotionLexicon,
    texts: &[S],
    top_n: usize,
) -> Vec<String> {
    if top_n == 0 {
        return Vec::new();
    }

    // Insertion-ordered counts: `slots` maps a token to its index in `counts`.
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for text in texts {
        let text = text.as_ref();
        if text.trim().is_empty() {
            continue;
        }

        let normalized = normalize_text(text);
        for token in TOKEN_RE.find_iter(&normalized).map(|m| m.as_str()) {
            let lowered = token.to_lowercase();
            if lexicon.is_excluded(&lowered) || lexicon.is_excluded(token) {
                continue;
            }
            if token.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }

            if let Some(&slot) = slots.get(&lowered) {
                counts[slot].1 += 1;
            } else {
                slots.insert(lowered.clone(), counts.len());
                counts.push((lowered, 1));
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(top_n);

    tracing::debug!(
        texts = texts.len(),
        keywords = counts.len(),
        "extracted topic keywords"
    );

    counts.into_iter().map(|(token, _)| token).collect()
}
