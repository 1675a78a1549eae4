/// Canonicalize raw post text.
///
/// Lower-cases, collapses every run of whitespace to a single space, and trims
/// both ends. Total over all inputs; the empty string maps to itself.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
