//! Lexicon inspection commands.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use tulip_sentiment::EmotionLexicon;

/// Sub-commands available under `lexicon`.
#[derive(Debug, Subcommand)]
pub enum LexiconCommands {
    /// Validate a lexicon file and print its category sizes
    Check {
        /// Lexicon YAML file; the built-in table is checked when omitted
        path: Option<PathBuf>,
    },
}

pub(crate) fn describe(source: Option<&Path>, lexicon: &EmotionLexicon) -> String {
    let (positive, negative, very_negative, swear, stopwords) = lexicon.category_sizes();
    let name = source.map_or_else(|| "built-in".to_string(), |p| p.display().to_string());
    format!(
        "{name}: ok\n  positive: {positive}\n  negative: {negative}\n  \
         very_negative: {very_negative}\n  swear: {swear}\n  stopwords: {stopwords}"
    )
}

/// Load and validate the lexicon at `path`, printing a short report.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails validation.
pub(crate) fn run_lexicon_check(path: Option<&Path>) -> anyhow::Result<()> {
    let lexicon = EmotionLexicon::load(path)?;
    println!("{}", describe(path, &lexicon));
    Ok(())
}
