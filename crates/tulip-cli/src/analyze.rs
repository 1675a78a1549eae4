//! `analyze` and `keywords` command handlers.

use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use tulip_core::AppConfig;
use tulip_sentiment::{EmotionLexicon, SentimentAnalyzer};

/// Where the command reads its texts from.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum InputSource {
    Args(Vec<String>),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    pub(crate) fn new(texts: Vec<String>, file: Option<PathBuf>) -> Self {
        match (texts.is_empty(), file) {
            (false, _) => Self::Args(texts),
            (true, Some(path)) => Self::File(path),
            (true, None) => Self::Stdin,
        }
    }

    pub(crate) fn read(self) -> anyhow::Result<Vec<String>> {
        match self {
            Self::Args(texts) => Ok(texts),
            Self::File(path) => {
                let file = std::fs::File::open(&path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                read_lines(BufReader::new(file))
            }
            Self::Stdin => read_lines(std::io::stdin().lock()),
        }
    }
}

/// One text per line; whitespace-only lines are skipped.
pub(crate) fn read_lines<R: BufRead>(reader: R) -> anyhow::Result<Vec<String>> {
    let mut texts = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read input line")?;
        if !line.trim().is_empty() {
            texts.push(line);
        }
    }
    Ok(texts)
}

fn build_analyzer(
    config: &AppConfig,
    lexicon_override: Option<&Path>,
) -> anyhow::Result<SentimentAnalyzer> {
    let path = lexicon_override.or(config.lexicon_path.as_deref());
    let lexicon = EmotionLexicon::load(path)?;
    Ok(SentimentAnalyzer::new(Arc::new(lexicon)))
}

/// Analyze the batch and print it as pretty JSON.
///
/// # Errors
///
/// Returns an error if input cannot be read, the lexicon fails to load, or
/// stdout is closed.
pub(crate) fn run_analyze(
    config: &AppConfig,
    input: InputSource,
    top_n: Option<usize>,
    lexicon: Option<&Path>,
) -> anyhow::Result<()> {
    let analyzer = build_analyzer(config, lexicon)?;
    let texts = input.read()?;
    let top_n = top_n.unwrap_or(config.default_top_n);

    let batch = analyzer.analyze_batch(&texts, top_n);
    tracing::info!(
        texts = batch.summary.total_analyzed,
        average_score = batch.summary.average_score,
        "analysis complete"
    );

    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &batch)?;
    writeln!(out)?;
    Ok(())
}

/// Print the top keywords, one per line.
///
/// # Errors
///
/// Returns an error if input cannot be read, the lexicon fails to load, or
/// stdout is closed.
pub(crate) fn run_keywords(
    config: &AppConfig,
    input: InputSource,
    top_n: Option<usize>,
    lexicon: Option<&Path>,
) -> anyhow::Result<()> {
    let analyzer = build_analyzer(config, lexicon)?;
    let texts = input.read()?;
    let keywords = analyzer.extract_top_keywords(&texts, top_n.unwrap_or(config.default_top_n));

    let mut out = std::io::stdout().lock();
    for keyword in keywords {
        writeln!(out, "{keyword}")?;
    }
    Ok(())
}
