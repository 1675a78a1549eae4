mod analyze;
mod lexicon;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::lexicon::LexiconCommands;

#[derive(Debug, Parser)]
#[command(name = "tulip-cli")]
#[command(about = "Lexical sentiment and keyword analysis for stock-forum posts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score texts and print results, top keywords, and a batch summary as JSON
    Analyze {
        /// Texts to analyze; read from --file or stdin when omitted
        texts: Vec<String>,
        /// Read one text per line from this file
        #[arg(long, conflicts_with = "texts")]
        file: Option<PathBuf>,
        /// Number of keywords to report
        #[arg(long)]
        top_n: Option<usize>,
        /// Lexicon YAML file to use instead of the configured one
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },
    /// Print the most frequent topical keywords, one per line
    Keywords {
        /// Texts to scan; read from --file or stdin when omitted
        texts: Vec<String>,
        /// Read one text per line from this file
        #[arg(long, conflicts_with = "texts")]
        file: Option<PathBuf>,
        /// Number of keywords to report
        #[arg(long)]
        top_n: Option<usize>,
        /// Lexicon YAML file to use instead of the configured one
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },
    /// Inspect lexicon files
    Lexicon {
        #[command(subcommand)]
        command: LexiconCommands,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = tulip_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze {
            texts,
            file,
            top_n,
            lexicon,
        } => {
            let input = analyze::InputSource::new(texts, file);
            analyze::run_analyze(&config, input, top_n, lexicon.as_deref())
        }
        Commands::Keywords {
            texts,
            file,
            top_n,
            lexicon,
        } => {
            let input = analyze::InputSource::new(texts, file);
            analyze::run_keywords(&config, input, top_n, lexicon.as_deref())
        }
        Commands::Lexicon { command } => match command {
            LexiconCommands::Check { path } => lexicon::run_lexicon_check(path.as_deref()),
        },
    }
}
