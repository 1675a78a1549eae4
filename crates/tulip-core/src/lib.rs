pub mod app_config;
pub mod config;
pub mod lexicon;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use lexicon::{load_lexicon, parse_lexicon, LexiconFile, LEXICON_FORMAT_VERSION};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read lexicon file {path}: {source}")]
    LexiconFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse lexicon file: {0}")]
    LexiconFileParse(#[from] serde_yaml::Error),

    #[error("lexicon validation failed: {0}")]
    Validation(String),
}
