use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Optional YAML lexicon replacing the built-in table.
    pub lexicon_path: Option<PathBuf>,
    /// Texts longer than this many characters degrade to the fallback result.
    pub max_text_chars: usize,
    pub max_batch_texts: usize,
    pub default_top_n: usize,
    pub rate_limit_max_requests: usize,
    pub rate_limit_window_secs: u64,
}
