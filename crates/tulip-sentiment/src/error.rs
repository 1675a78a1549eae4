use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("score is not a finite number: {0}")]
    NonFiniteScore(f64),

    #[error("class weights sum to zero for score {score}")]
    DegenerateDistribution { score: f64 },

    #[error("lexicon error: {0}")]
    Lexicon(#[from] tulip_core::ConfigError),
}
