//! Error types for ReviewPulse

/// Result type alias using ReviewPulse's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for ReviewPulse operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Sentiment scorer failures (model, network, lexicon setup)
    #[error("scorer error: {0}")]
    Scorer(String),

    /// A polarity/subjectivity pair outside its bounds or not finite
    #[error("invalid sentiment: {0}")]
    InvalidSentiment(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a new scorer error
    pub fn scorer(msg: impl Into<String>) -> Self {
        Self::Scorer(msg.into())
    }

    /// Create a new invalid sentiment error
    pub fn invalid_sentiment(msg: impl Into<String>) -> Self {
        Self::InvalidSentiment(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
