//! Error types for corpus analysis

use thiserror::Error;

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Analysis error types
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Invalid clustering setup (cluster count, empty corpus, empty vocabulary)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// k-means failed while fitting
    #[error("Clustering error: {0}")]
    Clustering(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Corpus (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AnalysisError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn clustering<S: Into<String>>(msg: S) -> Self {
        Self::Clustering(msg.into())
    }

    /// True for errors raised before any computation started
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
