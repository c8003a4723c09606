use thiserror::Error;

/// Main application error type that aggregates domain-specific errors
#[derive(Error, Debug)]
pub enum GogError {
    /// Configuration layer errors
    #[error(transparent)]
    Config(#[from] crate::config::error::ConfigError),

    /// Document layer errors (preconditions, lookups, file access)
    #[error(transparent)]
    Document(#[from] crate::document::error::DocumentError),

    /// Model serialization errors
    #[error("Failed to serialize source model: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for gog operations
pub type Result<T> = std::result::Result<T, GogError>;
