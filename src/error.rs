// src/error.rs

//! Unified error handling for the feed aggregator.

use thiserror::Error;

/// Result type alias for aggregator operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
///
/// Only failures that should stop the run end up here. Problems with a
/// single source feed are reported as [`FeedError`] instead.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be built
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// RSS document could not be serialized
    #[error("RSS serialize error: {0}")]
    Serialize(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a serialization error.
    pub fn serialize(message: impl std::fmt::Display) -> Self {
        Self::Serialize(message.to_string())
    }
}

/// Why a single source feed was skipped.
#[derive(Error, Debug)]
pub enum FeedError {
    /// Connection, TLS or timeout failure
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Server answered with something other than 200
    #[error("HTTP status {0}")]
    Status(u16),

    /// Body was not a well-formed RSS document
    #[error("parse error: {0}")]
    Parse(String),
}

impl FeedError {
    /// Short label used in the run summary.
    pub fn kind(&self) -> &'static str {
        match self {
            FeedError::Network(_) => "network",
            FeedError::Status(_) => "status",
            FeedError::Parse(_) => "parse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_error_display() {
        assert_eq!(FeedError::Status(503).to_string(), "HTTP status 503");
        assert_eq!(
            FeedError::Parse("unexpected end".into()).to_string(),
            "parse error: unexpected end"
        );
    }

    #[test]
    fn test_feed_error_kind() {
        assert_eq!(FeedError::Status(404).kind(), "status");
        assert_eq!(FeedError::Parse(String::new()).kind(), "parse");
    }
}
