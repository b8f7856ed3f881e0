// file: src/error.rs
// version: 1.0.0
// guid: 3f1c9a72-58d4-4e0b-9a61-2b7e04c5d813

use thiserror::Error;

/// Result type alias for the logger registry
pub type Result<T> = std::result::Result<T, LoggerError>;

/// Error types for logger construction and configuration
#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to open log appender: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    #[error("Invalid date pattern: {0}")]
    InvalidDatePattern(String),

    #[error("Unknown log level: {0}")]
    InvalidLevel(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl LoggerError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new invalid date pattern error
    pub fn invalid_date_pattern(msg: impl Into<String>) -> Self {
        Self::InvalidDatePattern(msg.into())
    }

    /// Create a new invalid level error
    pub fn invalid_level(msg: impl Into<String>) -> Self {
        Self::InvalidLevel(msg.into())
    }
}
