//! Unified error types for twinmon
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error talking to the gateway
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error (file operations, terminal output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from a single snapshot fetch
///
/// None of these are fatal to the polling loop: a failed cycle is skipped
/// and the next scheduled tick acts as the retry.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Network-level failure (connect, timeout, DNS, ...)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Gateway responded with a non-success status code
    #[error("Gateway returned HTTP {0}")]
    Status(u16),

    /// Response body was not parseable as a sensor snapshot
    #[error("Malformed snapshot payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Failed to parse config file
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_status_display() {
        let err = TransportError::Status(502);
        assert_eq!(err.to_string(), "Gateway returned HTTP 502");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            key: "poll.interval_secs".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert!(err.to_string().contains("poll.interval_secs"));
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn test_error_conversion() {
        let transport = TransportError::Status(500);
        let app: AppError = transport.into();
        assert!(matches!(app, AppError::Transport(_)));
    }

    #[test]
    fn test_malformed_from_serde() {
        let serde_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = TransportError::from(serde_err);
        assert!(matches!(err, TransportError::Malformed(_)));
    }
}
