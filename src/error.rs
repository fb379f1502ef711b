//! Error types for the discography browser infrastructure
//!
//! The navigation, gesture and ranking core never fails: bad input degrades to
//! a no-op. These errors only cover the plumbing around it (files, parsing,
//! configuration).

use thiserror::Error;

/// Result type for fallible infrastructure operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML config file could not be parsed
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
