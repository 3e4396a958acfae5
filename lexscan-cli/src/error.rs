//! Error handling module for the lexscan CLI.
//!
//! Scanning itself never fails; these errors come from reading inputs,
//! loading configuration and validating custom rule tables.

use lexscan_lex::RuleError;
use thiserror::Error;

/// Main error type for the lexscan CLI application.
#[derive(Error, Debug)]
pub enum LexscanError {
    /// Error when configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when command-line input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when the configured rule tables are invalid.
    #[error("Invalid rules: {0}")]
    Rules(#[from] RuleError),
}

/// Result type alias using LexscanError.
pub type Result<T> = std::result::Result<T, LexscanError>;
