//! Domain error types

use thiserror::Error;

/// Error when a slot identifier is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotIdError {
    #[error("Slot id must not be empty")]
    Empty,

    #[error("Slot id is too long ({len} characters, maximum is {max})")]
    TooLong { len: usize, max: usize },

    #[error("Invalid slot id: \"{input}\". Use letters, digits, '-', '_' or '.'")]
    InvalidCharacters { input: String },

    #[error("Invalid slot id: \"{input}\" is a reserved path segment")]
    Reserved { input: String },
}

/// Error when a fetched page does not have the expected layout
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageParseError {
    #[error("content area not found on page ({body_len} bytes received)")]
    MarkerNotFound { body_len: usize },
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
