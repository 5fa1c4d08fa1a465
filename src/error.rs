//! Error types for codec-stub.
//!
//! Defines the main error enum used throughout the application.

use thiserror::Error;

/// Main error type for stub operations.
#[derive(Error, Debug)]
pub enum StubError {
    /// The input ended before both the command and the data token were read.
    #[error("Insufficient input: expected {expected} tokens, found {found}")]
    InsufficientInput { expected: usize, found: usize },

    /// Failures raised by the encoder collaborator, passed through unchanged.
    #[error("Encoder error: {0}")]
    Encoder(String),

    /// Configuration errors (unknown encoder, malformed config file, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StubError {
    /// Creates an insufficient input error.
    pub fn insufficient_input(expected: usize, found: usize) -> Self {
        Self::InsufficientInput { expected, found }
    }

    /// Creates an encoder error with the given message.
    pub fn encoder(msg: impl Into<String>) -> Self {
        Self::Encoder(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::InsufficientInput { .. } => "Input Error",
            Self::Encoder(_) => "Encoder Error",
            Self::Config(_) => "Configuration Error",
            Self::Io(_) => "I/O Error",
        }
    }
}

/// Result type alias using StubError.
pub type Result<T> = std::result::Result<T, StubError>;
