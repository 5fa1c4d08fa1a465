//! Mock encoders for testing.
//!
//! Provide deterministic, easily recognisable results so tests can tell which
//! direction the dispatcher chose.

use super::Encoder;
use crate::error::{Result, StubError};

/// Wraps the data in a tag naming the direction that was invoked.
///
/// `encode("x")` returns `ENC[x]`, `decode("x")` returns `DEC[x]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockEncoder;

impl MockEncoder {
    /// Creates a new mock encoder.
    pub fn new() -> Self {
        Self
    }
}

impl Encoder for MockEncoder {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn encode(&self, data: &str) -> Result<String> {
        Ok(format!("ENC[{data}]"))
    }

    fn decode(&self, data: &str) -> Result<String> {
        Ok(format!("DEC[{data}]"))
    }
}

/// An encoder that fails every call with the same message.
#[derive(Debug, Clone)]
pub struct FailingEncoder {
    message: String,
}

impl FailingEncoder {
    /// Creates a failing encoder with the given error message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Encoder for FailingEncoder {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn encode(&self, _data: &str) -> Result<String> {
        Err(StubError::encoder(self.message.clone()))
    }

    fn decode(&self, _data: &str) -> Result<String> {
        Err(StubError::encoder(self.message.clone()))
    }
}
