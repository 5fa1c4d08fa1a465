//! Character-reversing encoder. It is its own inverse.

use super::Encoder;
use crate::error::Result;

/// Reverses the Unicode scalar values of the data.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseEncoder;

impl Encoder for ReverseEncoder {
    fn name(&self) -> &'static str {
        "reverse"
    }

    fn encode(&self, data: &str) -> Result<String> {
        Ok(data.chars().rev().collect())
    }

    fn decode(&self, data: &str) -> Result<String> {
        self.encode(data)
    }
}
