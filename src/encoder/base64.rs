//! Base64 encoder.
//!
//! Uses the standard alphabet with padding. The alphabet contains no
//! whitespace, so an encoded token always survives the trip through the
//! manager as a single token.

use super::Encoder;
use crate::error::{Result, StubError};
use base64::{engine::general_purpose::STANDARD, Engine};

/// Encodes the UTF-8 bytes of the data as base64.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Encoder;

impl Encoder for Base64Encoder {
    fn name(&self) -> &'static str {
        "base64"
    }

    fn encode(&self, data: &str) -> Result<String> {
        Ok(STANDARD.encode(data.as_bytes()))
    }

    fn decode(&self, data: &str) -> Result<String> {
        let bytes = STANDARD
            .decode(data)
            .map_err(|e| StubError::encoder(format!("Invalid base64 input: {e}")))?;

        String::from_utf8(bytes)
            .map_err(|e| StubError::encoder(format!("Decoded data is not valid UTF-8: {e}")))
    }
}
