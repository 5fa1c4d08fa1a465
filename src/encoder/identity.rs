//! Pass-through encoder.

use super::Encoder;
use crate::error::Result;

/// Returns the data unchanged in both directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityEncoder;

impl Encoder for IdentityEncoder {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn encode(&self, data: &str) -> Result<String> {
        Ok(data.to_string())
    }

    fn decode(&self, data: &str) -> Result<String> {
        Ok(data.to_string())
    }
}
