//! Encoder abstraction for codec-stub.
//!
//! The dispatcher only sees the [`Encoder`] trait; concrete encoders are
//! picked at runtime through [`EncoderKind`] and [`create_encoder`].

mod base64;
mod identity;
mod mock;
mod reverse;

pub use self::base64::Base64Encoder;
pub use identity::IdentityEncoder;
pub use mock::{FailingEncoder, MockEncoder};
pub use reverse::ReverseEncoder;

use crate::error::{Result, StubError};
use std::str::FromStr;

/// Trait implemented by every encoder the stub can drive.
///
/// Both directions take the data token verbatim and return the text to print.
/// Errors are reported to the manager as an abnormal exit.
pub trait Encoder: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Encodes the given plaintext.
    fn encode(&self, data: &str) -> Result<String>;

    /// Decodes the given ciphertext.
    fn decode(&self, data: &str) -> Result<String>;
}

/// Built-in encoders selectable from the command line or config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncoderKind {
    /// Passes data through unchanged.
    #[default]
    Identity,
    /// Standard padded base64 of the UTF-8 bytes.
    Base64,
    /// Reverses the characters of the data.
    Reverse,
}

impl EncoderKind {
    /// Returns the encoder name as written in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Base64 => "base64",
            Self::Reverse => "reverse",
        }
    }
}

impl FromStr for EncoderKind {
    type Err = StubError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "identity" => Ok(Self::Identity),
            "base64" => Ok(Self::Base64),
            "reverse" => Ok(Self::Reverse),
            _ => Err(StubError::config(format!(
                "Unknown encoder '{s}'. Expected: identity, base64, or reverse"
            ))),
        }
    }
}

impl std::fmt::Display for EncoderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Creates the encoder for the given kind.
pub fn create_encoder(kind: EncoderKind) -> Box<dyn Encoder> {
    match kind {
        EncoderKind::Identity => Box::new(IdentityEncoder),
        EncoderKind::Base64 => Box::new(Base64Encoder),
        EncoderKind::Reverse => Box::new(ReverseEncoder),
    }
}
