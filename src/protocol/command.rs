//! Request parsing for the stub protocol.
//!
//! A request is two tokens: a command selecting the direction, then the data
//! to pass to the encoder.

use super::tokenizer::TokenReader;
use crate::error::{Result, StubError};
use std::io::BufRead;

/// Number of tokens that make up one request.
pub const REQUEST_TOKENS: usize = 2;

/// The operation a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run the encoder forwards.
    Encode,
    /// Run the encoder backwards.
    Decode,
}

impl Command {
    /// The only token that selects [`Command::Encode`].
    pub const ENCODE_TOKEN: &'static str = "ENCODE";

    /// Maps a command token to a command.
    ///
    /// Matching is exact and case-sensitive. Every token other than `ENCODE`
    /// selects [`Command::Decode`], including `DECODE`, `encode` and typos;
    /// managers only ever send the two upper-case forms.
    pub fn from_token(token: &str) -> Self {
        if token == Self::ENCODE_TOKEN {
            Self::Encode
        } else {
            Self::Decode
        }
    }

    /// Returns the canonical token for this command.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Encode => "ENCODE",
            Self::Decode => "DECODE",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully read request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Which direction to run the encoder.
    pub command: Command,
    /// The opaque payload, passed to the encoder verbatim.
    pub data: String,
}

impl Request {
    /// Reads the command token and the data token.
    ///
    /// Fails with [`StubError::InsufficientInput`] if the input ends first.
    pub fn read_from<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<Self> {
        let command = tokens
            .next_token()?
            .ok_or_else(|| StubError::insufficient_input(REQUEST_TOKENS, 0))?;
        let data = tokens
            .next_token()?
            .ok_or_else(|| StubError::insufficient_input(REQUEST_TOKENS, 1))?;

        Ok(Self {
            command: Command::from_token(&command),
            data,
        })
    }
}
