//! Request dispatch for codec-stub.
//!
//! Reads one request from the input, routes it to the encoder and writes the
//! single result line. There is no loop and no retry: one process serves one
//! request.

use crate::encoder::Encoder;
use crate::error::Result;
use crate::protocol::{Command, Request, TokenReader};
use std::io::{BufRead, Write};
use tracing::{debug, trace};

/// Routes requests to an encoder.
pub struct CommandDispatcher {
    encoder: Box<dyn Encoder>,
}

impl CommandDispatcher {
    /// Creates a dispatcher around the given encoder.
    pub fn new(encoder: Box<dyn Encoder>) -> Self {
        Self { encoder }
    }

    /// Returns the name of the encoder requests are routed to.
    pub fn encoder_name(&self) -> &'static str {
        self.encoder.name()
    }

    /// Runs the encoder in the direction the request asks for.
    pub fn execute(&self, request: &Request) -> Result<String> {
        debug!(
            command = %request.command,
            encoder = self.encoder.name(),
            "Dispatching request"
        );
        trace!(data_len = request.data.len(), "Request payload");

        let result = match request.command {
            Command::Encode => self.encoder.encode(&request.data)?,
            Command::Decode => self.encoder.decode(&request.data)?,
        };

        trace!(result_len = result.len(), "Encoder result");
        Ok(result)
    }

    /// Serves exactly one request from `input`, writing the result line to
    /// `output`.
    ///
    /// Nothing is written unless both tokens were read and the encoder
    /// succeeded. The output is flushed before returning so the manager sees
    /// the answer while the process is still alive.
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> Result<()> {
        let mut tokens = TokenReader::new(input);
        let request = Request::read_from(&mut tokens)?;
        let result = self.execute(&request)?;

        writeln!(output, "{result}")?;
        output.flush()?;
        Ok(())
    }
}

impl std::fmt::Debug for CommandDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDispatcher")
            .field("encoder", &self.encoder.name())
            .finish()
    }
}
