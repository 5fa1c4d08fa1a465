//! Command-line argument parsing for codec-stub.
//!
//! The protocol itself arrives on stdin; flags only pick the encoder and
//! where configuration and logs live.

use clap::Parser;
use std::path::PathBuf;

/// Environment variable consulted when `--encoder` is not given.
pub const ENCODER_ENV: &str = "CODEC_STUB_ENCODER";

/// Reads `<COMMAND> <DATA>` from stdin and prints the encoded or decoded data.
#[derive(Parser, Debug)]
#[command(name = "codec-stub")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Encoder to dispatch to (identity, base64, reverse)
    #[arg(short = 'e', long, value_name = "NAME", env = ENCODER_ENV)]
    pub encoder: Option<String>,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::config::Config::default_path)
    }

    /// Returns the encoder named on the command line or in the environment.
    pub fn encoder_name(&self) -> Option<&str> {
        self.encoder.as_deref()
    }
}
