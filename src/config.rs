//! Configuration management for codec-stub.
//!
//! Handles loading configuration from a TOML file, with the encoder choice
//! overridable from the command line or environment.

use crate::encoder::EncoderKind;
use crate::error::{Result, StubError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for codec-stub.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Encoder selection.
    #[serde(default)]
    pub encoder: EncoderConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Encoder configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EncoderConfig {
    /// Encoder name: "identity", "base64" or "reverse".
    pub kind: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Filter directives (e.g., "debug" or "codec_stub=trace").
    /// `RUST_LOG` takes precedence when set.
    pub filter: Option<String>,
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("codec-stub")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the default configuration.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| StubError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            StubError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }

    /// Resolves the encoder to use.
    ///
    /// Precedence:
    /// 1. `cli_choice` (from `--encoder` or `CODEC_STUB_ENCODER`)
    /// 2. `encoder.kind` from the config file
    /// 3. The identity encoder
    pub fn resolve_encoder(&self, cli_choice: Option<&str>) -> Result<EncoderKind> {
        match cli_choice.or(self.encoder.kind.as_deref()) {
            Some(name) => name.parse(),
            None => Ok(EncoderKind::default()),
        }
    }

    /// Returns the configured log filter, if any.
    pub fn log_filter(&self) -> Option<&str> {
        self.logging.filter.as_deref()
    }
}
