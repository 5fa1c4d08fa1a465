//! Logging configuration for codec-stub.
//!
//! Stdout carries the protocol answer, so logs never go there: they are
//! written to stderr, or to a file when one is requested.

use std::fs::{self, File};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor the config file sets one.
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the log filter.
///
/// `RUST_LOG` wins; otherwise the configured directives are used, falling
/// back to [`DEFAULT_FILTER`] if they are absent or do not parse.
pub fn build_filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        configured
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
    })
}

/// Initializes logging to stderr.
pub fn init_stderr_logging(configured: Option<&str>) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(configured))
        .with_writer(std::io::stderr)
        .init();
}

/// Initializes logging to the given file, truncating it.
///
/// Falls back to stderr logging if the file cannot be created, so a bad log
/// path never costs the manager its answer.
pub fn init_file_logging(path: &Path, configured: Option<&str>) {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Warning: Could not create log directory: {e}");
            init_stderr_logging(configured);
            return;
        }
    }

    let log_file = match File::create(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file: {e}");
            init_stderr_logging(configured);
            return;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(configured))
        .with_writer(log_file)
        .with_ansi(false) // No ANSI colors in file output
        .init();
}

/// Initializes logging to `log_file` if given, otherwise to stderr.
pub fn init(log_file: Option<&Path>, configured: Option<&str>) {
    match log_file {
        Some(path) => init_file_logging(path, configured),
        None => init_stderr_logging(configured),
    }
}
