//! codec-stub - stdio stub for encoder/decoder communication problems.
//!
//! This library exposes the core modules for use in integration tests.

pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod encoder;
pub mod error;
pub mod logging;
pub mod protocol;
