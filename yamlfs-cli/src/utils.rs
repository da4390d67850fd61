//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across CLI commands: global options,
//! output format selection and separator parsing.

use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;
use std::path::MAIN_SEPARATOR;

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Output format for commands that print lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One entry per line (human-readable)
    Text,
    /// JSON format
    Json,
}

/// The host path separator as a byte.
pub fn default_separator() -> u8 {
    u8::try_from(MAIN_SEPARATOR).unwrap_or(b'/')
}

/// Parse a `--separator` value into a single ASCII byte.
pub fn parse_separator(value: &str) -> Result<u8, String> {
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!(
            "separator must be a single ASCII character, got '{value}'"
        )),
    }
}

/// Serialize `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    writeln!(out)?;
    Ok(())
}
