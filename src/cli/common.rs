//! Shared CLI types: errors, exit codes, palette input, and output helpers.

use clap::Args;
use crossterm::style::Stylize;
use serde::Serialize;
use std::fmt;

use crate::config::Config;
use crate::models::{Palette, RgbColor, Scheme};
use crate::services::generate_palette;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid input or a failed check
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to the OS.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error kinds, each mapped to an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Bad input or a failed accessibility check
    Validation,
    /// File system or serialization failure
    Io,
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// What went wrong, for exit code selection
    pub kind: CliErrorKind,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Creates an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Validation => ExitCode::ValidationError,
            CliErrorKind::Io => ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result alias for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Parses a hex color argument, reporting bad input as a validation error.
pub fn parse_color(input: &str) -> CliResult<RgbColor> {
    RgbColor::from_hex(input).map_err(|e| CliError::validation(e.to_string()))
}

/// Base color and scheme arguments shared by palette-producing commands.
#[derive(Debug, Clone, Args)]
pub struct PaletteInput {
    /// Base color as hex (e.g., "#6366f1"). Defaults to the configured base.
    #[arg(value_name = "BASE")]
    pub base: Option<String>,

    /// Color scheme. Defaults to the configured scheme.
    #[arg(short, long, value_enum, value_name = "SCHEME")]
    pub scheme: Option<Scheme>,
}

impl PaletteInput {
    /// Resolves the arguments against `config` and generates the palette.
    pub fn resolve(&self, config: &Config) -> CliResult<Palette> {
        let base = match &self.base {
            Some(hex) => parse_color(hex)?,
            None => config.palette.base,
        };
        let scheme = self.scheme.unwrap_or(config.palette.scheme);

        Ok(generate_palette(base, scheme))
    }
}

/// Loads the configuration, reporting failures as validation errors.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// A short block of terminal background color showing `color`.
pub fn swatch(color: RgbColor) -> String {
    "    ".on(color.to_terminal_color()).to_string()
}

/// Check mark or cross for pass/fail columns.
pub const fn mark(passed: bool) -> &'static str {
    if passed {
        "✓"
    } else {
        "✗"
    }
}
