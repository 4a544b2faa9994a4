//! Export functionality for palettes.
//!
//! Renders a palette as copyable code: CSS custom properties, a Tailwind
//! theme extension, both together, or JSON.

pub mod css;
pub mod tailwind;

pub use css::to_css_variables;
pub use tailwind::to_tailwind_config;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Palette;

/// Output format for exported palette code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// CSS custom properties on `:root`
    Css,
    /// Tailwind `theme.extend.colors` config
    Tailwind,
    /// CSS variables followed by the Tailwind config
    #[default]
    Both,
    /// Palette as JSON
    Json,
}

impl ExportFormat {
    /// Lowercase identifier used on the command line and in config.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Tailwind => "tailwind",
            Self::Both => "both",
            Self::Json => "json",
        }
    }

    /// Conventional file extension for the format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Tailwind => "js",
            Self::Both => "txt",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders `palette` in the requested format.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn export_palette(palette: &Palette, format: ExportFormat) -> serde_json::Result<String> {
    let output = match format {
        ExportFormat::Css => to_css_variables(palette),
        ExportFormat::Tailwind => to_tailwind_config(palette),
        ExportFormat::Both => format!(
            "/* CSS Variables */\n{}\n/* Tailwind Configuration */\n{}",
            to_css_variables(palette),
            to_tailwind_config(palette)
        ),
        ExportFormat::Json => {
            let mut json = serde_json::to_string_pretty(palette)?;
            json.push('\n');
            json
        }
    };

    Ok(output)
}
