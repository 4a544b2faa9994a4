//! Error type for color parsing and scheme lookup.

use thiserror::Error;

/// Errors raised by the color model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string is not a 6-digit hex color (`#RRGGBB` or `RRGGBB`).
    #[error("Invalid hex color format '{0}'. Expected 6 hex digits (#RRGGBB)")]
    InvalidFormat(String),

    /// The scheme name does not match any known color scheme.
    #[error(
        "Unsupported color scheme '{0}'. Expected one of: monochromatic, complementary, analogous, triadic, tetradic"
    )]
    UnsupportedScheme(String),
}
