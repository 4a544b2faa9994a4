//! Application-wide constants.
//!
//! Names, defaults, and WCAG thresholds shared by the library and the CLI.

/// The display name of the application.
pub const APP_NAME: &str = "Palette Generator";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "palettegen";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "PALETTEGEN_CONFIG_DIR";

/// Base color used when neither the command line nor the config names one.
pub const DEFAULT_BASE_COLOR: &str = "#6366f1";

/// Number of colors in every generated palette.
pub const PALETTE_SIZE: usize = 5;

/// Minimum ratio for normal text (WCAG AA).
pub const WCAG_AA_RATIO: f64 = 4.5;

/// Minimum ratio for normal text (WCAG AAA).
pub const WCAG_AAA_RATIO: f64 = 7.0;

/// Minimum ratio for large text (18pt+, or 14pt+ bold).
pub const WCAG_LARGE_RATIO: f64 = 3.0;

/// Target ratio used by the accessible color suggestion unless overridden.
pub const DEFAULT_TARGET_RATIO: f64 = WCAG_AA_RATIO;

/// Highest contrast ratio two sRGB colors can have (black on white).
pub const MAX_CONTRAST_RATIO: f64 = 21.0;
