//! RGB color handling with hex parsing and serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Achromatic detection compares exact channel maxima
#![allow(clippy::float_cmp)]

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use super::{ColorError, Hsl};

/// Matches `#RRGGBB` and `RRGGBB` in either case.
fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^#?[0-9A-Fa-f]{6}$").unwrap())
}

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (#RRGGBB) and serializes as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb".
    /// Surrounding whitespace is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use palettegen::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("00ff00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] if the string is not a valid hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let trimmed = hex.trim();
        if !hex_pattern().is_match(trimmed) {
            return Err(ColorError::InvalidFormat(trimmed.to_string()));
        }

        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorError::InvalidFormat(trimmed.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Converts the color to a hex string in the format "#rrggbb" (lowercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use palettegen::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#ff0000");
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts the color to HSL with integer degrees and percentages.
    ///
    /// Grays (all channels equal) have hue 0 and saturation 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use palettegen::models::{Hsl, RgbColor};
    ///
    /// let hsl = RgbColor::from_hex("#6366f1").unwrap().to_hsl();
    /// assert_eq!(hsl, Hsl::new(239, 84, 67));
    /// ```
    #[must_use]
    pub fn to_hsl(&self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = max.midpoint(min);
        let percent = |v: f64| (v * 100.0).round() as u8;

        if max == min {
            return Hsl::new(0, 0, percent(l));
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        let h = sector / 6.0;

        // A hue just below 360 rounds up to 360, which is the same angle as 0
        let hue = ((h * 360.0).round() as u16) % 360;

        Hsl::new(hue, percent(s), percent(l))
    }

    /// Creates an `RgbColor` from HSL. Equivalent to [`Hsl::to_rgb`].
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }

    /// Returns the channels as a `[r, g, b]` array.
    #[must_use]
    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Converts the color to a crossterm color for terminal swatches.
    #[must_use]
    pub const fn to_terminal_color(&self) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for RgbColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RgbColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl Default for RgbColor {
    /// Default color is white (#ffffff).
    fn default() -> Self {
        Self::WHITE
    }
}
