//! HSL (hue, saturation, lightness) color values.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use serde::Serialize;
use std::fmt;

use super::RgbColor;

/// A color in HSL space with integer components.
///
/// Hue is in degrees (0-359), saturation and lightness are percentages
/// (0-100). Palette generation does all of its arithmetic on this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Hsl {
    /// Hue in degrees (0-359)
    pub h: u16,
    /// Saturation percentage (0-100)
    pub s: u8,
    /// Lightness percentage (0-100)
    pub l: u8,
}

impl Hsl {
    /// Creates a new `Hsl`, wrapping the hue and clamping the percentages.
    #[must_use]
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self {
            h: h % 360,
            s: if s > 100 { 100 } else { s },
            l: if l > 100 { 100 } else { l },
        }
    }

    /// Returns this color with the hue rotated by `degrees`.
    ///
    /// Negative rotations wrap around, so the result is always in 0-359.
    ///
    /// # Examples
    ///
    /// ```
    /// use palettegen::models::Hsl;
    ///
    /// assert_eq!(Hsl::new(10, 50, 50).rotate(-30).h, 340);
    /// assert_eq!(Hsl::new(300, 50, 50).rotate(90).h, 30);
    /// ```
    #[must_use]
    pub fn rotate(self, degrees: i32) -> Self {
        let h = (i32::from(self.h) + degrees).rem_euclid(360);
        Self {
            h: h as u16,
            ..self
        }
    }

    /// Returns this color with a different saturation, clamped to 0-100.
    #[must_use]
    pub fn with_saturation(self, s: i32) -> Self {
        Self {
            s: s.clamp(0, 100) as u8,
            ..self
        }
    }

    /// Returns this color with a different lightness, clamped to 0-100.
    #[must_use]
    pub fn with_lightness(self, l: i32) -> Self {
        Self {
            l: l.clamp(0, 100) as u8,
            ..self
        }
    }

    /// Converts to sRGB.
    ///
    /// Uses the chroma/sector formulation over six 60° hue sectors. Channels
    /// are rounded to the nearest integer and clamped to 0-255. Components
    /// set directly on the public fields are normalized first, the same way
    /// [`Hsl::new`] does.
    ///
    /// # Examples
    ///
    /// ```
    /// use palettegen::models::{Hsl, RgbColor};
    ///
    /// assert_eq!(Hsl::new(0, 100, 50).to_rgb(), RgbColor::new(255, 0, 0));
    /// assert_eq!(Hsl::new(240, 100, 50).to_rgb(), RgbColor::new(0, 0, 255));
    /// ```
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        let Self { h, s, l } = Self::new(self.h, self.s, self.l);
        let hue = f64::from(h);
        let s = f64::from(s) / 100.0;
        let l = f64::from(l) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h {
            0..=59 => (c, x, 0.0),
            60..=119 => (x, c, 0.0),
            120..=179 => (0.0, c, x),
            180..=239 => (0.0, x, c),
            240..=299 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let channel = |v: f64| {
            let scaled = ((v + m) * 255.0).round();
            scaled.clamp(0.0, 255.0) as u8
        };
        RgbColor::new(channel(r), channel(g), channel(b))
    }
}

impl From<RgbColor> for Hsl {
    fn from(color: RgbColor) -> Self {
        color.to_hsl()
    }
}

impl From<Hsl> for RgbColor {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}
