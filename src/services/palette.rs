//! Palette generation for each color scheme.
//!
//! Every generator works in HSL space: it reads the base color's hue,
//! saturation and lightness, applies scheme-specific offsets with floors and
//! ceilings, and converts back to RGB. Positions that hold the base color
//! return the input unchanged rather than an HSL round trip of it.

use tracing::debug;

use crate::constants::PALETTE_SIZE;
use crate::models::{Hsl, Palette, RgbColor, Role, Scheme};

/// Generates the palette for `base` under `scheme`.
///
/// # Examples
///
/// ```
/// use palettegen::models::{RgbColor, Scheme};
/// use palettegen::services::palette::generate_palette;
///
/// let base = RgbColor::from_hex("#6366f1").unwrap();
/// let palette = generate_palette(base, Scheme::Monochromatic);
/// assert_eq!(palette.colors[2], base);
/// ```
pub fn generate_palette(base: RgbColor, scheme: Scheme) -> Palette {
    let colors = match scheme {
        Scheme::Monochromatic => monochromatic(base),
        Scheme::Complementary => complementary(base),
        Scheme::Analogous => analogous(base),
        Scheme::Triadic => triadic(base),
        Scheme::Tetradic => tetradic(base),
    };

    debug!(
        base = %base,
        scheme = %scheme,
        hsl = %base.to_hsl(),
        "generated palette"
    );

    Palette {
        scheme,
        base,
        colors,
    }
}

/// Role labels for the five positions of a `scheme` palette.
pub const fn roles(scheme: Scheme) -> [Role; PALETTE_SIZE] {
    scheme.roles()
}

/// Builds an HSL color from signed components, clamping into range.
fn hsl(base: Hsl, rotate: i32, s: i32, l: i32) -> RgbColor {
    base.rotate(rotate)
        .with_saturation(s)
        .with_lightness(l)
        .to_rgb()
}

/// Base, its complement, darker versions of both, and a light desaturated tint.
pub fn complementary(base: RgbColor) -> [RgbColor; PALETTE_SIZE] {
    let c = base.to_hsl();
    let (s, l) = (i32::from(c.s), i32::from(c.l));

    [
        base,
        hsl(c, 180, s, l),
        hsl(c, 0, (s - 20).max(30), (l - 15).max(25)),
        hsl(c, 180, (s - 20).max(30), (l - 15).max(25)),
        hsl(c, 0, (s - 40).max(20), (l + 20).min(85)),
    ]
}

/// Hues at -30°, -15°, 0°, +15° and +30° around the base.
pub fn analogous(base: RgbColor) -> [RgbColor; PALETTE_SIZE] {
    let c = base.to_hsl();
    let (s, l) = (i32::from(c.s), i32::from(c.l));

    [
        hsl(c, -30, s, l),
        hsl(c, -15, s, l),
        base,
        hsl(c, 15, s, l),
        hsl(c, 30, s, l),
    ]
}

/// Three hues 120° apart plus darker versions of the first two.
pub fn triadic(base: RgbColor) -> [RgbColor; PALETTE_SIZE] {
    let c = base.to_hsl();
    let (s, l) = (i32::from(c.s), i32::from(c.l));

    [
        base,
        hsl(c, 120, s, l),
        hsl(c, 240, s, l),
        hsl(c, 0, s, (l - 15).max(25)),
        hsl(c, 120, s, (l - 15).max(25)),
    ]
}

/// Four hues 90° apart plus a desaturated base.
pub fn tetradic(base: RgbColor) -> [RgbColor; PALETTE_SIZE] {
    let c = base.to_hsl();
    let (s, l) = (i32::from(c.s), i32::from(c.l));

    [
        base,
        hsl(c, 90, s, l),
        hsl(c, 180, s, l),
        hsl(c, 270, s, l),
        hsl(c, 0, (s - 30).max(30), l),
    ]
}

/// Lightest to darkest scale of a single hue with the base in the middle.
pub fn monochromatic(base: RgbColor) -> [RgbColor; PALETTE_SIZE] {
    let c = base.to_hsl();
    let (s, l) = (i32::from(c.s), i32::from(c.l));

    [
        // backgrounds
        hsl(c, 0, (s - 10).max(20), 90),
        // surfaces
        hsl(c, 0, (s - 5).max(25), 70),
        base,
        // text on light
        hsl(c, 0, (s + 5).min(80), (l - 20).max(20)),
        // emphasis
        hsl(c, 0, (s + 10).min(85), (l - 35).max(15)),
    ]
}
