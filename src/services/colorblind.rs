//! Colorblind simulation.
//!
//! Each deficiency is approximated by a fixed 3x3 matrix applied to the raw
//! (gamma-encoded) RGB channels. Results are rounded and clamped to 0-255.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use serde::Serialize;
use tracing::debug;

use crate::models::{Palette, RgbColor, Vision};

type Matrix = [[f64; 3]; 3];

const PROTANOPIA: Matrix = [
    [0.567, 0.433, 0.0],
    [0.558, 0.442, 0.0],
    [0.0, 0.242, 0.758],
];

const DEUTERANOPIA: Matrix = [
    [0.625, 0.375, 0.0],
    [0.7, 0.3, 0.0],
    [0.0, 0.3, 0.7],
];

const TRITANOPIA: Matrix = [
    [0.95, 0.05, 0.0],
    [0.0, 0.433, 0.567],
    [0.0, 0.475, 0.525],
];

const fn matrix(vision: Vision) -> Option<&'static Matrix> {
    match vision {
        Vision::Normal => None,
        Vision::Protanopia => Some(&PROTANOPIA),
        Vision::Deuteranopia => Some(&DEUTERANOPIA),
        Vision::Tritanopia => Some(&TRITANOPIA),
    }
}

/// Simulates how `color` appears under `vision`.
///
/// `Vision::Normal` returns the color unchanged.
pub fn simulate(color: RgbColor, vision: Vision) -> RgbColor {
    let Some(m) = matrix(vision) else {
        return color;
    };

    let input = color.channels().map(f64::from);
    let channel = |row: &[f64; 3]| {
        let v = row[0] * input[0] + row[1] * input[1] + row[2] * input[2];
        v.round().clamp(0.0, 255.0) as u8
    };

    RgbColor::new(channel(&m[0]), channel(&m[1]), channel(&m[2]))
}

/// Simulates `color` under the vision named `name`.
///
/// Unknown names fall back to normal vision and return `color` unchanged.
///
/// # Examples
///
/// ```
/// use palettegen::models::RgbColor;
/// use palettegen::services::colorblind::simulate_colorblind;
///
/// let color = RgbColor::new(200, 40, 90);
/// assert_eq!(simulate_colorblind(color, "unknown"), color);
/// assert_ne!(simulate_colorblind(color, "protanopia"), color);
/// ```
pub fn simulate_colorblind(color: RgbColor, name: &str) -> RgbColor {
    let vision = Vision::try_parse(name).unwrap_or_else(|| {
        debug!(name, "unknown vision type, showing normal vision");
        Vision::Normal
    });
    simulate(color, vision)
}

/// A palette as seen with one type of color vision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Simulation {
    /// Vision variant
    pub vision: Vision,
    /// Display title (e.g., "Protanopia")
    pub title: &'static str,
    /// Short description of the deficiency
    pub description: &'static str,
    /// Simulated palette colors in role order
    pub colors: Vec<RgbColor>,
}

impl Simulation {
    /// Simulates every color of `palette` under `vision`.
    #[must_use]
    pub fn of(palette: &Palette, vision: Vision) -> Self {
        let colors = palette.colors.iter().map(|&c| simulate(c, vision));
        Self {
            vision,
            title: vision.title(),
            description: vision.description(),
            colors: colors.collect(),
        }
    }
}

/// Simulates the palette under every vision variant, normal vision first.
pub fn simulate_palette(palette: &Palette) -> Vec<Simulation> {
    Vision::ALL
        .into_iter()
        .map(|vision| Simulation::of(palette, vision))
        .collect()
}
