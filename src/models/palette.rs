//! Generated palette: five colors paired with role labels.

use serde::Serialize;

use super::{RgbColor, Role, Scheme};
use crate::constants::PALETTE_SIZE;

/// An ordered palette of five colors derived from a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    /// Scheme that produced the palette
    pub scheme: Scheme,
    /// Input color the palette was derived from
    pub base: RgbColor,
    /// Colors in role order
    pub colors: [RgbColor; PALETTE_SIZE],
}

/// A single palette position with its role, used for display and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Swatch {
    /// Role label of the position
    pub role: Role,
    /// Color at the position
    pub color: RgbColor,
}

impl Palette {
    /// Role labels for each position, from the palette's scheme.
    #[must_use]
    pub const fn roles(&self) -> [Role; PALETTE_SIZE] {
        self.scheme.roles()
    }

    /// Iterates the positions as (role, color) swatches.
    pub fn swatches(&self) -> impl Iterator<Item = Swatch> + '_ {
        self.roles()
            .into_iter()
            .zip(self.colors)
            .map(|(role, color)| Swatch { role, color })
    }

    /// Position of the unmodified base color.
    #[must_use]
    pub const fn base_index(&self) -> usize {
        self.scheme.base_index()
    }

    /// The swatch holding the unmodified base color.
    #[must_use]
    pub fn base_swatch(&self) -> Swatch {
        let index = self.base_index();
        Swatch {
            role: self.scheme.roles()[index],
            color: self.colors[index],
        }
    }

    /// Returns a copy of this palette with every color mapped through `f`.
    ///
    /// Scheme and base are kept so roles still line up.
    #[must_use]
    pub fn map_colors(&self, f: impl Fn(RgbColor) -> RgbColor) -> Self {
        Self {
            colors: self.colors.map(f),
            ..*self
        }
    }
}

impl Serialize for Palette {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let swatches: Vec<Swatch> = self.swatches().collect();
        let mut state = serializer.serialize_struct("Palette", 3)?;
        state.serialize_field("scheme", &self.scheme)?;
        state.serialize_field("base", &self.base)?;
        state.serialize_field("colors", &swatches)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Palette {
        Palette {
            scheme: Scheme::Monochromatic,
            base: RgbColor::new(10, 20, 30),
            colors: [
                RgbColor::new(1, 1, 1),
                RgbColor::new(2, 2, 2),
                RgbColor::new(10, 20, 30),
                RgbColor::new(4, 4, 4),
                RgbColor::new(5, 5, 5),
            ],
        }
    }

    #[test]
    fn test_swatches_pair_roles_and_colors() {
        let palette = sample();
        let swatches: Vec<Swatch> = palette.swatches().collect();
        assert_eq!(swatches.len(), 5);
        assert_eq!(swatches[0].role, Role::Lightest);
        assert_eq!(swatches[4].color, RgbColor::new(5, 5, 5));
    }

    #[test]
    fn test_base_swatch() {
        let swatch = sample().base_swatch();
        assert_eq!(swatch.role, Role::Base);
        assert_eq!(swatch.color, RgbColor::new(10, 20, 30));
    }

    #[test]
    fn test_map_colors_keeps_scheme() {
        let inverted = sample().map_colors(|c| RgbColor::new(255 - c.r, 255 - c.g, 255 - c.b));
        assert_eq!(inverted.scheme, Scheme::Monochromatic);
        assert_eq!(inverted.colors[0], RgbColor::new(254, 254, 254));
    }

    #[test]
    fn test_serialize_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["scheme"], "monochromatic");
        assert_eq!(value["base"], "#0a141e");
        assert_eq!(value["colors"][2]["role"], "Base");
        assert_eq!(value["colors"][2]["color"], "#0a141e");
    }
}
