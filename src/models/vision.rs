//! Color vision types used by the colorblind simulation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A color vision variant.
///
/// `Normal` is the identity; the other variants select a simulation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vision {
    /// Typical trichromatic vision
    #[default]
    Normal,
    /// Red-blind
    Protanopia,
    /// Green-blind
    Deuteranopia,
    /// Blue-blind
    Tritanopia,
}

impl Vision {
    /// All variants in gallery order.
    pub const ALL: [Self; 4] = [
        Self::Normal,
        Self::Protanopia,
        Self::Deuteranopia,
        Self::Tritanopia,
    ];

    /// Parses a vision name, or `None` if it is not recognized.
    ///
    /// Matching ignores case and surrounding whitespace.
    #[must_use]
    pub fn try_parse(name: &str) -> Option<Self> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|vision| vision.name().eq_ignore_ascii_case(wanted))
    }

    /// Parses a vision name, falling back to `Normal` for anything unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use palettegen::models::Vision;
    ///
    /// assert_eq!(Vision::parse("Protanopia"), Vision::Protanopia);
    /// assert_eq!(Vision::parse("unknown"), Vision::Normal);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Self {
        Self::try_parse(name).unwrap_or_default()
    }

    /// Lowercase identifier, e.g. "protanopia".
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Protanopia => "protanopia",
            Self::Deuteranopia => "deuteranopia",
            Self::Tritanopia => "tritanopia",
        }
    }

    /// Display title for galleries.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Normal => "Normal Vision",
            Self::Protanopia => "Protanopia",
            Self::Deuteranopia => "Deuteranopia",
            Self::Tritanopia => "Tritanopia",
        }
    }

    /// Short description of the deficiency.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Normal => "How most people see colors",
            Self::Protanopia => "Red-blind (1% of males)",
            Self::Deuteranopia => "Green-blind (1% of males)",
            Self::Tritanopia => "Blue-blind (rare)",
        }
    }
}

impl fmt::Display for Vision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!(Vision::parse("protanopia"), Vision::Protanopia);
        assert_eq!(Vision::parse("DEUTERANOPIA"), Vision::Deuteranopia);
        assert_eq!(Vision::parse(" tritanopia "), Vision::Tritanopia);
        assert_eq!(Vision::parse("normal"), Vision::Normal);
    }

    #[test]
    fn test_parse_unknown_falls_back_to_normal() {
        assert_eq!(Vision::parse("unknown"), Vision::Normal);
        assert_eq!(Vision::parse(""), Vision::Normal);
        assert_eq!(Vision::parse("achromatopsia"), Vision::Normal);
    }

    #[test]
    fn test_try_parse_reports_unknown_names() {
        assert_eq!(Vision::try_parse("Normal"), Some(Vision::Normal));
        assert_eq!(Vision::try_parse(" protanopia"), Some(Vision::Protanopia));
        assert_eq!(Vision::try_parse("sepia"), None);
        assert_eq!(Vision::try_parse(""), None);
    }

    #[test]
    fn test_gallery_order() {
        assert_eq!(Vision::ALL[0], Vision::Normal);
        assert_eq!(Vision::ALL[3].title(), "Tritanopia");
    }
}
