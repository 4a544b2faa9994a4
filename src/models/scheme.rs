//! Color schemes and the role labels attached to palette positions.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ColorError;

/// Strategy used to derive a palette from a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// One hue at five lightness levels
    #[default]
    Monochromatic,
    /// Base hue and its opposite
    Complementary,
    /// Neighboring hues within ±30°
    Analogous,
    /// Three hues spaced 120° apart
    Triadic,
    /// Four hues spaced 90° apart
    Tetradic,
}

impl Scheme {
    /// All schemes in display order.
    pub const ALL: [Self; 5] = [
        Self::Monochromatic,
        Self::Complementary,
        Self::Analogous,
        Self::Triadic,
        Self::Tetradic,
    ];

    /// Returns the lowercase identifier used on the command line and in config.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
        }
    }

    /// Returns the role labels for the five palette positions.
    #[must_use]
    pub const fn roles(&self) -> [Role; 5] {
        match self {
            Self::Monochromatic => [
                Role::Lightest,
                Role::Light,
                Role::Base,
                Role::Dark,
                Role::Darkest,
            ],
            Self::Complementary | Self::Analogous | Self::Triadic | Self::Tetradic => [
                Role::Primary,
                Role::Secondary,
                Role::Accent,
                Role::Neutral,
                Role::Support,
            ],
        }
    }

    /// Index of the palette entry that carries the unmodified base color.
    #[must_use]
    pub const fn base_index(&self) -> usize {
        match self {
            Self::Monochromatic | Self::Analogous => 2,
            Self::Complementary | Self::Triadic | Self::Tetradic => 0,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ColorError::UnsupportedScheme(wanted.to_string()))
    }
}

/// Label for a palette position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Backgrounds
    Lightest,
    /// Surfaces
    Light,
    /// The main color
    Base,
    /// Text on light surfaces
    Dark,
    /// Emphasis
    Darkest,
    /// Main brand color
    Primary,
    /// Supporting color
    Secondary,
    /// Highlights
    Accent,
    /// Muted tone
    Neutral,
    /// Auxiliary tone
    Support,
}

impl Role {
    /// Human-readable label, e.g. "Lightest".
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Lightest => "Lightest",
            Self::Light => "Light",
            Self::Base => "Base",
            Self::Dark => "Dark",
            Self::Darkest => "Darkest",
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Accent => "Accent",
            Self::Neutral => "Neutral",
            Self::Support => "Support",
        }
    }

    /// Identifier used for CSS variables and Tailwind keys, e.g. "lightest".
    #[must_use]
    pub fn slug(&self) -> String {
        self.label().to_lowercase().replace(' ', "-")
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
