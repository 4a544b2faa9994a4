//! WCAG contrast scoring and accessible color suggestions.
//!
//! Luminance and contrast follow the WCAG 2.x definitions: channels are
//! linearized, weighted into a relative luminance, and two luminances are
//! compared as `(lighter + 0.05) / (darker + 0.05)`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DEFAULT_TARGET_RATIO, WCAG_AAA_RATIO, WCAG_AA_RATIO, WCAG_LARGE_RATIO};
use crate::models::{Palette, RgbColor, Role};

/// Lightness range and stride scanned by [`suggest_accessible_color`].
const MIN_LIGHTNESS: i32 = 5;
const MAX_LIGHTNESS: i32 = 95;
const LIGHTNESS_STEP: usize = 5;

/// Relative luminance of an sRGB color, in 0.0-1.0.
///
/// # Examples
///
/// ```
/// use palettegen::models::RgbColor;
/// use palettegen::services::contrast::luminance;
///
/// assert_eq!(luminance(RgbColor::BLACK), 0.0);
/// assert!((luminance(RgbColor::WHITE) - 1.0).abs() < 1e-9);
/// ```
pub fn luminance(color: RgbColor) -> f64 {
    let linear = |channel: u8| {
        let v = f64::from(channel) / 255.0;
        if v <= 0.039_28 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    };

    0.2126 * linear(color.r) + 0.7152 * linear(color.g) + 0.0722 * linear(color.b)
}

/// WCAG contrast ratio between two colors, in 1.0-21.0.
///
/// The ratio is symmetric: argument order does not matter.
pub fn contrast_ratio(a: RgbColor, b: RgbColor) -> f64 {
    let (la, lb) = (luminance(a), luminance(b));
    let lighter = la.max(lb);
    let darker = la.min(lb);
    (lighter + 0.05) / (darker + 0.05)
}

/// Pass/fail flags for the three WCAG text thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastResult {
    /// Contrast ratio (1.0-21.0)
    pub ratio: f64,
    /// Normal text, level AA (4.5:1)
    pub aa: bool,
    /// Normal text, level AAA (7:1)
    pub aaa: bool,
    /// Large text (3:1)
    pub large: bool,
}

impl ContrastResult {
    /// Grades a precomputed ratio.
    #[must_use]
    pub fn evaluate(ratio: f64) -> Self {
        Self {
            ratio,
            aa: ratio >= WCAG_AA_RATIO,
            aaa: ratio >= WCAG_AAA_RATIO,
            large: ratio >= WCAG_LARGE_RATIO,
        }
    }

    /// Computes and grades the ratio between two colors.
    #[must_use]
    pub fn between(foreground: RgbColor, background: RgbColor) -> Self {
        Self::evaluate(contrast_ratio(foreground, background))
    }

    /// Highest WCAG level this result reaches.
    #[must_use]
    pub fn grade(&self) -> WcagGrade {
        WcagGrade::from_ratio(self.ratio)
    }
}

/// Highest WCAG level a ratio passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WcagGrade {
    /// 7:1 or better
    Aaa,
    /// 4.5:1 or better
    Aa,
    /// 3:1 or better, large text only
    LargeOnly,
    /// Below 3:1
    Fail,
}

impl WcagGrade {
    /// Classifies a contrast ratio.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= WCAG_AAA_RATIO {
            Self::Aaa
        } else if ratio >= WCAG_AA_RATIO {
            Self::Aa
        } else if ratio >= WCAG_LARGE_RATIO {
            Self::LargeOnly
        } else {
            Self::Fail
        }
    }

    /// Short label for tables.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::LargeOnly => "Large Text Only",
            Self::Fail => "Failed",
        }
    }

    /// One-line guidance for designers.
    #[must_use]
    pub const fn explanation(&self) -> &'static str {
        match self {
            Self::Aaa => "AAA: Enhanced (7:1) - Optimal for all text sizes",
            Self::Aa => "AA: Minimum (4.5:1) - Standard for normal text",
            Self::LargeOnly => "Large Text Only (3:1) - Use 18pt+ or 14pt+ bold",
            Self::Fail => "Failed - Not recommended for text",
        }
    }
}

/// Finds a same-hue variant of `foreground` that meets `target_ratio`.
///
/// Hue and saturation are kept; lightness is scanned over 5, 10, ... 95.
/// Among the candidates reaching the target against `background`, the one
/// with the smallest overshoot wins (the darker one on ties). If no
/// candidate reaches the target, `foreground` is returned unchanged.
///
/// # Examples
///
/// ```
/// use palettegen::models::RgbColor;
/// use palettegen::services::contrast::suggest_accessible_color;
///
/// let fg = RgbColor::from_hex("#cccccc").unwrap();
/// let suggestion = suggest_accessible_color(fg, RgbColor::WHITE, 4.5);
/// assert_eq!(suggestion.to_hex(), "#737373");
/// ```
pub fn suggest_accessible_color(
    foreground: RgbColor,
    background: RgbColor,
    target_ratio: f64,
) -> RgbColor {
    let hsl = foreground.to_hsl();
    let mut best: Option<(RgbColor, f64)> = None;

    for lightness in (MIN_LIGHTNESS..=MAX_LIGHTNESS).step_by(LIGHTNESS_STEP) {
        let candidate = hsl.with_lightness(lightness).to_rgb();
        let ratio = contrast_ratio(candidate, background);
        if ratio < target_ratio {
            continue;
        }

        let overshoot = ratio - target_ratio;
        let closer = match best {
            Some((_, best_overshoot)) => overshoot < best_overshoot,
            None => true,
        };
        if closer {
            best = Some((candidate, overshoot));
        }
    }

    match best {
        Some((color, overshoot)) => {
            debug!(%foreground, %background, %color, overshoot, "found accessible color");
            color
        }
        None => {
            debug!(%foreground, %background, target_ratio, "no lightness step reaches target");
            foreground
        }
    }
}

/// Contrast of one foreground/background pair with an optional fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastReport {
    /// Text color
    pub foreground: RgbColor,
    /// Background color
    pub background: RgbColor,
    /// Ratio the suggestion aims for
    pub target_ratio: f64,
    /// Ratio and WCAG flags
    #[serde(flatten)]
    pub result: ContrastResult,
    /// Highest level reached
    pub grade: WcagGrade,
    /// Same-hue replacement, present only when the ratio is below target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<RgbColor>,
}

impl ContrastReport {
    /// Whether the pair reaches the target ratio.
    #[must_use]
    pub fn meets_target(&self) -> bool {
        self.result.ratio >= self.target_ratio
    }
}

/// Scores `foreground` on `background` and suggests a fix when it falls short.
///
/// `target_ratio` defaults to the AA threshold (4.5).
pub fn contrast_report(
    foreground: RgbColor,
    background: RgbColor,
    target_ratio: Option<f64>,
) -> ContrastReport {
    let target_ratio = target_ratio.unwrap_or(DEFAULT_TARGET_RATIO);
    let result = ContrastResult::between(foreground, background);
    let suggestion = (result.ratio < target_ratio)
        .then(|| suggest_accessible_color(foreground, background, target_ratio));

    ContrastReport {
        foreground,
        background,
        target_ratio,
        result,
        grade: result.grade(),
        suggestion,
    }
}

/// A background the palette's base color is checked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    /// Display name (e.g., "White Background")
    pub name: String,
    /// Background color
    pub color: RgbColor,
    /// Where this background typically appears
    #[serde(default)]
    pub use_case: String,
}

impl Background {
    /// Creates a new background entry.
    pub fn new(name: impl Into<String>, color: RgbColor, use_case: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color,
            use_case: use_case.into(),
        }
    }
}

/// White, black and light gray, covering light mode, dark mode and subtle surfaces.
pub fn default_backgrounds() -> Vec<Background> {
    vec![
        Background::new(
            "White Background",
            RgbColor::WHITE,
            "For light mode interfaces, cards, and content areas",
        ),
        Background::new(
            "Black Background",
            RgbColor::BLACK,
            "For dark mode interfaces and high contrast designs",
        ),
        Background::new(
            "Light Gray Background",
            RgbColor::new(0xf3, 0xf4, 0xf6),
            "For subtle backgrounds and secondary surfaces",
        ),
    ]
}

/// One row of a palette accessibility audit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditEntry {
    /// Role of the audited palette color
    pub role: Role,
    /// Background it was checked against
    pub background: Background,
    /// Contrast result for the pair
    pub report: ContrastReport,
}

/// Checks the palette's base color against each background.
pub fn audit_palette(
    palette: &Palette,
    backgrounds: &[Background],
    target_ratio: Option<f64>,
) -> Vec<AuditEntry> {
    let swatch = palette.base_swatch();

    backgrounds
        .iter()
        .map(|background| AuditEntry {
            role: swatch.role,
            background: background.clone(),
            report: contrast_report(swatch.color, background.color, target_ratio),
        })
        .collect()
}
