//! CSS custom property export.

use std::fmt::Write as _;

use crate::models::Palette;

/// Renders the palette as CSS custom properties on `:root`.
///
/// Property names are the role slugs, e.g. `--lightest` or `--primary`.
///
/// # Examples
///
/// ```
/// use palettegen::export::to_css_variables;
/// use palettegen::models::{RgbColor, Scheme};
/// use palettegen::services::generate_palette;
///
/// let palette = generate_palette(RgbColor::new(99, 102, 241), Scheme::Triadic);
/// let css = to_css_variables(&palette);
/// assert!(css.contains("  --primary: #6366f1;"));
/// ```
pub fn to_css_variables(palette: &Palette) -> String {
    let mut output = String::from(":root {\n");

    for swatch in palette.swatches() {
        let _ = writeln!(output, "  --{}: {};", swatch.role.slug(), swatch.color);
    }

    output.push_str("}\n");
    output
}
