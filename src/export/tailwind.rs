//! Tailwind CSS config export.

use std::fmt::Write as _;

use crate::models::Palette;

/// Renders the palette as a `tailwind.config.js` theme extension.
pub fn to_tailwind_config(palette: &Palette) -> String {
    let mut output = String::new();
    output.push_str("module.exports = {\n");
    output.push_str("  theme: {\n");
    output.push_str("    extend: {\n");
    output.push_str("      colors: {\n");

    for swatch in palette.swatches() {
        let slug = swatch.role.slug();
        let _ = writeln!(output, "        '{}': '{}',", slug, swatch.color);
    }

    output.push_str("      }\n");
    output.push_str("    }\n");
    output.push_str("  }\n");
    output.push_str("}\n");
    output
}
