//! Color conversion command.

use crate::cli::common::{parse_color, print_json, swatch, CliResult};
use crate::models::Hsl;
use crate::services::luminance;
use clap::Args;
use serde::Serialize;

/// Show a color as hex, RGB and HSL
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Color as hex (e.g., "#6366f1" or "6366F1")
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ConvertOutput {
    hex: String,
    rgb: [u8; 3],
    hsl: Hsl,
    luminance: f64,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        let color = parse_color(&self.color)?;
        let output = ConvertOutput {
            hex: color.to_hex(),
            rgb: color.channels(),
            hsl: color.to_hsl(),
            luminance: luminance(color),
        };

        if self.json {
            return print_json(&output);
        }

        println!("{}", swatch(color));
        println!("Hex:       {}", output.hex);
        println!(
            "RGB:       rgb({}, {}, {})",
            output.rgb[0], output.rgb[1], output.rgb[2]
        );
        println!("HSL:       {}", output.hsl);
        println!("Luminance: {:.4}", output.luminance);

        Ok(())
    }
}
