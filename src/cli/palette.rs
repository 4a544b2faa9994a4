//! Palette generation command.

use crate::cli::common::{load_config, print_json, swatch, CliResult, PaletteInput};
use clap::Args;
use tracing::info;

/// Generate a five-color palette from a base color
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Base color and scheme
    #[command(flatten)]
    pub input: PaletteInput,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let palette = self.input.resolve(&config)?;
        info!(base = %palette.base, scheme = %palette.scheme, "palette");

        if self.json {
            return print_json(&palette);
        }

        println!("Base:   {} ({})", palette.base, palette.base.to_hsl());
        println!("Scheme: {}", palette.scheme);
        println!();
        for swatch_entry in palette.swatches() {
            println!(
                "  {} {:<10} {}  {}",
                swatch(swatch_entry.color),
                swatch_entry.role.label(),
                swatch_entry.color,
                swatch_entry.color.to_hsl()
            );
        }

        Ok(())
    }
}
