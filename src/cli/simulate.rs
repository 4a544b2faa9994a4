//! Colorblind simulation command.

use crate::cli::common::{load_config, print_json, swatch, CliResult, PaletteInput};
use crate::models::Vision;
use crate::services::{simulate_palette, Simulation};
use clap::Args;
use tracing::warn;

/// Show the palette as seen with different kinds of color vision
#[derive(Debug, Clone, Args)]
pub struct SimulateArgs {
    /// Base color and scheme
    #[command(flatten)]
    pub input: PaletteInput,

    /// Vision type: normal, protanopia, deuteranopia or tritanopia.
    /// Unknown names show normal vision. Omit to show all.
    #[arg(long, value_name = "TYPE")]
    pub vision: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SimulateArgs {
    /// Execute the simulate command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let palette = self.input.resolve(&config)?;

        let simulations = match &self.vision {
            Some(name) => {
                let vision = Vision::try_parse(name).unwrap_or_else(|| {
                    warn!("Unknown vision type '{}', showing normal vision", name);
                    Vision::Normal
                });
                vec![Simulation::of(&palette, vision)]
            }
            None => simulate_palette(&palette),
        };

        if self.json {
            return print_json(&simulations);
        }

        let roles = palette.roles();
        for simulation in &simulations {
            println!("{} - {}", simulation.title, simulation.description);
            let blocks: Vec<String> = simulation.colors.iter().map(|&c| swatch(c)).collect();
            println!("  {}", blocks.join(""));
            for (role, color) in roles.iter().zip(&simulation.colors) {
                println!("  {:<10} {}", role.label(), color);
            }
            println!();
        }

        Ok(())
    }
}
