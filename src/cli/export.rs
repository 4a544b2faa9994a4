//! Export command for generating palette code.

use crate::cli::common::{load_config, CliError, CliResult, PaletteInput};
use crate::export::{export_palette, ExportFormat};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Export the palette as CSS variables, Tailwind config or JSON
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Base color and scheme
    #[command(flatten)]
    pub input: PaletteInput,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<ExportFormat>,

    /// Write to this file instead of stdout. A missing extension is
    /// filled in from the format.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let palette = self.input.resolve(&config)?;
        let format = self.format.unwrap_or(config.export.format);

        let code = export_palette(&palette, format)
            .map_err(|e| CliError::io(format!("Failed to render {format} export: {e}")))?;

        match &self.output {
            Some(path) => {
                let path = if path.extension().is_none() {
                    path.with_extension(format.extension())
                } else {
                    path.clone()
                };
                fs::write(&path, &code)
                    .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;
                info!(path = %path.display(), %format, "exported palette");
                println!("✓ Exported {} palette to: {}", format, path.display());
            }
            None => print!("{code}"),
        }

        Ok(())
    }
}
