//! Palette accessibility audit command.

use crate::cli::common::{
    load_config, mark, print_json, swatch, CliError, CliResult, PaletteInput,
};
use crate::cli::contrast::validate_target;
use crate::models::Palette;
use crate::services::{audit_palette, AuditEntry};
use clap::Args;
use serde::Serialize;

/// Check the palette's base color against the configured backgrounds
#[derive(Debug, Clone, Args)]
pub struct AuditArgs {
    /// Base color and scheme
    #[command(flatten)]
    pub input: PaletteInput,

    /// Target ratio for suggestions (defaults to the configured target)
    #[arg(short, long, value_name = "RATIO")]
    pub target: Option<f64>,

    /// Exit with an error if any background fails the target
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct AuditOutput<'a> {
    palette: &'a Palette,
    checks: &'a [AuditEntry],
    passed: usize,
    failed: usize,
}

impl AuditArgs {
    /// Execute the audit command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let palette = self.input.resolve(&config)?;
        let target = match self.target {
            Some(target) => validate_target(target)?,
            None => config.contrast.target_ratio,
        };

        let entries = audit_palette(&palette, &config.contrast.backgrounds, Some(target));
        let passed = entries.iter().filter(|e| e.report.meets_target()).count();
        let failed = entries.len() - passed;

        if self.json {
            print_json(&AuditOutput {
                palette: &palette,
                checks: &entries,
                passed,
                failed,
            })?;
        } else {
            let base = palette.base_swatch();
            println!(
                "Auditing {} ({}, {} role) against {} background(s), target {:.2}:1",
                base.color,
                palette.scheme,
                base.role,
                entries.len(),
                target
            );
            println!();

            for entry in &entries {
                let report = &entry.report;
                println!(
                    "{} {} on {}",
                    swatch(entry.background.color),
                    entry.role,
                    entry.background.name
                );
                if !entry.background.use_case.is_empty() {
                    println!("    {}", entry.background.use_case);
                }
                println!(
                    "    {:.2}:1  AA {}  AAA {}  Large {}",
                    report.result.ratio,
                    mark(report.result.aa),
                    mark(report.result.aaa),
                    mark(report.result.large)
                );
                println!("    {}", report.grade.explanation());
                if let Some(suggestion) = report.suggestion {
                    println!("    Suggested: {} {}", suggestion, swatch(suggestion));
                }
                println!();
            }

            println!("Summary: {} passed, {} failed", passed, failed);
        }

        if self.strict && failed > 0 {
            return Err(CliError::validation(format!(
                "{failed} background(s) below target ratio {target:.2}"
            )));
        }

        Ok(())
    }
}
