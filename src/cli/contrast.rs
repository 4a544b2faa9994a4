//! Contrast check command.

use crate::cli::common::{load_config, mark, parse_color, print_json, swatch, CliError, CliResult};
use crate::constants::MAX_CONTRAST_RATIO;
use crate::services::{contrast_report, ContrastReport};
use clap::Args;

/// Check WCAG contrast between a foreground and a background color
#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    /// Foreground (text) color as hex
    #[arg(value_name = "FG")]
    pub foreground: String,

    /// Background color as hex
    #[arg(value_name = "BG")]
    pub background: String,

    /// Target ratio for the suggestion (defaults to the configured target)
    #[arg(short, long, value_name = "RATIO")]
    pub target: Option<f64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ContrastArgs {
    /// Execute the contrast command
    pub fn execute(&self) -> CliResult<()> {
        let foreground = parse_color(&self.foreground)?;
        let background = parse_color(&self.background)?;
        let target = match self.target {
            Some(target) => validate_target(target)?,
            None => load_config()?.contrast.target_ratio,
        };

        let report = contrast_report(foreground, background, Some(target));

        if self.json {
            print_json(&report)?;
        } else {
            print_report(&report);
        }

        if !report.meets_target() {
            return Err(CliError::validation(format!(
                "Contrast ratio {:.2} is below target {:.2}",
                report.result.ratio, report.target_ratio
            )));
        }

        Ok(())
    }
}

/// Rejects ratios no color pair can have.
pub fn validate_target(target: f64) -> CliResult<f64> {
    if (1.0..=MAX_CONTRAST_RATIO).contains(&target) {
        Ok(target)
    } else {
        Err(CliError::validation(format!(
            "Target ratio {target} is out of range (1-{MAX_CONTRAST_RATIO})"
        )))
    }
}

/// Prints a report in the human-readable layout shared with `audit`.
pub fn print_report(report: &ContrastReport) {
    println!(
        "{} on {}  {} {}",
        report.foreground,
        report.background,
        swatch(report.foreground),
        swatch(report.background)
    );
    println!("Ratio:   {:.2}:1", report.result.ratio);
    println!(
        "WCAG:    AA {}  AAA {}  Large {}",
        mark(report.result.aa),
        mark(report.result.aaa),
        mark(report.result.large)
    );
    println!("Grade:   {}", report.grade.label());
    println!("         {}", report.grade.explanation());
    if let Some(suggestion) = report.suggestion {
        println!("Suggest: {} {}", suggestion, swatch(suggestion));
    }
}
