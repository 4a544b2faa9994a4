//! Configuration management CLI commands.

use crate::cli::common::{load_config, parse_color, print_json, swatch, CliError, CliResult};
use crate::cli::contrast::validate_target;
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::export::ExportFormat;
use crate::models::Scheme;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the config file location
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default base color as hex
    #[arg(long, value_name = "COLOR")]
    base: Option<String>,

    /// Default color scheme
    #[arg(long, value_enum, value_name = "SCHEME")]
    scheme: Option<Scheme>,

    /// Target contrast ratio for suggestions and audits
    #[arg(long, value_name = "RATIO")]
    target_ratio: Option<f64>,

    /// Default export format
    #[arg(long, value_enum, value_name = "FORMAT")]
    format: Option<ExportFormat>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            print_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.base.is_none()
            && self.scheme.is_none()
            && self.target_ratio.is_none()
            && self.format.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --base, --scheme, --target-ratio, or --format",
            ));
        }

        let mut config = load_config()?;

        if let Some(base) = &self.base {
            config.palette.base = parse_color(base)?;
        }
        if let Some(scheme) = self.scheme {
            config.palette.scheme = scheme;
        }
        if let Some(ratio) = self.target_ratio {
            config.contrast.target_ratio = validate_target(ratio)?;
        }
        if let Some(format) = self.format {
            config.export.format = format;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();

    match Config::config_file_path() {
        Ok(path) if Config::exists() => println!("File: {}", path.display()),
        Ok(path) => println!("File: {} (not created yet)", path.display()),
        Err(_) => println!("File: (unavailable)"),
    }
    println!();

    println!("Palette:");
    println!(
        "  Base:   {} {}",
        config.palette.base,
        swatch(config.palette.base)
    );
    println!("  Scheme: {}", config.palette.scheme);
    println!();

    println!("Contrast:");
    println!("  Target Ratio: {:.2}", config.contrast.target_ratio);
    println!("  Backgrounds:");
    for background in &config.contrast.backgrounds {
        println!("    {} {}", background.color, background.name);
    }
    println!();

    println!("Export:");
    println!("  Format: {}", config.export.format);
    println!();
}
