//! Palette Generator - color palettes with accessibility checks
//!
//! Generates palettes from a base color, checks WCAG contrast, simulates
//! colorblind vision and exports CSS/Tailwind code.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palettegen::cli::{
    AuditArgs, CliResult, ConfigArgs, ContrastArgs, ConvertArgs, ExitCode, ExportArgs,
    PaletteArgs, SimulateArgs,
};

/// Palette Generator - color palettes with WCAG checks and colorblind simulation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a palette from a base color
    Palette(PaletteArgs),
    /// Show a color as hex, RGB and HSL
    Convert(ConvertArgs),
    /// Check contrast between two colors
    Contrast(ContrastArgs),
    /// Check the palette's base color against common backgrounds
    Audit(AuditArgs),
    /// Simulate colorblind vision for a palette
    Simulate(SimulateArgs),
    /// Export a palette as CSS, Tailwind or JSON
    Export(ExportArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Palette(args) => args.execute(),
            Self::Convert(args) => args.execute(),
            Self::Contrast(args) => args.execute(),
            Self::Audit(args) => args.execute(),
            Self::Simulate(args) => args.execute(),
            Self::Export(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn init_tracing(verbose: bool) {
    // Logs go to stderr so JSON on stdout stays parseable
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match cli.command.execute() {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    };

    std::process::exit(code.code());
}
