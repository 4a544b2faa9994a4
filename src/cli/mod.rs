//! CLI command handlers for palettegen.
//!
//! This module provides headless, scriptable access to palette generation,
//! contrast checking and colorblind simulation.

pub mod audit;
pub mod common;
pub mod config;
pub mod contrast;
pub mod convert;
pub mod export;
pub mod palette;
pub mod simulate;

// Re-export types used by main.rs and tests
pub use audit::AuditArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use contrast::ContrastArgs;
pub use convert::ConvertArgs;
pub use export::ExportArgs;
pub use palette::PaletteArgs;
pub use simulate::SimulateArgs;
