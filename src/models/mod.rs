//! Data models for colors, schemes, and palettes.
//!
//! This module contains the value types used throughout the application.
//! Models are independent of the CLI and of any presentation logic.

pub mod error;
pub mod hsl;
pub mod palette;
pub mod rgb;
pub mod scheme;
pub mod vision;

// Re-export all model types
pub use error::ColorError;
pub use hsl::Hsl;
pub use palette::{Palette, Swatch};
pub use rgb::RgbColor;
pub use scheme::{Role, Scheme};
pub use vision::Vision;
