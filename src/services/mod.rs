//! Service layer for color math.
//!
//! Palette generation, contrast scoring and colorblind simulation. Every
//! function here is pure: the same inputs always produce the same outputs.

pub mod colorblind;
pub mod contrast;
pub mod palette;

// Re-export commonly used types and functions
pub use colorblind::{simulate, simulate_colorblind, simulate_palette, Simulation};
pub use contrast::{
    audit_palette, contrast_ratio, contrast_report, default_backgrounds, luminance,
    suggest_accessible_color, AuditEntry, Background, ContrastReport, ContrastResult, WcagGrade,
};
pub use palette::{generate_palette, roles};
