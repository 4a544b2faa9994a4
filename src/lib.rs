//! Palette Generator Library
//!
//! This library derives five-color palettes from a base color under a color
//! scheme, scores WCAG contrast, suggests accessible replacements, simulates
//! colorblind perception, and exports palettes as CSS or Tailwind code.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod services;
