//! Input/output: errors, constants, rendering, scripts and the CLI

/// Command-line parsing and batch script processing
pub mod cli;
/// Crate-wide constants and defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Progress display for batch runs
pub mod progress;
/// Text table rendering of grids
pub mod render;
/// Command scripts driving a grid
pub mod script;
