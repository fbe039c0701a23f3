//! Input/output, presentation and error handling around the search engine

/// Command-line parsing and one-shot runs
pub mod cli;
/// Rendering constants and defaults
pub mod configuration;
/// Error types shared by the whole crate
pub mod error;
/// Bordered text grids
pub mod grid;
/// PNG board export
pub mod image;
/// Diagnostic logging setup
pub mod logging;
/// Task progress display
pub mod progress;
/// Interactive prompt loop
pub mod session;
