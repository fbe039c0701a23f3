//! Placement and board data structures
//!
//! This module contains the data shared by the search and the renderers:
//! - Column-indexed placements produced by the search
//! - Board occupancy views used for drawing

/// Occupancy grid derived from a placement
pub mod board;
/// Column-indexed queen placements
pub mod placement;

pub use board::Board;
pub use placement::Placement;
