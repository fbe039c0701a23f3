//! Parallel enumeration of every solution to the N-Queens problem
//!
//! The search fixes the queen in column 0 to each possible row, runs one
//! depth-first backtracking task per choice on a bounded worker pool, and
//! gathers every complete placement into a shared collection once all tasks
//! have joined. Solutions can be rendered as bordered text grids or PNG boards.

#![forbid(unsafe_code)]

/// Constraint checking, backtracking search and parallel orchestration
pub mod algorithm;
/// Errors, rendering, progress and the command-line front end
pub mod io;
/// Placement and board data structures
pub mod spatial;

pub use algorithm::engine::{EngineConfig, SearchEngine, solve};
pub use io::error::{QueensError, Result};
pub use spatial::Placement;
