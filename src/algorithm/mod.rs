/// Parallel search orchestration and worker pool management
pub mod engine;
/// Recursive backtracking over first-column subtrees
pub mod search;
/// Thread-safe sinks that aggregate completed placements
pub mod sink;
/// Row and diagonal check for a candidate queen
pub mod validator;
/// Whole-placement checks and known solution counts
pub mod verification;
