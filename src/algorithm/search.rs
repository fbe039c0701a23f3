//! Depth-first backtracking over one first-column subtree

use crate::algorithm::engine::EngineConfig;
use crate::algorithm::sink::{SolutionCollector, SolutionSink};
use crate::algorithm::validator::is_valid;
use crate::io::error::Result;
use crate::spatial::Placement;

/// One unit of dispatched work: a fixed first-column row
///
/// The search resumes from column 1 with column 0 pinned to `first_row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    /// Row of the queen in column 0
    pub first_row: usize,
    /// Dimension of the board being searched
    pub board_size: usize,
}

impl Task {
    /// Build the full task list for a board, one task per first-column row
    pub fn partition(board_size: usize) -> Vec<Self> {
        (0..board_size)
            .map(|first_row| Self {
                first_row,
                board_size,
            })
            .collect()
    }

    /// Explore the whole subtree below this task's first queen
    ///
    /// Allocates a working buffer owned by the calling worker and returns the
    /// number of complete placements recorded into `sink`.
    pub fn run(&self, sink: &dyn SolutionSink) -> usize {
        if self.first_row >= self.board_size {
            return 0;
        }
        let mut placement = vec![0; self.board_size];
        if let Some(first) = placement.first_mut() {
            *first = self.first_row;
        }
        place_from(1, &mut placement, sink)
    }
}

/// Fill `placement` from `column` onwards, recording every completion
///
/// Cells at `column` and beyond are overwritten on each trial instead of
/// being cleared on the way back up; only cells left of the current column
/// are ever read.
pub fn place_from(column: usize, placement: &mut [usize], sink: &dyn SolutionSink) -> usize {
    let board_size = placement.len();
    if column >= board_size {
        sink.record(placement);
        return 1;
    }

    let mut found = 0;
    for row in 0..board_size {
        if !is_valid(placement, column, row) {
            continue;
        }
        if let Some(cell) = placement.get_mut(column) {
            *cell = row;
        }
        found += place_from(column + 1, placement, sink);
    }
    found
}

/// Single-threaded reference search
///
/// Runs the tasks in first-row order on the calling thread, so placements come
/// back in lexicographic order.
///
/// # Errors
///
/// Returns `InvalidConfiguration` if `board_size` is zero.
pub fn solve_sequential(board_size: usize) -> Result<Vec<Placement>> {
    EngineConfig::new(board_size, 1).validate()?;

    let collector = SolutionCollector::new();
    for task in Task::partition(board_size) {
        task.run(&collector);
    }
    collector.into_solutions()
}
