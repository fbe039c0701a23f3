//! Thread-safe aggregation of completed placements

use crate::io::error::{QueensError, Result};
use crate::spatial::Placement;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// Destination for every complete placement a worker finds
///
/// Handed to each task explicitly at dispatch time. Implementations must accept
/// concurrent calls from all workers of a run.
pub trait SolutionSink: Sync {
    /// Record one complete placement
    ///
    /// `rows` is the worker's working buffer and will be overwritten as soon as
    /// this returns, so implementations that keep it must copy it.
    fn record(&self, rows: &[usize]);
}

/// Collects copies of every recorded placement behind a single lock
#[derive(Debug, Default)]
pub struct SolutionCollector {
    solutions: Mutex<Vec<Placement>>,
}

impl SolutionCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of placements recorded so far
    pub fn len(&self) -> usize {
        self.solutions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take the collected placements once every worker has finished
    ///
    /// # Errors
    ///
    /// Returns `WorkerFailure` if a worker panicked while holding the lock, since
    /// the collection may then be missing that worker's results.
    pub fn into_solutions(self) -> Result<Vec<Placement>> {
        self.solutions
            .into_inner()
            .map_err(|poisoned| QueensError::WorkerFailure {
                reason: format!(
                    "result collection poisoned after {} solutions",
                    poisoned.get_ref().len()
                ),
            })
    }
}

impl SolutionSink for SolutionCollector {
    fn record(&self, rows: &[usize]) {
        // A poisoned lock means the run is already failing; keep appending so
        // the barrier still completes and reports the failure
        self.solutions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Placement::from(rows));
    }
}

/// Counts recorded placements without storing them
#[derive(Debug, Default)]
pub struct SolutionCounter {
    count: AtomicUsize,
}

impl SolutionCounter {
    /// Create a counter starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of placements recorded so far
    pub fn count(&self) -> usize {
        self.count.load(Ordering::Acquire)
    }
}

impl SolutionSink for SolutionCounter {
    fn record(&self, _rows: &[usize]) {
        self.count.fetch_add(1, Ordering::AcqRel);
    }
}
