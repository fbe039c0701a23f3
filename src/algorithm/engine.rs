//! Parallel search orchestration over a bounded worker pool
//!
//! The board is partitioned by the row of the queen in column 0, giving exactly
//! `board_size` independent tasks. Tasks are spawned into a fixed-size rayon pool
//! and drained as workers free up; the calling thread blocks until every task
//! has finished. First rows that prune quickly finish early, so worker load is
//! uneven. Results are only read after the barrier.

use crate::algorithm::search::Task;
use crate::algorithm::sink::{SolutionCollector, SolutionCounter, SolutionSink};
use crate::io::error::{QueensError, Result, invalid_configuration};
use crate::spatial::Placement;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Instant;
use tracing::{debug, info};

/// Board and pool dimensions for a search run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of rows, columns and queens
    pub board_size: usize,
    /// Number of worker threads in the pool
    pub worker_count: usize,
}

impl EngineConfig {
    /// Pair a board size with a worker count
    pub const fn new(board_size: usize, worker_count: usize) -> Self {
        Self {
            board_size,
            worker_count,
        }
    }

    /// One worker per first-column task
    pub const fn with_default_workers(board_size: usize) -> Self {
        Self::new(board_size, board_size)
    }

    /// Check both dimensions are positive
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` naming the first zero parameter.
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            return Err(invalid_configuration(
                "board_size",
                &self.board_size,
                &"must be at least 1",
            ));
        }
        if self.worker_count == 0 {
            return Err(invalid_configuration(
                "worker_count",
                &self.worker_count,
                &"must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Receives task lifecycle events while a search runs
///
/// Called from worker threads, so implementations must be `Sync`.
pub trait SearchObserver: Sync {
    /// A task finished exploring its subtree
    fn task_finished(&self, _task: &Task, _solutions: usize) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl SearchObserver for Silent {}

/// Enumerates every N-Queens solution for a fixed configuration
///
/// Holds only its configuration; each run builds its own pool, tasks and
/// result collection.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    config: EngineConfig,
}

impl SearchEngine {
    /// Create an engine for `board_size` queens on `worker_count` threads
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if either value is zero.
    pub fn new(board_size: usize, worker_count: usize) -> Result<Self> {
        Self::from_config(EngineConfig::new(board_size, worker_count))
    }

    /// Create an engine with one worker per first-column task
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `board_size` is zero.
    pub fn with_default_workers(board_size: usize) -> Result<Self> {
        Self::from_config(EngineConfig::with_default_workers(board_size))
    }

    /// Create an engine from a prepared configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if either dimension is zero.
    pub fn from_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration this engine runs with
    pub const fn config(&self) -> EngineConfig {
        self.config
    }

    /// Find every solution, blocking until all workers are done
    ///
    /// The order of the returned placements is unspecified. Boards with no
    /// solution (sizes 2 and 3) yield an empty vector.
    ///
    /// # Errors
    ///
    /// Returns `WorkerPool` if the threads cannot be started and
    /// `WorkerFailure` if any task panics.
    pub fn solve(&self) -> Result<Vec<Placement>> {
        self.solve_observed(&Silent)
    }

    /// Find every solution, reporting each finished task to `observer`
    ///
    /// # Errors
    ///
    /// Returns `WorkerPool` if the threads cannot be started and
    /// `WorkerFailure` if any task panics.
    pub fn solve_observed(&self, observer: &dyn SearchObserver) -> Result<Vec<Placement>> {
        let collector = SolutionCollector::new();
        self.run(&collector, observer)?;
        collector.into_solutions()
    }

    /// Count solutions without keeping them
    ///
    /// # Errors
    ///
    /// Returns `WorkerPool` if the threads cannot be started and
    /// `WorkerFailure` if any task panics.
    pub fn count(&self) -> Result<usize> {
        let counter = SolutionCounter::new();
        self.run(&counter, &Silent)?;
        Ok(counter.count())
    }

    fn build_pool(&self) -> Result<ThreadPool> {
        ThreadPoolBuilder::new()
            .num_threads(self.config.worker_count)
            .thread_name(|index| format!("nqueens-worker-{index}"))
            .build()
            .map_err(|source| QueensError::WorkerPool { source })
    }

    fn run(&self, sink: &dyn SolutionSink, observer: &dyn SearchObserver) -> Result<()> {
        let EngineConfig {
            board_size,
            worker_count,
        } = self.config;
        let pool = self.build_pool()?;
        let tasks = Task::partition(board_size);
        let started = Instant::now();
        info!(board_size, worker_count, tasks = tasks.len(), "search started");

        // scope() returns only after every spawned task has completed and
        // re-raises the first panic afterwards
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            pool.scope(|scope| {
                for task in &tasks {
                    scope.spawn(move |_| {
                        let found = task.run(sink);
                        debug!(first_row = task.first_row, found, "task finished");
                        observer.task_finished(task, found);
                    });
                }
            });
        }));

        if let Err(payload) = outcome {
            return Err(QueensError::WorkerFailure {
                reason: panic_message(payload.as_ref()),
            });
        }

        info!(
            board_size,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "search finished"
        );
        Ok(())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "worker panicked".to_string())
}

/// Find every solution for `board_size` queens using `worker_count` threads
///
/// # Errors
///
/// Returns `InvalidConfiguration` before any work starts if either value is
/// zero, otherwise the errors of [`SearchEngine::solve`].
pub fn solve(board_size: usize, worker_count: usize) -> Result<Vec<Placement>> {
    SearchEngine::new(board_size, worker_count)?.solve()
}
