//! Command-line interface for one-shot and interactive N-Queens runs

use crate::algorithm::engine::{EngineConfig, SearchEngine};
use crate::algorithm::search::solve_sequential;
use crate::algorithm::verification::verify_solutions;
use crate::io::error::Result;
use crate::io::grid::render_grid;
use crate::io::image::export_all;
use crate::io::progress::ProgressManager;
use crate::io::session::Session;
use crate::spatial::Placement;
use clap::{ArgAction, Parser};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "nqueens")]
#[command(
    author,
    version,
    about = "Enumerate every N-Queens solution using a parallel backtracking search"
)]
/// Command-line arguments for the solver
// Independent on/off switches read more clearly as flags than as an enum
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Board size; omit to be prompted repeatedly
    #[arg(value_name = "BOARD_SIZE")]
    pub board_size: Option<usize>,

    /// Worker threads in the pool (defaults to one per board row)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Print only the number of solutions
    #[arg(short, long)]
    pub count: bool,

    /// Suppress progress output and all logging below errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Check every solution and the total against known counts
    #[arg(long)]
    pub verify: bool,

    /// Write each solution as a PNG image into this directory
    #[arg(short, long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Search on the calling thread only, in first-row order
    #[arg(long)]
    pub sequential: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Worker count to use for a board, falling back to one per first row
    pub fn worker_count_for(&self, board_size: usize) -> usize {
        self.workers.unwrap_or(board_size)
    }

    /// Whether individual placements are needed, not just their number
    pub const fn needs_placements(&self) -> bool {
        !self.count || self.verify || self.export_dir.is_some()
    }
}

/// Runs searches as directed by the command line and prints the results
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Arguments this runner was created with
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Run once for the given board size, or interactively without one
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the search fails,
    /// verification fails or output cannot be written.
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match self.cli.board_size {
            Some(board_size) => self.report(board_size, &mut out).map(|_| ()),
            None => {
                let stdin = std::io::stdin();
                Session::new(self)
                    .run(stdin.lock(), &mut out)
                    .map(|_| ())
            }
        }
    }

    /// Find every solution for `board_size`, sorted lexicographically
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, a worker fails or
    /// verification is requested and fails.
    pub fn solve(&self, board_size: usize) -> Result<Vec<Placement>> {
        let config = self.engine_config(board_size)?;
        let mut placements = if self.cli.sequential {
            solve_sequential(board_size)?
        } else {
            let engine = SearchEngine::from_config(config)?;
            if self.cli.should_show_progress() {
                let progress = ProgressManager::new(board_size);
                let result = engine.solve_observed(&progress);
                progress.finish();
                result?
            } else {
                engine.solve()?
            }
        };
        placements.sort_unstable();

        if self.cli.verify {
            verify_solutions(board_size, &placements)?;
        }
        Ok(placements)
    }

    /// Count solutions for `board_size` without rendering them
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or a worker fails.
    pub fn count(&self, board_size: usize) -> Result<usize> {
        let config = self.engine_config(board_size)?;
        if self.cli.sequential {
            return solve_sequential(board_size).map(|placements| placements.len());
        }
        SearchEngine::from_config(config)?.count()
    }

    // Validated even for sequential runs so `-w 0` is rejected the same way
    fn engine_config(&self, board_size: usize) -> Result<EngineConfig> {
        let config = EngineConfig::new(board_size, self.cli.worker_count_for(board_size));
        config.validate()?;
        Ok(config)
    }

    /// Solve one board and write the results to `out`
    ///
    /// Returns the number of solutions found.
    ///
    /// # Errors
    ///
    /// Returns an error if solving, exporting or writing fails.
    pub fn report<W: Write>(&self, board_size: usize, out: &mut W) -> Result<usize> {
        if !self.cli.needs_placements() {
            let total = self.count(board_size)?;
            writeln!(out, "N={board_size}: {total} solutions found")?;
            return Ok(total);
        }

        let placements = self.solve(board_size)?;
        let total = placements.len();

        if !self.cli.count {
            for (index, placement) in placements.iter().enumerate() {
                writeln!(out, "Solution {} of {total}: {placement}", index + 1)?;
                write!(out, "{}", render_grid(placement))?;
                writeln!(out)?;
            }
        }
        writeln!(out, "N={board_size}: {total} solutions found")?;

        if let Some(ref directory) = self.cli.export_dir {
            let written = export_all(&placements, directory)?;
            info!(count = written.len(), directory = %directory.display(), "exported boards");
            writeln!(
                out,
                "Exported {} images to {}",
                written.len(),
                directory.display()
            )?;
        }

        Ok(total)
    }
}
