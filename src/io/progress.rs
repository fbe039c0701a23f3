//! Progress display over the first-row tasks of a search

use crate::algorithm::engine::SearchObserver;
use crate::algorithm::search::Task;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;
use std::sync::atomic::{AtomicUsize, Ordering};

static TASK_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] First rows: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks finished tasks and the running solution total
///
/// Advances one step per task, so uneven subtrees show up as an uneven bar.
pub struct ProgressManager {
    bar: ProgressBar,
    solutions: AtomicUsize,
}

impl ProgressManager {
    /// Create a bar drawn to stderr over `task_count` tasks
    pub fn new(task_count: usize) -> Self {
        Self::with_target(task_count, ProgressDrawTarget::stderr())
    }

    /// Create a bar that tracks progress without drawing anything
    pub fn hidden(task_count: usize) -> Self {
        Self::with_target(task_count, ProgressDrawTarget::hidden())
    }

    fn with_target(task_count: usize, target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(task_count as u64), target);
        bar.set_style(TASK_STYLE.clone());
        bar.set_message("0 solutions");
        Self {
            bar,
            solutions: AtomicUsize::new(0),
        }
    }

    /// Number of tasks finished so far
    pub fn finished_tasks(&self) -> u64 {
        self.bar.position()
    }

    /// Solutions reported by finished tasks so far
    pub fn solutions(&self) -> usize {
        self.solutions.load(Ordering::Acquire)
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl SearchObserver for ProgressManager {
    fn task_finished(&self, _task: &Task, solutions: usize) {
        let total = self.solutions.fetch_add(solutions, Ordering::AcqRel) + solutions;
        self.bar.set_message(format!("{total} solutions"));
        self.bar.inc(1);
    }
}
