//! Tests for task progress tracking

#[cfg(test)]
mod tests {
    use nqueens::algorithm::engine::{SearchEngine, SearchObserver};
    use nqueens::algorithm::search::Task;
    use nqueens::io::progress::ProgressManager;

    // Tests each finished task advances the bar and the solution total
    // Verified by incrementing before adding solutions
    #[test]
    fn test_task_finished_updates() {
        let progress = ProgressManager::hidden(3);
        let task = Task {
            first_row: 0,
            board_size: 3,
        };

        progress.task_finished(&task, 4);
        progress.task_finished(&task, 0);

        assert_eq!(progress.finished_tasks(), 2);
        assert_eq!(progress.solutions(), 4);
        progress.finish();
    }

    // Tests a full run reports every task and solution
    // Verified by skipping the observer in the engine
    #[test]
    fn test_progress_over_search() {
        let progress = ProgressManager::hidden(8);
        let solutions = SearchEngine::new(8, 4)
            .unwrap()
            .solve_observed(&progress)
            .unwrap();

        assert_eq!(progress.finished_tasks(), 8);
        assert_eq!(progress.solutions(), solutions.len());
        progress.finish();
    }
}
