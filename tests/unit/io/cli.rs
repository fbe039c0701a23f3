//! Tests for command-line parsing and one-shot reporting

#[cfg(test)]
mod tests {
    use clap::Parser;
    use nqueens::QueensError;
    use nqueens::io::cli::{Cli, Runner};
    use tempfile::TempDir;

    fn report(args: &[&str], board_size: usize) -> (usize, String) {
        let runner = Runner::new(Cli::parse_from(args.iter().copied()));
        let mut out = Vec::new();
        let total = runner.report(board_size, &mut out).unwrap();
        (total, String::from_utf8(out).unwrap())
    }

    // Tests CLI parsing with no arguments selects interactive mode
    // Verified by giving board_size a default
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["nqueens"]);

        assert_eq!(cli.board_size, None);
        assert_eq!(cli.workers, None);
        assert!(!cli.count);
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all available arguments
    // Verified by renaming long flags
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "nqueens",
            "10",
            "--workers",
            "3",
            "--count",
            "--quiet",
            "--verify",
            "--export-dir",
            "boards",
            "--sequential",
            "-vv",
        ]);

        assert_eq!(cli.board_size, Some(10));
        assert_eq!(cli.workers, Some(3));
        assert!(cli.count);
        assert!(cli.quiet);
        assert!(cli.verify);
        assert!(cli.sequential);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.export_dir.as_deref(), Some(std::path::Path::new("boards")));
        assert!(!cli.should_show_progress());
    }

    // Tests short flag parsing (-w, -c, -q, -e)
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["nqueens", "6", "-w", "2", "-c", "-q", "-e", "out"]);
        assert_eq!(cli.workers, Some(2));
        assert!(cli.count);
        assert!(cli.quiet);
        assert!(cli.export_dir.is_some());
    }

    // Tests worker count defaults to one per board row
    // Verified by defaulting to a single worker
    #[test]
    fn test_worker_count_default() {
        let cli = Cli::parse_from(["nqueens"]);
        assert_eq!(cli.worker_count_for(9), 9);

        let cli = Cli::parse_from(["nqueens", "-w", "2"]);
        assert_eq!(cli.worker_count_for(9), 2);
    }

    // Tests counting alone skips storing placements
    // Verified by ignoring the export directory
    #[test]
    fn test_needs_placements() {
        assert!(Cli::parse_from(["nqueens"]).needs_placements());
        assert!(!Cli::parse_from(["nqueens", "-c"]).needs_placements());
        assert!(Cli::parse_from(["nqueens", "-c", "--verify"]).needs_placements());
        assert!(Cli::parse_from(["nqueens", "-c", "-e", "x"]).needs_placements());
    }

    // Tests full reports list sorted solutions with grids and a summary
    // Verified by printing solutions in collection order
    #[test]
    fn test_report_lists_solutions() {
        let (total, output) = report(&["nqueens", "-q"], 4);

        assert_eq!(total, 2);
        let first = output.find("Solution 1 of 2: [1, 3, 0, 2]");
        let second = output.find("Solution 2 of 2: [2, 0, 3, 1]");
        assert!(first.is_some() && second.is_some());
        assert!(first < second);
        assert_eq!(output.matches("+---+---+---+---+").count(), 10);
        assert!(output.ends_with("N=4: 2 solutions found\n"));
    }

    // Tests count mode prints only the summary
    // Verified by rendering grids in count mode
    #[test]
    fn test_report_count_only() {
        let (total, output) = report(&["nqueens", "-q", "-c"], 8);
        assert_eq!(total, 92);
        assert_eq!(output, "N=8: 92 solutions found\n");
    }

    // Tests sequential and parallel runs print identical reports
    // Verified by skipping the sort before printing
    #[test]
    fn test_report_sequential_matches_parallel() {
        let (_, parallel) = report(&["nqueens", "-q", "-w", "3"], 6);
        let (_, sequential) = report(&["nqueens", "-q", "--sequential"], 6);
        assert_eq!(parallel, sequential);
    }

    // Tests verification accepts correct results
    // Verified by comparing against the count for board_size + 1
    #[test]
    fn test_report_verify() {
        let (total, _) = report(&["nqueens", "-q", "-c", "--verify"], 7);
        assert_eq!(total, 40);
    }

    // Tests export writes one image per solution
    // Verified by exporting only the first solution
    #[test]
    fn test_report_export() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("boards");
        let target_arg = target.to_string_lossy().to_string();

        let (total, output) = report(&["nqueens", "-q", "-c", "-e", target_arg.as_str()], 6);
        assert_eq!(total, 4);
        assert!(output.contains("Exported 4 images"));
        assert!(target.join("solution_0004.png").exists());
        assert!(!target.join("solution_0005.png").exists());
    }

    // Tests invalid sizes and worker counts surface configuration errors
    // Verified by clamping zero workers to one
    #[test]
    fn test_report_rejects_zero() {
        let runner = Runner::new(Cli::parse_from(["nqueens", "-q"]));
        let mut out = Vec::new();
        assert!(matches!(
            runner.report(0, &mut out),
            Err(QueensError::InvalidConfiguration { .. })
        ));

        let runner = Runner::new(Cli::parse_from(["nqueens", "-q", "-w", "0"]));
        assert!(matches!(
            runner.report(5, &mut out),
            Err(QueensError::InvalidConfiguration { .. })
        ));
        assert!(out.is_empty());
    }

    // Tests zero workers are rejected even when the search runs sequentially
    // Verified by validating only on the pooled path
    #[test]
    fn test_sequential_rejects_zero_workers() {
        let mut out = Vec::new();
        for extra in [&[][..], &["-c"][..]] {
            let mut args = vec!["nqueens", "-q", "-w", "0", "--sequential"];
            args.extend_from_slice(extra);
            let runner = Runner::new(Cli::parse_from(args));
            assert!(matches!(
                runner.report(5, &mut out),
                Err(QueensError::InvalidConfiguration { .. })
            ));
        }
        assert!(out.is_empty());
    }
}
