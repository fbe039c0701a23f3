//! CLI entry point for the parallel N-Queens solver

use clap::Parser;
use nqueens::io::cli::{Cli, Runner};
use nqueens::io::logging;

fn main() -> nqueens::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    let runner = Runner::new(cli);
    runner.run()
}
