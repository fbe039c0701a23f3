//! Interactive prompt loop for repeated searches

use crate::io::cli::Runner;
use crate::io::configuration::{PROMPT, QUIT_COMMANDS};
use crate::io::error::{Result, invalid_configuration};
use std::io::{BufRead, Write};
use tracing::trace;

/// Parse a board size typed at the prompt
///
/// # Errors
///
/// Returns `InvalidConfiguration` if the input is not a non-negative whole
/// number.
pub fn parse_board_size(input: &str) -> Result<usize> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|error| invalid_configuration("board_size", &input.trim(), &error))
}

/// Whether an input line ends the session
pub fn is_quit(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed.is_empty()
        || QUIT_COMMANDS
            .iter()
            .any(|command| command.eq_ignore_ascii_case(trimmed))
}

/// Prompts for board sizes until the user quits
///
/// Bad input is reported and prompted for again; only search failures and
/// terminal errors end the session early.
pub struct Session<'a> {
    runner: &'a Runner,
}

impl<'a> Session<'a> {
    /// Create a session that solves through `runner`
    pub const fn new(runner: &'a Runner) -> Self {
        Self { runner }
    }

    /// Read board sizes from `input` and write results to `out`
    ///
    /// Returns the number of boards solved.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails, or a search fails for a
    /// reason other than its configuration.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> Result<usize> {
        let mut solved = 0;
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }
            trace!(input = line.trim(), "read board size");
            if is_quit(&line) {
                break;
            }

            let outcome = parse_board_size(&line).and_then(|size| self.runner.report(size, out));
            match outcome {
                Ok(_) => solved += 1,
                Err(error) if error.is_configuration() => writeln!(out, "{error}")?,
                Err(error) => return Err(error),
            }
        }
        Ok(solved)
    }
}
