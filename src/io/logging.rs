//! Diagnostic logging setup for the command-line tool

use tracing_subscriber::EnvFilter;

/// Default filter directive for a verbosity level
///
/// `quiet` wins over any number of `-v` flags.
pub const fn level_directive(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global stderr subscriber
///
/// `RUST_LOG` takes precedence over the verbosity-derived level. Calling this
/// more than once leaves the first subscriber in place.
pub fn init(verbosity: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(verbosity, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
