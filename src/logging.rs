//! Diagnostic logging.
//!
//! Logs go to stderr so they never mix with the HTML on stdout. The filter is
//! taken from `A2H_LOG` (tracing `EnvFilter` syntax) when set, otherwise from
//! the `-v` count.

use std::io::IsTerminal;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit filter, e.g. `A2H_LOG=a2h=trace`.
pub const LOG_ENV: &str = "A2H_LOG";

/// Map the number of `-v` flags to a level. Warnings are always shown.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global stderr subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init(verbose: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for_verbosity(verbose).into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
