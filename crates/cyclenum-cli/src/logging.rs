//! `tracing` subscriber setup for the `cyclenum` binary.
//!
//! Log lines go to stderr so stdout stays clean for results. The level comes
//! from `--quiet` / `--verbose` unless `RUST_LOG` is set, in which case
//! `RUST_LOG` wins.

use tracing_subscriber::EnvFilter;

/// Filter directive implied by the verbosity flags.
pub fn default_directive(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Installs the global subscriber. Call once, before any command runs.
pub fn init(quiet: bool, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet, verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
