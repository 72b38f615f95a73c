//! Logging setup for host applications embedding the resolver.

use crate::Result;
use crate::error::ConfigError;

/// Maps a verbosity count and quiet flag to a log level.
///
/// `quiet` wins over any verbosity: errors only. Otherwise 0 means INFO,
/// 1 means DEBUG, and anything higher means TRACE.
pub fn level_for(verbose: u8, quiet: bool) -> tracing::Level {
    if quiet {
        return tracing::Level::ERROR;
    }
    match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

/// Installs a global `tracing` subscriber at the level chosen by
/// [`level_for`].
///
/// The format is kept terse (no targets, thread ids, or source locations)
/// since the resolver emits only a handful of startup events.
///
/// # Errors
/// Returns `ConfigError::Configuration` when a global subscriber is already
/// installed.
pub fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbose, quiet))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .map_err(|e| ConfigError::configuration(format!("failed to initialize logging: {e}")))?;

    Ok(())
}
