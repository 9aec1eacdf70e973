// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod filesystem;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::error::Result;
use crate::stats::{RunResult, Tally};

/// Run the line counting engine over `config.root`.
///
/// Returns a `RunResult` with the final tally and every recoverable error
/// met along the way.
///
/// # Errors
///
/// Returns an error only when the walk cannot start (e.g. the root is missing).
/// Unreadable directories and files are recorded in `RunResult::errors`.
pub fn run(config: &Config) -> Result<RunResult> {
    let mut tally = Tally::new();
    let errors = filesystem::walk(config, &mut tally)?;
    Ok(RunResult { tally, errors })
}
