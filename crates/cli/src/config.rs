// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
pub use linecount_engine::config::Config;

/// Engine configuration for a run rooted at the working directory.
///
/// # Errors
/// Fails if the working directory cannot be determined.
pub fn from_args(args: &Args) -> Result<Config> {
    let root = std::env::current_dir().map_err(AppError::CurrentDir)?;
    Ok(Config {
        root,
        debug: args.debug,
    })
}
