// crates/cli/src/logging.rs
use log::LevelFilter;
use std::io::Write;

/// Only the engine's diagnostics are surfaced; dependencies stay silent.
const ENGINE_TARGET: &str = "linecount_engine";

/// Install the stderr logger. Diagnostics are printed bare, one per record.
///
/// # Errors
/// Fails if a logger was already installed.
pub fn init(debug: bool) -> crate::error::Result<()> {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Off
    };

    env_logger::Builder::new()
        .filter_level(LevelFilter::Off)
        .filter_module(ENGINE_TARGET, level)
        .target(env_logger::Target::Stderr)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .try_init()?;
    Ok(())
}
