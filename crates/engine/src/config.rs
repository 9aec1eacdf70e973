use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Directory the walk starts from.
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    /// Emit per-entry diagnostics through `log::debug!`.
    #[builder(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            debug: false,
        }
    }
}
