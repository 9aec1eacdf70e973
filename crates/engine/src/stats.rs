use crate::error::EngineError;
use std::path::PathBuf;

/// Running totals for one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub files: u64,
    pub lines: u64,
}

impl Tally {
    #[inline]
    pub const fn new() -> Self {
        Self { files: 0, lines: 0 }
    }

    #[inline]
    pub const fn record_file(&mut self) {
        self.files += 1;
    }

    #[inline]
    pub const fn add_lines(&mut self, lines: u64) {
        self.lines += lines;
    }
}

/// Outcome of a completed walk.
///
/// `errors` holds the entries that were skipped or contributed no lines,
/// in the order they were met. They never change `tally`.
#[derive(Debug, Default)]
pub struct RunResult {
    pub tally: Tally,
    pub errors: Vec<(PathBuf, EngineError)>,
}
