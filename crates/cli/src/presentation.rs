// crates/cli/src/presentation.rs
use linecount_engine::stats::Tally;
use std::io::{self, Write};
use std::time::Duration;

/// Totals and timing of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub lines: u64,
    pub files: u64,
    pub elapsed: Duration,
}

impl Summary {
    pub const fn new(tally: Tally, elapsed: Duration) -> Self {
        Self {
            lines: tally.lines,
            files: tally.files,
            elapsed,
        }
    }

    /// Elapsed wall time rounded down to whole seconds.
    pub const fn elapsed_secs(&self) -> u64 {
        self.elapsed.as_secs()
    }

    /// Lines per second. Runs shorter than a second divide by one.
    pub const fn throughput(&self) -> u64 {
        let secs = self.elapsed_secs();
        self.lines / if secs == 0 { 1 } else { secs }
    }
}

/// Write the two summary lines.
///
/// # Errors
/// Propagates write failures from `out`.
pub fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(
        out,
        "Counted {} lines on {} files in {}s",
        summary.lines,
        summary.files,
        summary.elapsed_secs()
    )?;
    writeln!(out, "Throughput: {} lines/s", summary.throughput())
}

pub fn print_summary(summary: &Summary) {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    // stdout closed early (e.g. piped into `head`) is not worth a panic.
    let _ = write_summary(&mut lock, summary);
}
