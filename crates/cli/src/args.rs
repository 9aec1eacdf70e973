// crates/cli/src/args.rs
use clap::{CommandFactory, Parser};
use std::ffi::OsString;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "linecount",
    version = crate::VERSION,
    args_override_self = true,
    about = "Counts the lines of every file under the current directory and reports throughput"
)]
pub struct Args {
    /// Print skipped directories and unreadable files to stderr
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Parse `argv`, dropping every argument the command does not define.
    ///
    /// The first item is the binary name. Unknown flags and stray positionals
    /// are ignored rather than rejected, so `--debug` is honoured wherever it
    /// appears.
    pub fn parse_lenient<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut cmd = Self::command();
        cmd.build();
        let known: Vec<OsString> = cmd
            .get_arguments()
            .flat_map(|arg| {
                let long = arg.get_long().map(|l| OsString::from(format!("--{l}")));
                let short = arg.get_short().map(|s| OsString::from(format!("-{s}")));
                long.into_iter().chain(short)
            })
            .collect();

        let mut argv = argv.into_iter().map(Into::into);
        let bin = argv.next();
        let kept = bin
            .into_iter()
            .chain(argv.filter(|arg| known.contains(arg)));
        Self::parse_from(kept)
    }
}
