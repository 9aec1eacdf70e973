use linecount_cli::args::Args;
use linecount_cli::error::Result;
use linecount_cli::presentation::{self, Summary};
use linecount_cli::{config, logging};
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    let args = Args::parse_lenient(std::env::args_os());

    match run(&args) {
        Ok(summary) => {
            presentation::print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<Summary> {
    logging::init(args.debug)?;
    let config = config::from_args(args)?;

    let start = Instant::now();
    let result = linecount_engine::run(&config)?;
    let elapsed = start.elapsed();

    Ok(Summary::new(result.tally, elapsed))
}
