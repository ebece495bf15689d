// src/main.rs
use clap::Parser;
use std::io;
use std::process::ExitCode;

use csvcheck::Args;
use csvcheck::logging::{LogConfig, init_logging};

/// Exit status for configuration and I/O problems that stop the run itself.
const EXIT_SETUP_ERROR: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = init_logging(&LogConfig::from_verbosity(args.verbose)) {
        eprintln!("error: {err:#}");
        return ExitCode::from(EXIT_SETUP_ERROR);
    }

    let mut stdout = io::stdout().lock();
    let result = csvcheck::run(&args, &mut stdout);

    match result {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_SETUP_ERROR)
        }
    }
}
