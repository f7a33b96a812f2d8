//! Generator binary entry point
//!
//! Turns any failure into a one-line `error: <message>` diagnostic and
//! exit status 84; `--help` prints usage and exits 0.

use std::env;
use std::process::ExitCode;

use generator::{Command, generate, parse_args, print_usage};

/// Exit status for any argument, config, or write failure.
const EXIT_FAILURE: u8 = 84;

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    match parse_args(&args)? {
        Command::Help => {
            print_usage();
            Ok(())
        }
        Command::Run(requests) => {
            for request in &requests {
                generate(request)?;
            }
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
