//! Analyzer binary entry point
//!
//! Turns any failure into a one-line `error: <message>` diagnostic and
//! exit status 84; `--help` prints usage and exits 0.

use std::env;
use std::path::Path;
use std::process::ExitCode;

use analyzer::{Command, Mode, parse_args, print_usage, run_predict, run_train};
use chessnet_core::Network;

/// Exit status for any argument, file, or training failure.
const EXIT_FAILURE: u8 = 84;

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let invocation = match parse_args(&args)? {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Run(invocation) => invocation,
    };

    let mut network = Network::load(Path::new(&invocation.load_file)).map_err(|e| e.to_string())?;

    match invocation.mode {
        Mode::Train => run_train(&mut network, &invocation.data_file, &invocation.save_file),
        Mode::Predict => run_predict(&network, &invocation.data_file),
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
