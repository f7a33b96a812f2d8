//! Generator CLI for fresh classifier networks
//!
//! Consumes line-oriented `key=value` config files and emits
//! Xavier-initialized network files ready for the analyzer.
//!
//! # Usage
//!
//! ```bash
//! # Emit basic_1.nn and basic_2.nn from one config
//! generator basic.conf 2
//! ```

mod config;

pub use config::*;

use std::path::Path;

use chessnet_core::Network;
use log::debug;

/// One generation request: a config file and how many networks to emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub config_file: String,
    pub count: u32,
}

/// Outcome of argument parsing: either run, or print usage and leave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(Vec<Request>),
}

pub fn print_usage() {
    println!("USAGE");
    println!("    generator config_file_1 nb_1 [config_file_2 nb_2...]");
    println!();
    println!("DESCRIPTION");
    println!("    config_file_i    Configuration file describing the neural network.");
    println!("    nb_i             Number of networks to generate from this config.");
}

/// Parses the paired `config nb` argument list.
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    if matches!(args.first().map(String::as_str), Some("--help") | Some("-h")) {
        return Ok(Command::Help);
    }
    if args.is_empty() || args.len() % 2 != 0 {
        return Err("Invalid number of arguments".to_string());
    }

    let mut requests = Vec::with_capacity(args.len() / 2);
    for pair in args.chunks(2) {
        let count: u32 = pair[1]
            .parse()
            .map_err(|_| format!("Invalid number: {}", pair[1]))?;
        if count == 0 {
            return Err("Number of networks must be > 0".to_string());
        }
        requests.push(Request {
            config_file: pair[0].clone(),
            count,
        });
    }
    Ok(Command::Run(requests))
}

/// Output filename for the `index`-th network of a config: the config path
/// with a trailing `.conf` stripped, plus `_{index}.nn`.
pub fn output_filename(config_file: &str, index: u32) -> String {
    let stem = config_file.strip_suffix(".conf").unwrap_or(config_file);
    format!("{}_{}.nn", stem, index)
}

/// Generates `count` fresh networks from one config file.
///
/// Each network draws its own random weights; files are written in compact
/// JSON and announced on stdout.
pub fn generate(request: &Request) -> Result<(), String> {
    let config = parse_config_file(&request.config_file)?;
    debug!("{}: {:?}", request.config_file, config);

    for index in 1..=request.count {
        let filename = output_filename(&request.config_file, index);
        let network = Network::with_random_weights(
            config.input_size,
            &config.layer_sizes,
            &config.activations,
            config.learning_rate,
        );
        network
            .save_compact(Path::new(&filename))
            .map_err(|e| e.to_string())?;
        println!("Generated {}", filename);
    }
    Ok(())
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
