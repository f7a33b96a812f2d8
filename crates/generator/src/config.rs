//! Generator configuration files
//!
//! Line-oriented `key=value` format. `#` starts a comment; blank lines and
//! lines without `=` are ignored. Recognized keys: `input_size`,
//! `layer_sizes` (comma-separated), `activations` (comma-separated),
//! `learning_rate`.

use chessnet_core::{Activation, DEFAULT_LEARNING_RATE};

/// Parsed network-generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub input_size: usize,
    pub layer_sizes: Vec<usize>,
    pub activations: Vec<Activation>,
    pub learning_rate: f64,
}

/// Reads and parses a config file from disk.
pub fn parse_config_file(path: &str) -> Result<GeneratorConfig, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    parse_config(&contents)
}

/// Parses config text into validated generation parameters.
///
/// `layer_sizes` and `activations` must be present, non-empty, and equal in
/// length; sizes must be positive so the Xavier range is never degenerate.
/// `learning_rate` is optional.
pub fn parse_config(contents: &str) -> Result<GeneratorConfig, String> {
    let mut input_size = None;
    let mut layer_sizes = None;
    let mut activations = None;
    let mut learning_rate = DEFAULT_LEARNING_RATE;

    for line in contents.lines() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());

        match key {
            "input_size" => {
                input_size = Some(
                    parse_size(value)
                        .ok_or_else(|| "input_size must be a positive integer".to_string())?,
                );
            }
            "layer_sizes" => {
                let sizes = split_list(value)
                    .map(parse_size)
                    .collect::<Option<Vec<_>>>()
                    .ok_or_else(|| {
                        "layer_sizes must be comma-separated positive integers".to_string()
                    })?;
                layer_sizes = Some(sizes);
            }
            "activations" => {
                activations = Some(split_list(value).map(Activation::from_name).collect());
            }
            "learning_rate" => {
                learning_rate = value
                    .parse::<f64>()
                    .map_err(|_| "learning_rate must be a number".to_string())?;
            }
            _ => {}
        }
    }

    let input_size = input_size.ok_or_else(|| "missing input_size".to_string())?;
    let layer_sizes: Vec<usize> = layer_sizes.ok_or_else(|| "missing layer_sizes".to_string())?;
    let activations: Vec<Activation> =
        activations.ok_or_else(|| "missing activations".to_string())?;

    if layer_sizes.is_empty() {
        return Err("layer_sizes must not be empty".to_string());
    }
    if layer_sizes.len() != activations.len() {
        return Err(format!(
            "expected {} activations for {} layers, got {}",
            layer_sizes.len(),
            layer_sizes.len(),
            activations.len()
        ));
    }

    Ok(GeneratorConfig {
        input_size,
        layer_sizes,
        activations,
        learning_rate,
    })
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|p| !p.is_empty())
}

fn parse_size(value: &str) -> Option<usize> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Some(n),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
