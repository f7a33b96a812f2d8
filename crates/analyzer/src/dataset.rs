//! Dataset line parsing
//!
//! One example per line, whitespace-tokenized: the first six tokens form a
//! full FEN record and any remaining tokens form the label, with an
//! optional trailing color word. Shorter lines carry a bare position.

use chessnet_core::{encode_label, encode_position};
use log::debug;

/// Number of whitespace-separated fields in a full FEN record.
pub const FEN_FIELDS: usize = 6;

/// One parsed dataset line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub fen: String,
    /// Expected label, present only on lines with more than six fields.
    pub label: Option<String>,
}

/// Splits one line into position and optional label.
///
/// Returns `None` for blank lines.
pub fn parse_line(line: &str) -> Option<Example> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() > FEN_FIELDS {
        Some(Example {
            fen: tokens[..FEN_FIELDS].join(" "),
            label: Some(tokens[FEN_FIELDS..].join(" ")),
        })
    } else {
        Some(Example {
            fen: line.to_string(),
            label: None,
        })
    }
}

/// Loads and encodes every labeled line of a training file.
///
/// Unlabeled lines and lines that fail to encode are skipped, not fatal;
/// each skip is traced at debug level.
pub fn load_training_data(path: &str) -> Result<Vec<(Vec<f64>, Vec<f64>)>, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;

    let mut samples = Vec::new();
    for (number, line) in contents.lines().enumerate() {
        let Some(example) = parse_line(line) else {
            continue;
        };
        let Some(label) = example.label else {
            debug!("line {}: no label, skipped", number + 1);
            continue;
        };
        match (encode_position(&example.fen), encode_label(&label)) {
            (Ok(input), Ok(target)) => samples.push((input, target)),
            (Err(e), _) | (_, Err(e)) => {
                debug!("line {}: {}, skipped", number + 1, e);
            }
        }
    }
    Ok(samples)
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod dataset_tests;
