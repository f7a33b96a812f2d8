//! Prediction mode: score positions and report accuracy

use chessnet_core::{Network, decode_label, encode_position, forward, side_to_move};

use crate::dataset::parse_line;

/// Verdicts that carry a color qualifier when displayed.
fn takes_color_qualifier(label: &str) -> bool {
    label == "Check" || label == "Checkmate"
}

/// Scores one position and renders the display label.
///
/// Check and Checkmate verdicts get the side-to-move color appended; the
/// qualifier is display-only and never part of the numeric output.
pub fn predict_line(network: &Network, fen: &str) -> Result<String, String> {
    let input = encode_position(fen).map_err(|e| e.to_string())?;
    let (output, _) = forward(network, &input).map_err(|e| e.to_string())?;
    let label = decode_label(&output);

    if takes_color_qualifier(label) {
        let color = side_to_move(fen).map_err(|e| e.to_string())?;
        Ok(format!("{} {}", label, color.name()))
    } else {
        Ok(label.to_string())
    }
}

/// Runs prediction over every line of a data file.
///
/// Lines carrying an expected label are scored for accuracy by exact string
/// comparison, qualifier included. A line that fails to parse is reported
/// and the run continues; the accuracy summary prints once any expected
/// label was seen.
pub fn run_predict(network: &Network, data_file: &str) -> Result<(), String> {
    let contents = std::fs::read_to_string(data_file)
        .map_err(|e| format!("Failed to read {}: {}", data_file, e))?;

    let mut total = 0u32;
    let mut correct = 0u32;

    for line in contents.lines() {
        let Some(example) = parse_line(line) else {
            continue;
        };
        match predict_line(network, &example.fen) {
            Ok(prediction) => {
                if let Some(expected) = &example.label {
                    total += 1;
                    let matched = prediction == *expected;
                    if matched {
                        correct += 1;
                    }
                    let mark = if matched { "✓" } else { "✗" };
                    println!("{} {} (expected: {})", mark, prediction, expected);
                } else {
                    println!("{}", prediction);
                }
            }
            Err(e) => println!("Error processing FEN: {}", e),
        }
    }

    if total > 0 {
        let accuracy = correct as f64 / total as f64 * 100.0;
        println!();
        println!("{}", "=".repeat(50));
        println!("Results: {}/{} correct ({:.2}%)", correct, total, accuracy);
        println!("{}", "=".repeat(50));
    }

    Ok(())
}

#[cfg(test)]
#[path = "predict_tests.rs"]
mod predict_tests;
