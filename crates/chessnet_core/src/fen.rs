//! FEN position and label encoding
//!
//! Converts a chess position in Forsyth-Edwards Notation into the flat
//! numeric vector the network consumes, and maps game-state labels to and
//! from one-hot output vectors.
//!
//! Squares are numbered in FEN traversal order: rank 8 first, file a to h,
//! so a8 = 0, h8 = 7, ..., a1 = 56, h1 = 63.

use crate::error::{Error, Result};

/// Number of distinct piece kinds tracked per square.
pub const PIECE_KINDS: usize = 12;

/// Input width: 64 squares x 12 piece kinds, plus one slot for side to move.
pub const INPUT_SIZE: usize = 64 * PIECE_KINDS + 1;

/// Game-state labels in output order.
pub const LABELS: [&str; 4] = ["Nothing", "Check", "Checkmate", "Stalemate"];

/// Number of output classes.
pub const NUM_LABELS: usize = LABELS.len();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Display form used by the Check/Checkmate qualifier.
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

/// Slot index of a piece letter within a square's 12-wide block.
/// White pieces occupy 0-5, black pieces 6-11.
fn piece_index(ch: char) -> Option<usize> {
    match ch {
        'P' => Some(0),
        'N' => Some(1),
        'B' => Some(2),
        'R' => Some(3),
        'Q' => Some(4),
        'K' => Some(5),
        'p' => Some(6),
        'n' => Some(7),
        'b' => Some(8),
        'r' => Some(9),
        'q' => Some(10),
        'k' => Some(11),
        _ => None,
    }
}

/// Encodes the board-placement and side-to-move fields of a FEN string.
///
/// Each occupied square sets exactly one of its 12 piece slots at
/// `square * 12 + piece`; index 768 is 1.0 when white is to move. Digits
/// advance the square counter, `/` consumes nothing, and any other character
/// must be one of the 12 piece letters. The remaining FEN fields are
/// ignored.
pub fn encode_position(fen: &str) -> Result<Vec<f64>> {
    let mut parts = fen.split_whitespace();
    let (board, turn) = match (parts.next(), parts.next()) {
        (Some(board), Some(turn)) => (board, turn),
        _ => {
            return Err(Error::InvalidPosition(format!(
                "expected at least 2 fields in '{}'",
                fen.trim()
            )));
        }
    };

    let mut vector = vec![0.0; INPUT_SIZE];
    let mut square = 0usize;

    for ch in board.chars() {
        if ch == '/' {
            continue;
        }
        if let Some(count) = ch.to_digit(10) {
            square += count as usize;
            continue;
        }
        let Some(piece) = piece_index(ch) else {
            return Err(Error::InvalidPosition(format!(
                "unrecognized piece character '{ch}'"
            )));
        };
        if square >= 64 {
            return Err(Error::InvalidPosition(
                "board placement overruns 64 squares".to_string(),
            ));
        }
        vector[square * PIECE_KINDS + piece] = 1.0;
        square += 1;
    }

    vector[64 * PIECE_KINDS] = if turn == "w" { 1.0 } else { 0.0 };
    Ok(vector)
}

/// Encodes a label string as a one-hot vector over [`LABELS`].
///
/// The label is trimmed and matched case-insensitively on its first
/// whitespace token only, so an optional trailing color word is ignored.
pub fn encode_label(label: &str) -> Result<Vec<f64>> {
    let base = label.split_whitespace().next().unwrap_or("");
    let index = LABELS
        .iter()
        .position(|known| known.eq_ignore_ascii_case(base))
        .ok_or_else(|| Error::InvalidLabel(label.trim().to_string()))?;

    let mut vector = vec![0.0; NUM_LABELS];
    vector[index] = 1.0;
    Ok(vector)
}

/// Returns the label under the highest output entry.
///
/// Ties resolve to the first occurrence. The vector does not need to sum
/// to one.
pub fn decode_label(output: &[f64]) -> &'static str {
    let mut best = 0;
    let mut best_value = f64::NEG_INFINITY;
    for (index, &value) in output.iter().take(NUM_LABELS).enumerate() {
        if value > best_value {
            best = index;
            best_value = value;
        }
    }
    LABELS[best]
}

/// Reads the side-to-move field of a FEN string.
///
/// Mirrors the encoding rule: the field must be present, `"w"` is white,
/// anything else is black.
pub fn side_to_move(fen: &str) -> Result<Color> {
    let turn = fen.split_whitespace().nth(1).ok_or_else(|| {
        Error::InvalidPosition(format!("expected at least 2 fields in '{}'", fen.trim()))
    })?;
    Ok(if turn == "w" { Color::White } else { Color::Black })
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
