use super::*;

#[test]
fn labeled_line_splits_after_six_fields() {
    let example = parse_line("8/8/8/8/8/8/8/K7 w - - 0 1 Checkmate Black").unwrap();
    assert_eq!(example.fen, "8/8/8/8/8/8/8/K7 w - - 0 1");
    assert_eq!(example.label.as_deref(), Some("Checkmate Black"));
}

#[test]
fn single_word_label() {
    let example = parse_line("8/8/8/8/8/8/8/K7 w - - 0 1 Nothing").unwrap();
    assert_eq!(example.label.as_deref(), Some("Nothing"));
}

#[test]
fn short_line_is_position_only() {
    let example = parse_line("8/8/8/8/8/8/8/K7 w - - 0 1").unwrap();
    assert_eq!(example.fen, "8/8/8/8/8/8/8/K7 w - - 0 1");
    assert_eq!(example.label, None);
}

#[test]
fn blank_lines_vanish() {
    assert_eq!(parse_line(""), None);
    assert_eq!(parse_line("   \t  "), None);
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let example = parse_line("  8/8/8/8/8/8/8/K7 b - - 0 1 Stalemate  ").unwrap();
    assert_eq!(example.fen, "8/8/8/8/8/8/8/K7 b - - 0 1");
    assert_eq!(example.label.as_deref(), Some("Stalemate"));
}
