//! Winning line detection on the 3x3 board

use crate::board::{CELL_COUNT, Mark};

/// Winning line indices on the 3x3 board, in the order they are checked:
/// rows, then columns, then both diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Check if a mark holds three in a row anywhere on the board
pub fn has_won(cells: &[Option<Mark>; CELL_COUNT], mark: Mark) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == Some(mark)))
}

/// Find the mark holding a completed line, if any.
///
/// At most one mark can ever hold a line: moves alternate, so only the mark
/// just placed can have completed one. The scan order only decides which
/// line is found first, never which mark.
pub fn line_winner(cells: &[Option<Mark>; CELL_COUNT]) -> Option<Mark> {
    for &line in &WINNING_LINES {
        if let Some(mark) = cells[line[0]] {
            if line.iter().all(|&idx| cells[idx] == Some(mark)) {
                return Some(mark);
            }
        }
    }
    None
}
