//! Win and draw detection.

use crate::game::tictactoe::types::{Board, Mark, Position, Winner};

const fn pos(row: usize, col: usize) -> Position {
    Position { row, col }
}

/// Every winning line: rows, then columns, then both diagonals.
pub const LINES: [[Position; 3]; 8] = [
    [pos(0, 0), pos(0, 1), pos(0, 2)],
    [pos(1, 0), pos(1, 1), pos(1, 2)],
    [pos(2, 0), pos(2, 1), pos(2, 2)],
    [pos(0, 0), pos(1, 0), pos(2, 0)],
    [pos(0, 1), pos(1, 1), pos(2, 1)],
    [pos(0, 2), pos(1, 2), pos(2, 2)],
    [pos(0, 0), pos(1, 1), pos(2, 2)],
    [pos(0, 2), pos(1, 1), pos(2, 0)],
];

/// Returns the mark filling the whole line, if any.
pub fn line_owner(board: &Board, line: &[Position; 3]) -> Option<Mark> {
    match line.map(|p| board.get(p)) {
        [Some(a), Some(b), Some(c)] if a == b && b == c => Some(a),
        _ => None,
    }
}

/// Scans all lines for three equal marks; a full board without one is a draw.
pub fn check_winner(board: &Board) -> Option<Winner> {
    if let Some(mark) = LINES.iter().find_map(|line| line_owner(board, line)) {
        return Some(Winner::from(mark));
    }
    board.is_full().then_some(Winner::Draw)
}

/// True if placing `mark` at `pos` completes a line for `mark`.
pub fn completes_line(board: &Board, pos: Position, mark: Mark) -> bool {
    let next = board.with_mark(pos, mark);
    LINES
        .iter()
        .filter(|line| line.contains(&pos))
        .any(|line| line_owner(&next, line) == Some(mark))
}
