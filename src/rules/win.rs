//! Win detection: full-line scans for one symbol.
//!
//! A line counts as a win only when the symbol fills it entirely; a single
//! differing or empty cell disqualifies the line. Scanned lines are every
//! row, every column, and the two diagonals, exactly once each regardless of
//! board size.

use crate::board::{Board, Position};
use crate::core::Symbol;

/// Whether `symbol` fills any row, column, or diagonal of the board.
///
/// Only the mover's symbol needs checking after a move; at most one symbol
/// can complete a line per placement. The scan is O(size^2).
#[must_use]
pub fn has_line(board: &Board, symbol: Symbol) -> bool {
    let n = board.size();
    let filled = |pos: Position| board.is_symbol(pos, symbol);

    let any_row = (0..n).any(|row| (0..n).all(|col| filled(Position::new(row, col))));
    let any_col = (0..n).any(|col| (0..n).all(|row| filled(Position::new(row, col))));
    let main_diag = (0..n).all(|i| filled(Position::new(i, i)));
    let anti_diag = (0..n).all(|i| filled(Position::new(i, n - 1 - i)));

    any_row || any_col || main_diag || anti_diag
}
