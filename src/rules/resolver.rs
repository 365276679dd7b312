//! Single-move orchestration: validate, apply, detect outcome, rotate turn.

use serde::{Deserialize, Serialize};

use super::win::has_line;
use crate::board::{Board, Position};
use crate::core::{GameError, PlayerId, Roster, TurnState};
use crate::transcript::{MoveRecord, TranscriptSink};

/// Result of an applied move.
///
/// Invalid moves never reach this type; they are the `Err` side of
/// [`resolve_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Move applied; the turn has rotated to the next player.
    Continue,
    /// Move applied and completed a line; the game is over.
    Win(PlayerId),
    /// Move applied and filled the board with no line; the game is over.
    Draw,
}

impl MoveOutcome {
    /// Whether this outcome ends the game.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, MoveOutcome::Win(_) | MoveOutcome::Draw)
    }
}

/// Resolve one move for the current player.
///
/// Validation order is bounds, then occupancy; a rejected move leaves the
/// board and turn untouched. On success the symbol is placed, the move is
/// counted, and the outcome is decided with the win check before the draw
/// check. The turn rotates only on a Continue outcome.
///
/// A [`MoveRecord`] is emitted to `sink` for every applied move. The sink is
/// a notification target, never a control dependency.
///
/// # Errors
///
/// `OutOfBounds` or `CellOccupied` when the move is illegal.
pub fn resolve_move(
    board: &mut Board,
    roster: &Roster,
    turn: &mut TurnState,
    pos: Position,
    sink: &mut dyn TranscriptSink,
) -> Result<MoveOutcome, GameError> {
    if !board.in_bounds(pos) {
        return Err(GameError::OutOfBounds {
            row: pos.row,
            col: pos.col,
        });
    }
    if !board.is_empty(pos) {
        return Err(GameError::CellOccupied {
            row: pos.row,
            col: pos.col,
        });
    }

    let mover = turn.current();
    let player = roster.get(mover);
    board.place(pos, player.symbol);
    turn.record_move();

    sink.move_played(&MoveRecord::capture(turn.moves_made(), player, pos, board));

    if has_line(board, player.symbol) {
        return Ok(MoveOutcome::Win(mover));
    }
    if board.is_full() {
        return Ok(MoveOutcome::Draw);
    }

    turn.advance(roster.len());
    Ok(MoveOutcome::Continue)
}
