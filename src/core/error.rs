//! Error taxonomy for the engine.
//!
//! Every failure the engine can report is a `GameError` variant. All of them
//! are recoverable by retry at the input boundary except `InvalidSize` and
//! `InvalidPlayerCount`, which block session construction until corrected.
//! The engine never aborts the process; it returns these to the caller.

use thiserror::Error;

use super::player::MAX_PLAYERS;
use crate::board::{MAX_SIZE, MIN_SIZE};

/// Errors reported by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Board size outside the supported range.
    #[error("board size must be between {MIN_SIZE} and {MAX_SIZE}, got {0}")]
    InvalidSize(usize),

    /// Player count outside the supported range.
    #[error("player count must be between 2 and {MAX_PLAYERS}, got {0}")]
    InvalidPlayerCount(usize),

    /// Move targets a cell outside the board.
    #[error("position ({row}, {col}) is outside the board")]
    OutOfBounds {
        /// 0-based row of the rejected move.
        row: usize,
        /// 0-based column of the rejected move.
        col: usize,
    },

    /// Move targets a cell that already holds a symbol.
    #[error("position ({row}, {col}) is already occupied")]
    CellOccupied {
        /// 0-based row of the rejected move.
        row: usize,
        /// 0-based column of the rejected move.
        col: usize,
    },

    /// Malformed move input (non-numeric or out-of-range coordinates).
    #[error("invalid move input: {0}")]
    InvalidFormat(String),

    /// No empty cell exists on the board.
    ///
    /// Unreachable under normal play: draw detection runs before the
    /// strategy is asked for a move.
    #[error("no empty cells remain on the board")]
    BoardFull,
}
