//! Turn rotation over the roster.
//!
//! The state machine is the set of roster indices; the only transition is
//! `(current + 1) % roster_len`, and the resolver applies it solely after a
//! move resolves to Continue. Invalid and terminal outcomes leave the turn
//! pointer untouched.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Current-turn pointer and move counter for one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    current: PlayerId,
    moves_made: u32,
}

impl TurnState {
    /// Start of game: player 0 to move, no moves made.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: PlayerId::new(0),
            moves_made: 0,
        }
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// Moves applied so far; also the index of the next transcript entry.
    #[must_use]
    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    /// Count an applied move. Called by the resolver once per placement.
    pub fn record_move(&mut self) {
        self.moves_made += 1;
    }

    /// Rotate to the next player. Called by the resolver only on a
    /// Continue outcome.
    pub fn advance(&mut self, roster_len: usize) {
        self.current = PlayerId::new(((self.current.index() + 1) % roster_len) as u8);
    }
}
