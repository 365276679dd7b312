//! Player identification and the game roster.
//!
//! ## PlayerId
//!
//! Type-safe 0-based index into the roster.
//!
//! ## Roster
//!
//! The fixed set of 2-3 players for one game. Symbols are assigned in order
//! from a fixed alphabet (`X`, `O`, `Z`) so they are pairwise distinct by
//! construction. At least one player must be human; a roster configured with
//! none is corrected by forcing player 1 to human.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use super::error::GameError;

/// Maximum roster size.
pub const MAX_PLAYERS: usize = 3;

/// Minimum roster size.
pub const MIN_PLAYERS: usize = 2;

/// Symbol alphabet, assigned to players in roster order.
pub const SYMBOLS: [char; MAX_PLAYERS] = ['X', 'O', 'Z'];

/// Player identifier, 0-based index into the roster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw roster index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a roster of `count` players.
    pub fn all(count: usize) -> impl Iterator<Item = PlayerId> {
        (0..count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// One-character mark a player places on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(pub char);

impl Symbol {
    /// Get the raw character.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who controls a player's moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Moves come from the input collaborator.
    Human,
    /// Moves come from a move strategy.
    Computer,
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "Human"),
            PlayerKind::Computer => write!(f, "Computer"),
        }
    }
}

/// A player in the roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Board mark, unique within the roster.
    pub symbol: Symbol,
    /// Human or computer controlled.
    pub kind: PlayerKind,
    /// Display name used in prompts and the transcript.
    pub name: String,
}

impl Player {
    /// Create a player. The symbol is assigned by the roster, not here.
    pub fn new(symbol: Symbol, kind: PlayerKind, name: impl Into<String>) -> Self {
        Self {
            symbol,
            kind,
            name: name.into(),
        }
    }
}

/// The fixed set of players for one game.
///
/// Construction validates the roster size and assigns symbols in order from
/// [`SYMBOLS`], so symbols are distinct by construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: SmallVec<[Player; MAX_PLAYERS]>,
}

impl Roster {
    /// Build a roster from (kind, name) pairs, assigning symbols in order.
    ///
    /// If no entry is human, player 1 is forced to human, matching the
    /// configuration surface contract.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPlayerCount` unless 2 or 3 entries are given.
    pub fn new(
        entries: impl IntoIterator<Item = (PlayerKind, String)>,
    ) -> Result<Self, GameError> {
        let mut players: SmallVec<[Player; MAX_PLAYERS]> = entries
            .into_iter()
            .enumerate()
            .map(|(i, (kind, name))| Player::new(Symbol(SYMBOLS[i % MAX_PLAYERS]), kind, name))
            .collect();

        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
            return Err(GameError::InvalidPlayerCount(players.len()));
        }

        if players.iter().all(|p| p.kind == PlayerKind::Computer) {
            tracing::warn!("no human players configured, forcing player 1 to human");
            players[0].kind = PlayerKind::Human;
        }

        Ok(Self { players })
    }

    /// Number of players (2 or 3).
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false: a roster holds at least two players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Get a player by ID.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &Player {
        &self.players[player.index()]
    }

    /// Iterate over (PlayerId, &Player) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId(i as u8), p))
    }

    /// Whether any player is human.
    #[must_use]
    pub fn has_human(&self) -> bool {
        self.players.iter().any(|p| p.kind == PlayerKind::Human)
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}
