//! Core engine types: players, roster, turn rotation, errors, RNG.
//!
//! Everything here is pure state; no I/O. The board lives in its own module.

pub mod error;
pub mod player;
pub mod rng;
pub mod turn;

pub use error::GameError;
pub use player::{Player, PlayerId, PlayerKind, Roster, Symbol, MAX_PLAYERS, MIN_PLAYERS, SYMBOLS};
pub use rng::GameRng;
pub use turn::TurnState;
