//! # gridtoe
//!
//! A generalized NxN tic-tac-toe engine for 2-3 players.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: `Board`, win detection, `TurnState`, and the resolver
//!    are state-only. Blocking I/O lives in the collaborators: the console
//!    front-end and the transcript writer.
//!
//! 2. **Roster-driven**: every API takes the roster as context. Nothing
//!    assumes two players; rotation is `(current + 1) % roster_len`.
//!
//! 3. **Validation at the seams**: input parsing rejects malformed moves
//!    before the resolver; the resolver rejects illegal moves before the
//!    board; the board itself never re-checks.
//!
//! ## Architecture
//!
//! - One move = validate -> place -> win check -> draw check -> rotate.
//!   The win check always precedes the draw check.
//! - Computer moves come from a uniform-random strategy over a seeded
//!   ChaCha8 RNG; fixed seed, reproducible game.
//! - The transcript sink is notified per move and flushed per move; its
//!   failures downgrade to warnings and never affect play.
//!
//! ## Modules
//!
//! - `core`: players, roster, turn rotation, errors, RNG
//! - `board`: the owned square grid
//! - `rules`: win detection and move resolution
//! - `strategy`: random move selection for computer players
//! - `transcript`: append-only textual game log
//! - `session`: configuration builder and game loop state

pub mod board;
pub mod core;
pub mod rules;
pub mod session;
pub mod strategy;
pub mod transcript;

// Re-export commonly used types
pub use crate::board::{Board, Cell, Position, MAX_SIZE, MIN_SIZE};
pub use crate::core::{
    GameError, GameRng, Player, PlayerId, PlayerKind, Roster, Symbol, TurnState, MAX_PLAYERS,
    MIN_PLAYERS, SYMBOLS,
};
pub use crate::rules::{has_line, resolve_move, MoveOutcome};
pub use crate::session::{parse_move, GameSession, SessionBuilder};
pub use crate::strategy::{MoveStrategy, RandomMoveStrategy};
pub use crate::transcript::{FinalRecord, MoveRecord, NullSink, Transcript, TranscriptSink};
