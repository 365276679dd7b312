//! Game session: configuration and the single-threaded game loop state.
//!
//! A session exclusively owns the board/turn pair and drives the resolver;
//! nothing else may mutate them. Blocking I/O stays outside: the console
//! front-end feeds human input lines in and renders state between moves.

use std::path::PathBuf;

use crate::board::{Board, Position};
use crate::core::{GameError, GameRng, Player, PlayerId, PlayerKind, Roster, TurnState};
use crate::rules::{resolve_move, MoveOutcome};
use crate::strategy::{MoveStrategy, RandomMoveStrategy};
use crate::transcript::{FinalRecord, NullSink, Transcript, TranscriptSink};

/// Parse a human move line: two 1-based coordinates, whitespace separated.
///
/// Converts to 0-based. Non-numeric input or coordinates outside `1..=size`
/// are rejected here as `InvalidFormat`, before the resolver is reached.
///
/// # Errors
///
/// `InvalidFormat` carrying the offending input.
pub fn parse_move(input: &str, size: usize) -> Result<Position, GameError> {
    let reject = || GameError::InvalidFormat(input.trim().to_string());

    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(reject());
    }

    let row: usize = parts[0].parse().map_err(|_| reject())?;
    let col: usize = parts[1].parse().map_err(|_| reject())?;

    if !(1..=size).contains(&row) || !(1..=size).contains(&col) {
        return Err(reject());
    }

    Ok(Position::new(row - 1, col - 1))
}

/// Builder for a [`GameSession`].
///
/// Collects the pre-game configuration surface: board size, player kinds
/// and names, optional RNG seed, optional transcript path. Validation
/// happens in [`build`](SessionBuilder::build).
pub struct SessionBuilder {
    size: usize,
    players: Vec<(PlayerKind, Option<String>)>,
    seed: Option<u64>,
    log_path: Option<PathBuf>,
    sink: Option<Box<dyn TranscriptSink>>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            size: 3,
            players: Vec::new(),
            seed: None,
            log_path: None,
            sink: None,
        }
    }
}

impl SessionBuilder {
    /// Start a builder with a 3x3 board and no players.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size (validated in `build`).
    #[must_use]
    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Add a human player with a display name.
    #[must_use]
    pub fn human(mut self, name: impl Into<String>) -> Self {
        self.players.push((PlayerKind::Human, Some(name.into())));
        self
    }

    /// Add a computer player. Auto-named `Computer_N` by roster position.
    #[must_use]
    pub fn computer(mut self) -> Self {
        self.players.push((PlayerKind::Computer, None));
        self
    }

    /// Fix the RNG seed for reproducible computer play.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Write the transcript to a file at `path`.
    ///
    /// Open failure is a warning, not an error: the session plays on
    /// without a log.
    #[must_use]
    pub fn transcript_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    /// Use a custom transcript sink (takes precedence over a file path).
    #[must_use]
    pub fn sink(mut self, sink: Box<dyn TranscriptSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Validate the configuration and create the session.
    ///
    /// # Errors
    ///
    /// `InvalidSize` or `InvalidPlayerCount` when the configuration is out
    /// of range. These block the game from starting; everything else about
    /// a session is infallible.
    pub fn build(self) -> Result<GameSession, GameError> {
        let board = Board::new(self.size)?;
        let roster = Roster::new(self.players.into_iter().enumerate().map(|(i, (kind, name))| {
            let name = name.unwrap_or_else(|| format!("Computer_{}", i + 1));
            (kind, name)
        }))?;

        let sink: Box<dyn TranscriptSink> = match (self.sink, self.log_path) {
            (Some(sink), _) => sink,
            (None, Some(path)) => match Transcript::create(&path, board.size(), &roster) {
                Ok(transcript) => Box::new(transcript),
                Err(e) => {
                    tracing::warn!(error = %e, path = %path.display(),
                        "could not create game log, playing without one");
                    Box::new(NullSink)
                }
            },
            (None, None) => Box::new(NullSink),
        };

        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        tracing::debug!(size = board.size(), players = roster.len(), "session ready");

        Ok(GameSession {
            board,
            roster,
            turn: TurnState::new(),
            rng,
            strategy: Box::new(RandomMoveStrategy),
            sink,
            result: None,
        })
    }
}

/// One game from first move to terminal outcome.
pub struct GameSession {
    board: Board,
    roster: Roster,
    turn: TurnState,
    rng: GameRng,
    strategy: Box<dyn MoveStrategy>,
    sink: Box<dyn TranscriptSink>,
    result: Option<MoveOutcome>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("roster", &self.roster)
            .field("turn", &self.turn)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// The board, for rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// ID of the player to move.
    #[must_use]
    pub fn current_id(&self) -> PlayerId {
        self.turn.current()
    }

    /// The player to move.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.roster.get(self.turn.current())
    }

    /// Moves applied so far.
    #[must_use]
    pub fn moves_made(&self) -> u32 {
        self.turn.moves_made()
    }

    /// Terminal outcome, once reached.
    #[must_use]
    pub fn result(&self) -> Option<MoveOutcome> {
        self.result
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Apply a move for the current player at a 0-based position.
    ///
    /// Callers must stop requesting moves once the session is over.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` or `CellOccupied` for illegal moves; the session is
    /// unchanged and the same player is still to move.
    pub fn play_at(&mut self, pos: Position) -> Result<MoveOutcome, GameError> {
        debug_assert!(self.result.is_none(), "move requested after terminal outcome");

        let outcome = resolve_move(
            &mut self.board,
            &self.roster,
            &mut self.turn,
            pos,
            self.sink.as_mut(),
        )?;

        if outcome.is_terminal() {
            self.result = Some(outcome);
            let record = match outcome {
                MoveOutcome::Win(winner) => {
                    let player = self.roster.get(winner);
                    FinalRecord::Win {
                        name: player.name.clone(),
                        symbol: player.symbol,
                    }
                }
                MoveOutcome::Draw => FinalRecord::Draw,
                MoveOutcome::Continue => unreachable!(),
            };
            self.sink.game_finished(&record);
        }

        Ok(outcome)
    }

    /// Parse and apply a human move given as a 1-based input line.
    ///
    /// # Errors
    ///
    /// `InvalidFormat` for malformed input, otherwise as [`play_at`].
    ///
    /// [`play_at`]: GameSession::play_at
    pub fn play_human(&mut self, input: &str) -> Result<MoveOutcome, GameError> {
        let pos = parse_move(input, self.board.size())?;
        self.play_at(pos)
    }

    /// Choose and apply a move for a computer player.
    ///
    /// Returns the chosen position along with the outcome, so the caller
    /// can announce it without re-scanning the board.
    ///
    /// # Errors
    ///
    /// `BoardFull` if the strategy finds no empty cell (unreachable under
    /// normal play).
    pub fn play_computer(&mut self) -> Result<(Position, MoveOutcome), GameError> {
        let pos = self.strategy.choose_move(&self.board, &mut self.rng)?;
        let outcome = self.play_at(pos)?;
        Ok((pos, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_accepts_valid_input() {
        assert_eq!(parse_move("1 1", 3).unwrap(), Position::new(0, 0));
        assert_eq!(parse_move("3 2", 3).unwrap(), Position::new(2, 1));
        assert_eq!(parse_move("  10   10  ", 10).unwrap(), Position::new(9, 9));
    }

    #[test]
    fn test_parse_move_rejects_garbage() {
        for input in ["", "1", "1 2 3", "a b", "1 b", "1.5 2", "-1 2"] {
            assert!(
                matches!(parse_move(input, 3), Err(GameError::InvalidFormat(_))),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_move_rejects_out_of_range() {
        // 0 and size+1 are off-board in 1-based coordinates.
        for input in ["0 1", "1 0", "4 1", "1 4"] {
            assert!(matches!(parse_move(input, 3), Err(GameError::InvalidFormat(_))));
        }
        // In range for a larger board.
        assert!(parse_move("4 1", 5).is_ok());
    }

    #[test]
    fn test_builder_validates_size_and_count() {
        let err = SessionBuilder::new()
            .size(11)
            .human("A")
            .human("B")
            .build()
            .unwrap_err();
        assert_eq!(err, GameError::InvalidSize(11));

        let err = SessionBuilder::new().size(3).human("A").build().unwrap_err();
        assert_eq!(err, GameError::InvalidPlayerCount(1));
    }

    #[test]
    fn test_builder_names_computers_by_position() {
        let session = SessionBuilder::new()
            .human("Alice")
            .computer()
            .computer()
            .build()
            .unwrap();

        assert_eq!(session.roster().get(PlayerId::new(1)).name, "Computer_2");
        assert_eq!(session.roster().get(PlayerId::new(2)).name, "Computer_3");
    }

    #[test]
    fn test_human_move_flow() {
        let mut session = SessionBuilder::new().human("A").human("B").build().unwrap();

        assert_eq!(session.play_human("1 1").unwrap(), MoveOutcome::Continue);
        assert_eq!(session.current_id(), PlayerId::new(1));
        assert_eq!(session.moves_made(), 1);

        // Same cell again: rejected, still player 2's turn.
        assert_eq!(
            session.play_human("1 1").unwrap_err(),
            GameError::CellOccupied { row: 0, col: 0 }
        );
        assert_eq!(session.current_id(), PlayerId::new(1));

        // Malformed input never reaches the board.
        assert!(matches!(
            session.play_human("one one"),
            Err(GameError::InvalidFormat(_))
        ));
        assert_eq!(session.moves_made(), 1);
    }

    #[test]
    fn test_session_latches_result() {
        let mut session = SessionBuilder::new().human("A").human("B").build().unwrap();

        for input in ["1 1", "2 1", "1 2", "2 2"] {
            assert_eq!(session.play_human(input).unwrap(), MoveOutcome::Continue);
            assert!(!session.is_over());
        }

        let outcome = session.play_human("1 3").unwrap();
        assert_eq!(outcome, MoveOutcome::Win(PlayerId::new(0)));
        assert!(session.is_over());
        assert_eq!(session.result(), Some(outcome));
    }

    #[test]
    fn test_computer_move_returns_position_played() {
        let mut session = SessionBuilder::new()
            .human("A")
            .computer()
            .seed(42)
            .build()
            .unwrap();

        session.play_human("1 1").unwrap();
        let (pos, outcome) = session.play_computer().unwrap();

        assert_eq!(outcome, MoveOutcome::Continue);
        assert!(session.board().is_symbol(pos, session.roster().get(PlayerId::new(1)).symbol));
    }

    #[test]
    fn test_seeded_sessions_replay_identically() {
        let run = || {
            let mut session = SessionBuilder::new()
                .size(4)
                .human("A")
                .computer()
                .seed(1234)
                .build()
                .unwrap();

            let mut positions = Vec::new();
            // Drive both seats from the strategy to full determinism.
            while !session.is_over() {
                let (pos, _) = session.play_computer().unwrap();
                positions.push(pos);
            }
            positions
        };

        assert_eq!(run(), run());
    }
}
