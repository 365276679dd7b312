//! Append-only textual game log.
//!
//! The transcript is a write-only artifact for humans; the engine never
//! reads it back. Each applied move appends a block and flushes, so a log is
//! usable even if the process dies mid-game. The `=== GAME ENDED ===` footer
//! is written from `Drop`, which covers every exit path.
//!
//! Logging is a notification, not a control dependency: the first write
//! failure is reported once as a warning and the sink goes quiet; gameplay
//! proceeds identically either way.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::board::{Board, Position};
use crate::core::{Player, Roster, Symbol};

/// Structured record of one applied move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based move index.
    pub index: u32,
    /// Display name of the mover.
    pub player_name: String,
    /// The mover's symbol.
    pub symbol: Symbol,
    /// Where the symbol was placed (0-based; rendered 1-based).
    pub position: Position,
    /// Full board snapshot after the move, rows of single-character cells.
    pub board: Vec<Vec<char>>,
}

impl MoveRecord {
    /// Capture a record from the board state after a placement.
    #[must_use]
    pub fn capture(index: u32, player: &Player, position: Position, board: &Board) -> Self {
        Self {
            index,
            player_name: player.name.clone(),
            symbol: player.symbol,
            position,
            board: board
                .rows()
                .map(|row| row.iter().map(|cell| cell.as_char()).collect())
                .collect(),
        }
    }
}

/// Terminal record for the end of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinalRecord {
    /// Somebody completed a line.
    Win {
        /// Winner's display name.
        name: String,
        /// Winner's symbol.
        symbol: Symbol,
    },
    /// Board filled with no line completed.
    Draw,
}

/// Receiver for move and result notifications.
///
/// Implementations must never fail the caller; I/O problems are theirs to
/// swallow.
pub trait TranscriptSink {
    /// A move was applied to the board.
    fn move_played(&mut self, record: &MoveRecord);

    /// The game reached a terminal outcome.
    fn game_finished(&mut self, result: &FinalRecord);
}

/// Sink that discards everything. Used when no log file could be opened.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl TranscriptSink for NullSink {
    fn move_played(&mut self, _record: &MoveRecord) {}
    fn game_finished(&mut self, _result: &FinalRecord) {}
}

impl<T: TranscriptSink + ?Sized> TranscriptSink for Box<T> {
    fn move_played(&mut self, record: &MoveRecord) {
        (**self).move_played(record);
    }

    fn game_finished(&mut self, result: &FinalRecord) {
        (**self).game_finished(result);
    }
}

/// Transcript writer over any `io::Write`.
///
/// The header block is written on construction; the footer on drop.
pub struct Transcript<W: Write> {
    out: W,
    failed: bool,
}

impl Transcript<BufWriter<File>> {
    /// Open a transcript file, truncating any previous log at the path.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the file cannot be created;
    /// the caller typically downgrades this to a warning and plays on
    /// without a log.
    pub fn create(path: impl AsRef<Path>, size: usize, roster: &Roster) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file), size, roster))
    }
}

impl<W: Write> Transcript<W> {
    /// Wrap a writer and emit the header block.
    pub fn new(out: W, size: usize, roster: &Roster) -> Self {
        let mut transcript = Self { out, failed: false };
        transcript.write(|out| {
            writeln!(out, "=== TIC-TAC-TOE GAME LOG ===")?;
            writeln!(out, "Grid Size: {size}x{size}")?;
            writeln!(out, "Number of Players: {}", roster.len())?;
            writeln!(out)
        });
        transcript
    }

    /// Run a write closure unless a previous write already failed.
    ///
    /// The first failure is logged as a warning; later calls are no-ops.
    fn write(&mut self, op: impl FnOnce(&mut W) -> io::Result<()>) {
        if self.failed {
            return;
        }
        if let Err(e) = op(&mut self.out).and_then(|()| self.out.flush()) {
            tracing::warn!(error = %e, "transcript write failed, further logging disabled");
            self.failed = true;
        }
    }
}

impl<W: Write> TranscriptSink for Transcript<W> {
    fn move_played(&mut self, record: &MoveRecord) {
        self.write(|out| {
            writeln!(
                out,
                "Move {}: {} ({}) -> Position ({},{})",
                record.index,
                record.player_name,
                record.symbol,
                record.position.row + 1,
                record.position.col + 1
            )?;
            writeln!(out, "Board State:")?;
            for row in &record.board {
                for cell in row {
                    write!(out, "{cell} ")?;
                }
                writeln!(out)?;
            }
            writeln!(out)
        });
    }

    fn game_finished(&mut self, result: &FinalRecord) {
        self.write(|out| match result {
            FinalRecord::Win { name, symbol } => {
                writeln!(out, "GAME RESULT: {name} ({symbol}) WINS!")
            }
            FinalRecord::Draw => writeln!(out, "GAME RESULT: DRAW!"),
        });
    }
}

impl<W: Write> Drop for Transcript<W> {
    fn drop(&mut self) {
        self.write(|out| writeln!(out, "=== GAME ENDED ==="));
    }
}
