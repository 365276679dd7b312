//! Move selection for computer players.
//!
//! The only shipped strategy is uniform-random selection among empty cells.
//! Anything smarter is out of scope; the trait seam exists so a session can
//! be driven by a scripted strategy in tests.

use crate::board::{Board, Position};
use crate::core::{GameError, GameRng};

/// Rejection-sampling attempts before falling back to a deterministic scan.
///
/// Matches the retry bound of the reference implementation. On a nearly
/// full board random probing can stall; after this many misses the strategy
/// takes the first empty cell in row-major order instead.
const MAX_RANDOM_ATTEMPTS: usize = 1000;

/// Source of moves for non-human turns.
pub trait MoveStrategy {
    /// Pick a legal (empty, in-bounds) cell on the board.
    ///
    /// # Errors
    ///
    /// `BoardFull` when no empty cell exists. Unreachable under normal play:
    /// draw detection runs before the next move is requested.
    fn choose_move(&mut self, board: &Board, rng: &mut GameRng) -> Result<Position, GameError>;
}

/// Uniform-random cell selection with a bounded-termination guarantee.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomMoveStrategy;

impl MoveStrategy for RandomMoveStrategy {
    fn choose_move(&mut self, board: &Board, rng: &mut GameRng) -> Result<Position, GameError> {
        let size = board.size();

        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let pos = Position::new(
                rng.gen_range_usize(0..size),
                rng.gen_range_usize(0..size),
            );
            if board.is_empty(pos) {
                return Ok(pos);
            }
        }

        // Deterministic fallback: first empty cell in row-major order.
        board.empty_positions().next().ok_or(GameError::BoardFull)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;

    const X: Symbol = Symbol('X');

    #[test]
    fn test_chosen_cell_is_empty() {
        let mut board = Board::new(4).unwrap();
        board.place(Position::new(0, 0), X);
        board.place(Position::new(3, 3), X);

        let mut rng = GameRng::new(42);
        let mut strategy = RandomMoveStrategy;

        for _ in 0..50 {
            let pos = strategy.choose_move(&board, &mut rng).unwrap();
            assert!(board.in_bounds(pos));
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_terminates_with_one_empty_cell() {
        let size = 5;
        let mut board = Board::new(size).unwrap();
        let hole = Position::new(2, 3);

        for row in 0..size {
            for col in 0..size {
                let pos = Position::new(row, col);
                if pos != hole {
                    board.place(pos, X);
                }
            }
        }

        let mut rng = GameRng::new(7);
        let mut strategy = RandomMoveStrategy;

        // Either the sampler hits the hole or the fallback scan finds it;
        // both return the only empty cell.
        for _ in 0..20 {
            assert_eq!(strategy.choose_move(&board, &mut rng).unwrap(), hole);
        }
    }

    #[test]
    fn test_full_board_reports_exhaustion() {
        let size = 3;
        let mut board = Board::new(size).unwrap();
        for row in 0..size {
            for col in 0..size {
                board.place(Position::new(row, col), X);
            }
        }

        let mut rng = GameRng::new(1);
        let mut strategy = RandomMoveStrategy;

        assert_eq!(
            strategy.choose_move(&board, &mut rng).unwrap_err(),
            GameError::BoardFull
        );
    }

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::new(6).unwrap();
        let mut strategy = RandomMoveStrategy;

        let mut rng1 = GameRng::new(99);
        let mut rng2 = GameRng::new(99);

        for _ in 0..25 {
            assert_eq!(
                strategy.choose_move(&board, &mut rng1).unwrap(),
                strategy.choose_move(&board, &mut rng2).unwrap()
            );
        }
    }
}
