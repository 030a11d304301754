use rand::Rng;

use crate::game::attempt_move::attempt_move;
use crate::game::board::Board;
use crate::game::is_solved::is_solved;
use crate::game::shuffle_board::shuffle_board;
use crate::utils::format_elapsed::format_elapsed;

/// Result of feeding a move event into the session.
///
/// `Won` doubles as the signal for the caller to stop the tick source; the
/// session itself never owns a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Target was not adjacent to the blank, or the session is already won.
    Rejected,
    /// Tile slid into the blank.
    Accepted,
    /// Tile slid into the blank and the board reached the solved state.
    Won,
}

/// One play attempt, from shuffle to win or reset.
///
/// Pure state machine: all mutation happens synchronously through `tick`,
/// `play_move` and `reset`. Once `won` is true the board and counters are
/// frozen until the next reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSession {
    board: Board,
    move_count: u32,
    elapsed_seconds: u32,
    won: bool,
}

impl PuzzleSession {
    /// Starts a session on a freshly shuffled board.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            board: shuffle_board(rng),
            move_count: 0,
            elapsed_seconds: 0,
            won: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn won(&self) -> bool {
        self.won
    }

    /// One-second timer event. Ignored once the session is won.
    pub fn tick(&mut self) {
        if !self.won {
            self.elapsed_seconds += 1;
        }
    }

    /// Move event for the tile at `target_index`.
    pub fn play_move(&mut self, target_index: usize) -> MoveOutcome {
        if self.won {
            return MoveOutcome::Rejected;
        }

        let (next, accepted) = attempt_move(&self.board, target_index);
        if !accepted {
            return MoveOutcome::Rejected;
        }

        self.board = next;
        self.move_count += 1;

        if is_solved(&self.board) {
            self.won = true;
            log::info!(
                "puzzle solved in {} moves, {}",
                self.move_count,
                format_elapsed(self.elapsed_seconds)
            );
            return MoveOutcome::Won;
        }

        MoveOutcome::Accepted
    }

    /// Reset event: re-shuffle and zero the counters. Valid from any state;
    /// the result is a new session's worth of state, not a resumed one.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        *self = Self::new(rng);
    }
}
