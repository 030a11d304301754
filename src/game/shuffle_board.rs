use rand::Rng;

use crate::game::board::{create_board_solved, Board};
use crate::game::get_valid_moves::get_valid_moves;
use crate::game::index_of_blank::index_of_blank;

/// Number of randomized legal moves applied from the solved state.
pub const SHUFFLE_MOVES: usize = 300;

/// Produces a random board that is solvable by construction: every shuffle is
/// a sequence of legal moves from the solved state, so the result stays in the
/// same solvability class.
///
/// At each step the move that would undo the previous one is excluded, to
/// avoid low-entropy oscillation. The RNG is a parameter so tests can seed it.
pub fn shuffle_board<R: Rng>(rng: &mut R) -> Board {
    let mut board = create_board_solved();
    let mut blank = index_of_blank(&board);
    let mut prev: Option<usize> = None;

    for _ in 0..SHUFFLE_MOVES {
        let candidates: Vec<usize> = get_valid_moves(blank)
            .into_iter()
            .filter(|&m| Some(m) != prev)
            .collect();

        // Every cell on a 3x3 grid has at least two neighbors, so excluding
        // the reverse move can never empty the candidate set.
        assert!(
            !candidates.is_empty(),
            "shuffle candidate set empty at blank index {blank}"
        );

        let next = candidates[rng.random_range(0..candidates.len())];
        board.tiles.swap(blank, next);
        prev = Some(blank);
        blank = next;
    }

    board
}
