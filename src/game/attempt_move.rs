use crate::game::board::Board;
use crate::game::get_valid_moves::get_valid_moves;
use crate::game::index_of_blank::index_of_blank;

/// Tries to slide the tile at `target_index` into the blank.
///
/// Pure function: the input board is untouched. A non-adjacent target is a
/// normal rejection, not an error. The returned flag tells whether the swap
/// happened.
pub fn attempt_move(board: &Board, target_index: usize) -> (Board, bool) {
    let blank = index_of_blank(board);
    if !get_valid_moves(blank).contains(&target_index) {
        return (board.clone(), false);
    }

    let mut next = board.clone();
    next.tiles.swap(blank, target_index);
    (next, true)
}
