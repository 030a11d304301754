use crate::game::board::Board;

/// Returns the position of the blank cell.
///
/// The board invariant guarantees exactly one 0; every mutation goes through
/// `attempt_move` or the shuffle generator, both of which preserve it.
pub fn index_of_blank(board: &Board) -> usize {
    board
        .tiles
        .iter()
        .position(|&tile| tile == 0)
        .expect("board invariant violated: no blank cell")
}
