use crate::game::board::SIZE;

/// Returns the indices a tile may slide from, given the blank position.
///
/// These are the orthogonal neighbors of the blank inside the 3x3 grid.
/// Callers must not rely on ordering.
pub fn get_valid_moves(blank_index: usize) -> Vec<usize> {
    let row = blank_index / SIZE;
    let col = blank_index % SIZE;
    let mut moves = Vec::with_capacity(4);
    if row > 0 {
        moves.push(blank_index - SIZE); // tile above slides down
    }
    if row < SIZE - 1 {
        moves.push(blank_index + SIZE); // tile below slides up
    }
    if col > 0 {
        moves.push(blank_index - 1); // tile left slides right
    }
    if col < SIZE - 1 {
        moves.push(blank_index + 1); // tile right slides left
    }
    moves
}
