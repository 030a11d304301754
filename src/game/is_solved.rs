use crate::game::board::{Board, SOLVED};

pub fn is_solved(board: &Board) -> bool {
    board.tiles.iter().zip(SOLVED.iter()).all(|(a, b)| a == b)
}
