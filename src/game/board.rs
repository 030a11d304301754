use serde::{Deserialize, Serialize};

/// Grid side length. The engine is hard-wired to the classic 3x3 puzzle.
pub const SIZE: usize = 3;

/// Total number of cells, blank included.
pub const TOTAL: usize = SIZE * SIZE;

/// The target permutation. 0 denotes the blank cell.
pub const SOLVED: [u8; TOTAL] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub tiles: Vec<u8>,
}

pub fn create_board_solved() -> Board {
    Board {
        tiles: SOLVED.to_vec(),
    }
}
