use crate::game::board::SIZE;

/// Direction a tile slides, as seen by the player (arrow-key semantics).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Maps a slide direction to the index of the tile that would move.
///
/// Sliding a tile up means the tile below the blank moves, so `Up` targets
/// `blank + 3`, and so on. Returns `None` when no tile sits on that side.
pub fn slide_target(blank_index: usize, direction: MoveDirection) -> Option<usize> {
    let row = blank_index / SIZE;
    let col = blank_index % SIZE;
    match direction {
        MoveDirection::Up if row < SIZE - 1 => Some(blank_index + SIZE),
        MoveDirection::Down if row > 0 => Some(blank_index - SIZE),
        MoveDirection::Left if col < SIZE - 1 => Some(blank_index + 1),
        MoveDirection::Right if col > 0 => Some(blank_index - 1),
        _ => None,
    }
}
