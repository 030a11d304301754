pub mod attempt_move;
pub mod board;
pub mod direction;
pub mod get_valid_moves;
pub mod index_of_blank;
pub mod is_solved;
pub mod shuffle_board;
