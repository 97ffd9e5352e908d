//! Game rules: win-condition evaluation and move handling.

pub mod moves;
pub mod victory;

pub use moves::{compute_cell_result, IllegalMove, Move, MoveOutcome, Operation};
pub use victory::{
    is_prime, is_victory, satisfies_board, satisfies_line, ALL_CELLS_THRESHOLD,
};
