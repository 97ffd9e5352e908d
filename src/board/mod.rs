//! The playing board: a square grid of optional values and its lines.

pub mod grid;
pub mod lines;

pub use grid::Board;
pub use lines::Line;
