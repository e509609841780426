//! Board: positions, directions and the 3x3 grid.

pub mod grid;
pub mod position;

pub use grid::Board;
pub use position::{Direction, Position};

/// Rows and columns on the board.
pub const BOARD_SIZE: usize = 3;

/// Total cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
