//! Board coordinates and compass directions.

use serde::{Deserialize, Serialize};

use super::BOARD_SIZE;
use crate::core::PlacementError;

/// A validated cell coordinate. Row 0 is the top, column 0 the left.
///
/// Deserialization goes through [`Position::new`], so an out-of-range
/// coordinate never enters the engine from serialized data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: u8,
    col: u8,
}

/// Unchecked wire form of a `Position`.
#[derive(Deserialize)]
struct RawPosition {
    row: u8,
    col: u8,
}

impl TryFrom<RawPosition> for Position {
    type Error = PlacementError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row.into(), raw.col.into())
    }
}

impl Position {
    /// Create a position, rejecting coordinates outside the board.
    ///
    /// ```
    /// use triad_engine::board::Position;
    ///
    /// assert!(Position::new(2, 0).is_ok());
    /// assert!(Position::new(3, 0).is_err());
    /// ```
    pub fn new(row: usize, col: usize) -> Result<Self, PlacementError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(PlacementError::InvalidPosition { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major cell index (0..9).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// The adjacent position in `direction`, or `None` at the edge.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.offset();
        let row = self.row().checked_add_signed(dr)?;
        let col = self.col().checked_add_signed(dc)?;
        Self::new(row, col).ok()
    }

    /// Every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| {
            (0..BOARD_SIZE).map(move |col| Position {
                row: row as u8,
                col: col as u8,
            })
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Compass direction from a cell towards a neighbour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// The direction pointing back the other way.
    ///
    /// A neighbour in direction `d` faces the placed card with its `d.opposite()` side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}
