//! The 3x3 board.
//!
//! A cell, once written, stays occupied until `reset`. Capture only changes
//! the owner of the card already in the cell. Neighbour lookups go through
//! `neighbor`, which owns every edge check.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::position::{Direction, Position};
use super::{BOARD_SIZE, CELL_COUNT};
use crate::cards::PlacedCard;
use crate::core::{PlacementError, PlayerId};

/// Board cells in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<PlacedCard>; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a card into an empty cell.
    ///
    /// Fails with `CellOccupied` and leaves the board unchanged if the
    /// cell already holds a card.
    pub fn place(&mut self, card: PlacedCard, position: Position) -> Result<(), PlacementError> {
        let cell = &mut self.cells[position.index()];
        if cell.is_some() {
            return Err(PlacementError::CellOccupied(position));
        }
        debug!(row = position.row(), col = position.col(), card = %card.card_id(), owner = %card.owner(), "board write");
        *cell = Some(card);
        Ok(())
    }

    /// The card in a cell, if any.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&PlacedCard> {
        self.cells[position.index()].as_ref()
    }

    /// Is the cell occupied?
    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.cells[position.index()].is_some()
    }

    /// The card adjacent to `position` in `direction`.
    ///
    /// `None` if that direction leaves the board or the neighbouring cell is empty.
    #[must_use]
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<&PlacedCard> {
        position.step(direction).and_then(|p| self.get(p))
    }

    /// Reassign the owner of an occupied cell.
    ///
    /// Returns the previous owner, or `None` if the cell is empty.
    pub(crate) fn set_owner(&mut self, position: Position, owner: PlayerId) -> Option<PlayerId> {
        self.cells[position.index()]
            .as_mut()
            .map(|card| card.set_owner(owner))
    }

    /// True exactly when all nine cells are occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of cards currently owned by `player`.
    #[must_use]
    pub fn owned_count(&self, player: PlayerId) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|card| card.owner() == player)
            .count()
    }

    /// Empty cells in row-major order.
    pub fn open_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(|p| !self.is_occupied(*p))
    }

    /// Occupied cells with their cards, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, &PlacedCard)> {
        Position::all().filter_map(|p| self.get(p).map(|card| (p, card)))
    }

    /// Clear every cell. Only used between matches.
    pub fn reset(&mut self) {
        self.cells = Default::default();
    }
}

impl std::fmt::Display for Board {
    /// One line per row; each cell shows `owner:card` or `.` when empty.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            let line: Vec<String> = (0..BOARD_SIZE)
                .map(|col| {
                    match Position::new(row, col).ok().and_then(|p| self.get(p)) {
                        Some(card) => format!("P{}:{}", card.owner().index() + 1, card.card_id().raw()),
                        None => ".".to_string(),
                    }
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
