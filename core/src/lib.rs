//! Minesweeper board engine: mine placement, hints, flood-fill reveal and the move state machine.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use evaluate::*;
pub use generator::*;
pub use grid::*;
pub use layout::*;
pub use reveal::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod evaluate;
mod generator;
mod grid;
mod layout;
mod reveal;
mod tile;
mod types;

/// Board dimensions and mine count, fixed for the lifetime of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// `(rows, columns)`
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Validated configuration: at least one mine and at least one free cell.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        Self::new_unchecked(size, mines).validate()
    }

    /// Checks that a board of `size` has at least one row and one column.
    pub fn validate_size(size: Coord2) -> Result<Coord2> {
        let (rows, columns) = size;
        if rows == 0 || columns == 0 {
            log::warn!("Rejected {}x{} board", rows, columns);
            return Err(GameError::EmptyBoard);
        }
        Ok(size)
    }

    pub fn validate(self) -> Result<Self> {
        Self::validate_size(self.size)?;
        if self.mines == 0 {
            log::warn!("Rejected minefield without mines");
            return Err(GameError::NoMines);
        }
        if self.mines >= self.total_cells() {
            log::warn!(
                "Rejected minefield, requested {} mines but only {} cells",
                self.mines,
                self.total_cells()
            );
            return Err(GameError::TooManyMines);
        }
        Ok(self)
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn columns(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Cells that must be revealed to win.
    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_accepts_one_mine_up_to_all_but_one_cell() {
        assert!(GameConfig::new((9, 9), 1).is_ok());
        assert!(GameConfig::new((9, 9), 80).is_ok());
        assert_eq!(GameConfig::new((9, 9), 10).unwrap().safe_cell_count(), 71);
    }

    #[test]
    fn config_rejects_out_of_range_mine_counts() {
        assert_eq!(GameConfig::new((9, 9), 0), Err(GameError::NoMines));
        assert_eq!(GameConfig::new((9, 9), 81), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new((1, 1), 1), Err(GameError::TooManyMines));
    }

    #[test]
    fn config_rejects_empty_boards() {
        assert_eq!(GameConfig::new((0, 9), 1), Err(GameError::EmptyBoard));
        assert_eq!(GameConfig::new((9, 0), 1), Err(GameError::EmptyBoard));
        assert_eq!(GameConfig::validate_size((0, 0)), Err(GameError::EmptyBoard));
        assert_eq!(GameConfig::validate_size((1, 2)), Ok((1, 2)));
    }
}
