use serde::{Deserialize, Serialize};

/// What a cell of the minefield actually holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Mine,
    Empty,
    /// Number of mines among the neighbors, always in `1..=8`.
    Hint(u8),
}

impl CellContent {
    /// Content of a safe cell with `adjacent_mines` mined neighbors.
    pub const fn from_adjacent(adjacent_mines: u8) -> Self {
        if adjacent_mines == 0 {
            Self::Empty
        } else {
            Self::Hint(adjacent_mines)
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(CellContent),
}

impl CellView {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
