use ndarray::Array2;

use crate::*;

pub fn revealed_count(board: &Array2<CellView>) -> CellCount {
    board.iter().filter(|cell| cell.is_revealed()).count() as CellCount
}

pub fn flagged_count(board: &Array2<CellView>) -> CellCount {
    board
        .iter()
        .filter(|&&cell| cell == CellView::Flagged)
        .count() as CellCount
}

/// A game is won once every safe cell is revealed, flags do not matter.
pub fn is_won(board: &Array2<CellView>, config: GameConfig) -> bool {
    revealed_count(board) == config.safe_cell_count()
}
