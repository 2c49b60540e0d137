use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// Reveals `start` on the player board and, when it is empty, every cell reachable through empty cells.
///
/// Propagation stops at hints, which are revealed, and at mines, which are not. Cells that are already
/// revealed act as the visited marker, so calling this again over the same region changes nothing.
/// Flags in the way are cleared. Returns how many cells were newly revealed.
pub fn flood_reveal(layout: &MineLayout, board: &mut Array2<CellView>, start: Coord2) -> CellCount {
    let size = board.grid_size();
    if !board.contains_coords(start) {
        return 0;
    }

    let mut revealed: CellCount = 0;
    let mut pending: Vec<Coord2> = Vec::from([start]);

    while let Some(coords) = pending.pop() {
        let view = &mut board[coords.to_nd_index()];
        if view.is_revealed() {
            continue;
        }

        match layout[coords] {
            CellContent::Mine => continue,
            content @ CellContent::Hint(_) => {
                *view = CellView::Revealed(content);
            }
            CellContent::Empty => {
                *view = CellView::Revealed(CellContent::Empty);
                pending.extend(iter_displaced(coords, size).flatten());
            }
        }

        revealed += 1;
        log::trace!("Flood revealed {:?} as {:?}", coords, layout[coords]);
    }

    revealed
}
