use ndarray::Array2;
use smallvec::SmallVec;

use crate::*;

/// Up to eight in-bounds neighbors of a cell.
pub type Neighbors = SmallVec<[Coord2; 8]>;

/// Bounds-checked addressing and neighbor enumeration over a 2D board.
pub trait GridExt {
    /// Board size as `(rows, columns)`.
    fn grid_size(&self) -> Coord2;

    fn contains_coords(&self, (row, column): Coord2) -> bool {
        let (rows, columns) = self.grid_size();
        row < rows && column < columns
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains_coords(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.grid_size())
    }

    fn neighbors(&self, coords: Coord2) -> Neighbors {
        self.iter_neighbors(coords).collect()
    }
}

impl<T> GridExt for Array2<T> {
    fn grid_size(&self) -> Coord2 {
        let (rows, columns) = self.dim();
        (
            rows.try_into().unwrap_or(Coord::MAX),
            columns.try_into().unwrap_or(Coord::MAX),
        )
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
pub(crate) fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, column) = coords;
    let (d_row, d_column) = delta;
    let (rows, columns) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= rows {
        return None;
    }

    let next_column = column.checked_add_signed(d_column.try_into().ok()?)?;
    if next_column >= columns {
        return None;
    }

    Some((next_row, next_column))
}

/// All eight surrounding positions, including the ones that fall off the board.
pub(crate) fn iter_displaced(coords: Coord2, bounds: Coord2) -> impl Iterator<Item = Option<Coord2>> {
    DISPLACEMENTS
        .iter()
        .map(move |&delta| apply_delta(coords, delta, bounds))
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord2) -> Array2<u8> {
        Array2::default(size.to_nd_index())
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let neighbors = board((9, 9)).neighbors((4, 4));

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(4, 4)));
        assert!(neighbors.contains(&(3, 3)));
        assert!(neighbors.contains(&(5, 5)));
    }

    #[test]
    fn edge_cell_has_five_neighbors() {
        let grid = board((9, 9));

        assert_eq!(grid.neighbors((0, 4)).len(), 5);
        assert_eq!(grid.neighbors((8, 4)).len(), 5);
        assert_eq!(grid.neighbors((4, 0)).len(), 5);
        assert_eq!(grid.neighbors((4, 8)).len(), 5);
    }

    #[test]
    fn corner_cell_has_three_neighbors() {
        let grid = board((9, 9));

        for corner in [(0, 0), (0, 8), (8, 0), (8, 8)] {
            assert_eq!(grid.neighbors(corner).len(), 3, "corner {corner:?}");
        }
        assert_eq!(grid.neighbors((0, 0)).as_slice(), &[(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn non_square_boards_use_their_own_bounds() {
        let grid = board((2, 5));

        assert_eq!(grid.neighbors((1, 4)).as_slice(), &[(0, 3), (0, 4), (1, 3)]);
        assert_eq!(grid.neighbors((0, 2)).len(), 5);
        assert_eq!(board((1, 1)).neighbors((0, 0)).len(), 0);
    }

    #[test]
    fn validate_coords_rejects_out_of_bounds() {
        let grid = board((3, 4));

        assert_eq!(grid.validate_coords((2, 3)), Ok((2, 3)));
        assert_eq!(grid.validate_coords((3, 0)), Err(GameError::InvalidCoords));
        assert_eq!(grid.validate_coords((0, 4)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn displaced_positions_keep_off_board_slots() {
        let displaced: alloc::vec::Vec<_> = iter_displaced((0, 0), (2, 2)).collect();

        assert_eq!(displaced.len(), 8);
        assert_eq!(displaced.iter().flatten().count(), 3);
    }
}
