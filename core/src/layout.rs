use core::ops::Index;
use hashbrown::HashSet;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The truth board: where the mines are and what every safe cell hints.
///
/// Built once per game and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    cells: Array2<CellContent>,
    mine_count: CellCount,
}

impl MineLayout {
    /// Computes hints for every safe cell of `mine_mask`.
    pub fn from_mine_mask(mine_mask: &Array2<bool>) -> Self {
        let mut mine_count: CellCount = 0;
        let cells = Array2::from_shape_fn(mine_mask.dim(), |(row, column)| {
            if mine_mask[[row, column]] {
                mine_count += 1;
                return CellContent::Mine;
            }
            let coords = (row as Coord, column as Coord);
            let adjacent_mines = mine_mask
                .iter_neighbors(coords)
                .filter(|&pos| mine_mask[pos.to_nd_index()])
                .count() as u8;
            CellContent::from_adjacent(adjacent_mines)
        });

        Self { cells, mine_count }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            let coords = mine_mask.validate_coords(coords)?;
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(&mine_mask))
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        self.cells.validate_coords(coords)
    }

    pub fn size(&self) -> Coord2 {
        self.cells.grid_size()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, columns) = self.size();
        mult(rows, columns)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn content_at(&self, coords: Coord2) -> CellContent {
        self[coords]
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.cells
            .iter_neighbors(coords)
            .filter(|&pos| self.contains_mine(pos))
            .count() as u8
    }

    /// Every mined coordinate, used to uncover the whole field on a loss.
    pub fn mine_locations(&self) -> HashSet<Coord2> {
        iter_coords(self.size())
            .filter(|&coords| self.contains_mine(coords))
            .collect()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = CellContent;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
