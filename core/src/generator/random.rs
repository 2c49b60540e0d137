use alloc::vec::Vec;
use ndarray::Array2;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Purely random generation strategy that keeps one starting cell free of mines.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
    safe: Coord2,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64, safe: Coord2) -> Self {
        Self { seed, safe }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        place_mines(config, self.safe, &mut rng)
    }
}

/// Places `config.mines` mines anywhere except `safe` and computes the hints.
///
/// Each draw removes its pick from the candidate list, so exactly `config.mines` draws are made and no
/// cell is mined twice.
pub fn place_mines<R: Rng + ?Sized>(config: GameConfig, safe: Coord2, rng: &mut R) -> Result<MineLayout> {
    let config = config.validate()?;
    let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
    let safe = mine_mask.validate_coords(safe)?;

    let mut candidates: Vec<Coord2> = iter_coords(config.size)
        .filter(|&coords| coords != safe)
        .collect();

    for _ in 0..config.mines {
        let pick = rng.random_range(0..candidates.len());
        let coords = candidates.swap_remove(pick);
        mine_mask[coords.to_nd_index()] = true;
    }

    log::debug!(
        "Placed {} mines on a {}x{} field, safe cell {:?}",
        config.mines,
        config.rows(),
        config.columns(),
        safe
    );
    Ok(MineLayout::from_mine_mask(&mine_mask))
}
