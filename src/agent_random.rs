use alloc::format;

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::{
    agent::Agent,
    board::Grid,
    common::{Coordinate, GameError, Player},
    ui::Console,
};

/// Computer player that picks a uniformly random blank cell.
pub struct RandomAgent {
    rng: SmallRng,
}

impl RandomAgent {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    /// Reproducible agent: the same seed always plays the same moves.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Agent seeded from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        let mut seed_rng = rand::rng();
        Self::new(SmallRng::from_rng(&mut seed_rng))
    }
}

impl Agent for RandomAgent {
    fn select_move(
        &mut self,
        grid: &Grid,
        player: Player,
        console: &mut dyn Console,
    ) -> anyhow::Result<Coordinate> {
        let free = grid.blank_cells();
        let coord = *free
            .choose(&mut self.rng)
            .ok_or(GameError::NoFreeCells)?;
        console.write_line(&format!("{} plays {}", player, coord));
        Ok(coord)
    }
}
