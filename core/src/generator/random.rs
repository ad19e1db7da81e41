use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform placement without replacement over every cell the start policy
/// leaves open.
#[derive(Clone, Debug)]
pub struct RandomPlacer<R> {
    rng: R,
    start_policy: StartPolicy,
}

impl<R: Rng> RandomPlacer<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            start_policy: StartPolicy::default(),
        }
    }

    pub fn with_start_policy(mut self, start_policy: StartPolicy) -> Self {
        self.start_policy = start_policy;
        self
    }

    pub fn start_policy(&self) -> StartPolicy {
        self.start_policy
    }

    fn effective_policy(&self, grid: &Grid, mines: CellCount, excluded: Coord2) -> StartPolicy {
        use StartPolicy::*;

        match self.start_policy {
            SafeCell => SafeCell,
            ZeroCell => {
                let reserved = 1 + grid.iter_neighbors(excluded).count() as CellCount;
                if mines + reserved > grid.total_cells() {
                    log::warn!(
                        "Cannot keep {} cells around {:?} clear with {} mines, fallback to safe cell",
                        reserved,
                        excluded,
                        mines
                    );
                    SafeCell
                } else {
                    ZeroCell
                }
            }
        }
    }
}

impl RandomPlacer<SmallRng> {
    /// Placer with a reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MinePlacer for RandomPlacer<R> {
    fn place(&mut self, grid: &mut Grid, mines: CellCount, excluded: Coord2) -> Result<MineSet> {
        check_request(grid, mines, excluded)?;

        let mut reserved = MineSet::from([excluded]);
        if self.effective_policy(grid, mines, excluded) == StartPolicy::ZeroCell {
            reserved.extend(grid.iter_neighbors(excluded));
        }

        let candidates: Vec<Coord2> = grid
            .iter()
            .map(|(coords, _)| coords)
            .filter(|coords| !reserved.contains(coords))
            .collect();

        let chosen: MineSet = index::sample(&mut self.rng, candidates.len(), mines.into())
            .into_iter()
            .map(|i| candidates[i])
            .collect();

        log::debug!(
            "Placed {} mines on {:?} board, keeping {:?} clear",
            chosen.len(),
            grid.size(),
            excluded
        );
        lay_mines(grid, &chosen);
        Ok(chosen)
    }
}
