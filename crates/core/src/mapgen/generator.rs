//! High-level grid generation: build, place bosses, fence, then accept or rebuild.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::error::GridError;

use super::bosses::place_bosses;
use super::cell::Cell;
use super::grid::Grid;
use super::params::{FillCheck, GridConfig};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Verdict {
    Accepted,
    Rejected { fill_fraction: f64 },
}

pub struct GridGenerator {
    config: GridConfig,
}

impl GridGenerator {
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn generate(&self, seed: u64) -> Result<Grid, GridError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate_with(&mut rng)
    }

    /// Builds candidate grids until one passes the fill check, for at most
    /// `max_attempts` builds. Every attempt starts from fresh cells.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Grid, GridError> {
        let mut best_fill_fraction = 0.0_f64;

        for attempt in 1..=self.config.max_attempts {
            let mut grid = self.build(rng);
            match self.check(&grid) {
                Verdict::Accepted => {
                    grid.set_attempts(attempt);
                    info!(
                        attempt,
                        fill_fraction = grid.filled_fraction(),
                        fingerprint = grid.fingerprint(),
                        "grid accepted"
                    );
                    return Ok(grid);
                }
                Verdict::Rejected { fill_fraction } => {
                    best_fill_fraction = best_fill_fraction.max(fill_fraction);
                    debug!(attempt, fill_fraction, "regenerating grid, fill below threshold");
                }
            }
        }

        warn!(
            attempts = self.config.max_attempts,
            best_fill_fraction, "grid generation exhausted its attempt budget"
        );
        Err(GridError::GenerationExhausted {
            attempts: self.config.max_attempts,
            best_fill_fraction,
        })
    }

    fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Grid {
        let params = &self.config.params;
        let (width, height) = (self.config.width, self.config.height);

        // Row-major so a seeded stream reproduces the same grid.
        let cells = (0..width * height).map(|_| Cell::random(params, rng)).collect();
        let mut grid = Grid::from_cells(width, height, cells);

        place_bosses(&mut grid, params.boss_count, rng);
        grid.fence();
        grid
    }

    fn check(&self, grid: &Grid) -> Verdict {
        if self.config.fill_check == FillCheck::Disabled {
            return Verdict::Accepted;
        }
        let fill_fraction = grid.filled_fraction();
        if fill_fraction >= self.config.params.minimum_fill_fraction {
            Verdict::Accepted
        } else {
            Verdict::Rejected { fill_fraction }
        }
    }
}
