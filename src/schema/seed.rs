//! Initial-row seeding for automaton simulations.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::SimulationConfig;

/// How generation 0 is populated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InitialState {
    /// Probability of each cell being alive. `None` places a single live
    /// cell in the center column.
    pub distribution: Option<f64>,
    /// PRNG seed. `None` draws one from the thread-local CSPRNG.
    pub seed: Option<u64>,
}

impl From<&SimulationConfig> for InitialState {
    fn from(config: &SimulationConfig) -> Self {
        Self {
            distribution: config.distribution,
            seed: config.seed,
        }
    }
}

impl InitialState {
    /// Generate the initial row.
    pub fn generate(&self, width: usize) -> Vec<bool> {
        match self.distribution {
            Some(p) => {
                let mut rng = seeded_rng(self.seed);
                random_row(&mut rng, width, p)
            }
            None => center_row(width),
        }
    }
}

/// Deterministic generator for a seed, or a freshly seeded one.
///
/// ChaCha8 has a fixed, documented output stream, so a given seed yields the
/// same row natively, in the browser and across `rand` releases.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    let seed = seed.unwrap_or_else(|| {
        let drawn: u64 = rand::random();
        log::debug!("No seed supplied, drew {drawn}");
        drawn
    });
    ChaCha8Rng::seed_from_u64(seed)
}

/// One uniform draw in [0, 1) per column; alive iff the draw is below `p`.
pub fn random_row<R: Rng + ?Sized>(rng: &mut R, width: usize, p: f64) -> Vec<bool> {
    (0..width).map(|_| rng.r#gen::<f64>() < p).collect()
}

/// Single live cell at `width / 2`.
pub fn center_row(width: usize) -> Vec<bool> {
    let mut row = vec![false; width];
    if let Some(cell) = row.get_mut(width / 2) {
        *cell = true;
    }
    row
}
