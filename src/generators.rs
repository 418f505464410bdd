use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::error::SimulationError;
use crate::lattice::Lattice;

pub struct LatticeGenerator;

impl LatticeGenerator {
    /// Random binary lattice where roughly `percentage` percent of cells are `1`.
    ///
    /// A cell is `1` when its uniform draw is `<= percentage / 100`. Draws are
    /// taken in row-major order from a generator seeded with `seed`.
    pub fn random(
        rows: usize,
        cols: usize,
        percentage: f64,
        seed: u64,
    ) -> Result<Lattice, SimulationError> {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        Self::random_with(&mut rng, rows, cols, percentage)
    }

    /// Same as [`LatticeGenerator::random`] but drawing from a caller-owned generator,
    /// which stays usable for the simulation afterwards.
    pub fn random_with<R: Rng + ?Sized>(
        rng: &mut R,
        rows: usize,
        cols: usize,
        percentage: f64,
    ) -> Result<Lattice, SimulationError> {
        if !(0.0..=100.0).contains(&percentage) {
            return Err(SimulationError::InvalidComposition(percentage));
        }
        let threshold = percentage / 100.0;
        Lattice::from_fn(rows, cols, |_| rng.gen::<f64>() <= threshold)
    }

    /// Alternating states, `1` where `x + y` is odd.
    pub fn checkerboard(rows: usize, cols: usize) -> Result<Lattice, SimulationError> {
        Lattice::from_fn(rows, cols, |c| (c.x + c.y) % 2 == 1)
    }

    pub fn uniform(rows: usize, cols: usize, state: bool) -> Result<Lattice, SimulationError> {
        Lattice::from_fn(rows, cols, |_| state)
    }
}
