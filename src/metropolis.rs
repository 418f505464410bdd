use rand::Rng;
use tracing::{debug, info, trace};

use crate::acceptance::decide;
use crate::energy::{count_identical, total_energy, EnergyBaseline};
use crate::error::SimulationError;
use crate::lattice::{Coord, Lattice};
use crate::trajectory::{SwapRecord, Trajectory};

pub const DEFAULT_ITERATIONS: usize = 100_000;

/// Parameters of one phase-separation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// Kelvin. `None` disables the thermal fallback.
    pub temperature: Option<f64>,
    pub iterations: usize,
    pub baseline: EnergyBaseline,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            temperature: None,
            iterations: DEFAULT_ITERATIONS,
            baseline: EnergyBaseline::default(),
        }
    }
}

impl SimConfig {
    /// Validated config from caller-facing values.
    pub fn new(temperature: Option<f64>, iterations: i64) -> Result<Self, SimulationError> {
        let iterations = usize::try_from(iterations)
            .map_err(|_| SimulationError::InvalidIterationCount(iterations))?;
        let config = Self {
            temperature,
            iterations,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_baseline(mut self, baseline: EnergyBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        match self.temperature {
            Some(t) if !(t.is_finite() && t > 0.0) => Err(SimulationError::InvalidTemperature(t)),
            _ => Ok(()),
        }
    }
}

/// Result of [`phase_separate`]. The lattice itself is the caller's argument.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseSeparation {
    /// Energy after the last iteration; `None` when no iteration ran.
    pub total_energy: Option<usize>,
    pub trajectory: Trajectory,
}

#[inline]
fn random_point<R: Rng + ?Sized>(lattice: &Lattice, rng: &mut R) -> Coord {
    let x = rng.gen_range(0..lattice.rows());
    let y = rng.gen_range(0..lattice.cols());
    Coord::new(x, y)
}

/// Run Monte Carlo pair swaps on `lattice`, mutating it in place.
///
/// Each iteration draws two cells (x1, y1, x2, y2 from `rng`, in that order),
/// counts how many neighbors of the first cell share its value and how many
/// neighbors of the second cell would share it, and swaps the two values when
/// the second neighborhood fits better. Otherwise, if a temperature is set,
/// one more draw decides the swap against the Boltzmann probability.
///
/// The lattice energy is recomputed after every iteration and logged together
/// with the decision in the returned trajectory.
pub fn phase_separate<R: Rng + ?Sized>(
    lattice: &mut Lattice,
    config: &SimConfig,
    rng: &mut R,
) -> Result<PhaseSeparation, SimulationError> {
    config.validate()?;

    debug!(
        rows = lattice.rows(),
        cols = lattice.cols(),
        temperature = ?config.temperature,
        iterations = config.iterations,
        baseline = ?config.baseline,
        "starting phase separation"
    );

    let mut trajectory = Trajectory::with_capacity(config.iterations);
    let mut energy = None;

    for step in 0..config.iterations {
        let p1 = random_point(lattice, rng);
        let grid1 = lattice[p1];

        let p2 = random_point(lattice, rng);
        let grid2 = lattice[p2];

        let count1 = count_identical(&lattice.neighbors(p1), grid1, lattice);
        let count2 = count_identical(&lattice.neighbors(p2), grid1, lattice);

        let decision = decide(count1, count2, config.temperature, rng)?;
        if decision.swapped {
            lattice.swap(p1, p2);
        }

        let e = total_energy(lattice, config.baseline);
        energy = Some(e);

        trace!(step, ?p1, ?p2, count1, count2, switch = decision.swapped, energy = e);

        trajectory.push(SwapRecord {
            p1,
            grid1: grid1 as u8,
            p2,
            grid2: grid2 as u8,
            count1,
            count2,
            prob: decision.thermal.map(|t| t.prob),
            draw: decision.thermal.map(|t| t.rand),
            switch: decision.swapped,
            total_energy: e,
        });
    }

    info!(
        iterations = trajectory.len(),
        accepted = trajectory.accepted(),
        energy = ?energy,
        "phase separation finished"
    );

    Ok(PhaseSeparation {
        total_energy: energy,
        trajectory,
    })
}
