use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use tap::Tap;
use tracing::info;

use crate::error::SimulationError;
use crate::lattice::Lattice;
use crate::metropolis::{phase_separate, PhaseSeparation, SimConfig};

/// One independent run: its own lattice copy and its own generator.
#[derive(Debug, Clone)]
pub struct ReplicaOutcome {
    pub seed: u64,
    pub lattice: Lattice,
    pub result: PhaseSeparation,
}

impl ReplicaOutcome {
    pub fn final_energy(&self) -> Option<usize> {
        self.result.total_energy
    }
}

/// Run one replica per seed in parallel, each on a clone of `initial`.
///
/// Outcomes are sorted by final energy, lowest first. Every replica is
/// identical to a sequential run with `Xoshiro256StarStar::seed_from_u64(seed)`.
pub fn run_replicas(
    initial: &Lattice,
    config: &SimConfig,
    seeds: &[u64],
) -> Result<Vec<ReplicaOutcome>, SimulationError> {
    config.validate()?;
    measure_time::info_time!("{} replicas", seeds.len());

    let outcomes = seeds
        .par_iter()
        .map(|&seed| -> Result<ReplicaOutcome, SimulationError> {
            let mut lattice = initial.clone();
            let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
            let result = phase_separate(&mut lattice, config, &mut rng)?;
            Ok(ReplicaOutcome {
                seed,
                lattice,
                result,
            })
        })
        .collect::<Result<Vec<_>, _>>()?
        .tap_mut(|v| v.sort_by_key(|o| (o.final_energy(), o.seed)));

    if let Some(best) = outcomes.first() {
        info!(
            replicas = outcomes.len(),
            best_seed = best.seed,
            best_energy = ?best.final_energy(),
            "replicas finished"
        );
    }

    Ok(outcomes)
}
