//! Monte Carlo phase separation of a binary mixture on a periodic square lattice.
//!
//! Cells hold state `0` or `1`. Each iteration proposes exchanging two random
//! cells and accepts when the first cell's value fits better among the second
//! cell's neighbors, with an optional Boltzmann-weighted fallback.

pub mod acceptance;
pub mod constants;
pub mod energy;
pub mod error;
pub mod generators;
pub mod lattice;
pub mod metropolis;
pub mod neighborhood;
pub mod render;
pub mod runner;
pub mod trajectory;

pub use energy::{count_identical, count_total_energy, EnergyBaseline};
pub use error::SimulationError;
pub use generators::LatticeGenerator;
pub use lattice::{Coord, Lattice};
pub use metropolis::{phase_separate, PhaseSeparation, SimConfig};
pub use neighborhood::neighbors;
pub use trajectory::{SwapRecord, Trajectory};
