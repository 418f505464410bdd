//! Physical constants (CODATA 2018)

pub const BOLTZMANN_EV_PER_K: f64 = 8.617333262e-5; // eV/K

/// Identical-neighbor counts are scaled by this factor before entering the exponent.
pub const COUNT_SCALE: f64 = 100.0;
