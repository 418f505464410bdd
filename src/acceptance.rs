use rand::Rng;
use tracing::debug;

use crate::constants::{BOLTZMANN_EV_PER_K, COUNT_SCALE};
use crate::error::SimulationError;

/// Probability and uniform draw of a thermal acceptance test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalDraw {
    pub prob: f64,
    pub rand: f64,
}

/// Outcome of the acceptance rule for one proposed swap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub swapped: bool,
    /// Present only when the thermal fallback ran.
    pub thermal: Option<ThermalDraw>,
}

/// `exp(((count2 - count1) / 100) / (k * T))` with `k` in eV/K.
///
/// Not clamped: a value above 1 simply guarantees acceptance.
pub fn boltzmann_probability(count1: usize, count2: usize, temperature: f64) -> f64 {
    let delta = (count2 as f64 - count1 as f64) / COUNT_SCALE;
    (delta / (BOLTZMANN_EV_PER_K * temperature)).exp()
}

/// Decide whether to swap, given how well the current value fits its own
/// neighborhood (`count1`) and the other cell's neighborhood (`count2`).
///
/// A better fit always swaps. Otherwise, with a temperature, one uniform draw
/// is taken from `rng` and compared against the Boltzmann probability.
pub fn decide<R: Rng + ?Sized>(
    count1: usize,
    count2: usize,
    temperature: Option<f64>,
    rng: &mut R,
) -> Result<Decision, SimulationError> {
    if count2 > count1 {
        return Ok(Decision {
            swapped: true,
            thermal: None,
        });
    }

    let Some(temperature) = temperature else {
        return Ok(Decision {
            swapped: false,
            thermal: None,
        });
    };

    let prob = boltzmann_probability(count1, count2, temperature);
    if prob.is_nan() {
        return Err(SimulationError::ProbabilityOverflow(prob));
    }
    if prob >= 1.0 {
        debug!(prob, count1, count2, temperature, "acceptance probability saturated");
    }

    let rand: f64 = rng.gen();
    Ok(Decision {
        swapped: rand < prob,
        thermal: Some(ThermalDraw { prob, rand }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_probability_at_room_temperature() {
        let kt = BOLTZMANN_EV_PER_K * 300.0;
        assert_relative_eq!(
            boltzmann_probability(4, 0, 300.0),
            (-0.04 / kt).exp(),
            max_relative = 1e-12
        );
        assert_relative_eq!(boltzmann_probability(2, 2, 300.0), 1.0);
    }

    #[test]
    fn test_probability_decreases_with_temperature() {
        let hot = boltzmann_probability(3, 1, 1000.0);
        let cold = boltzmann_probability(3, 1, 10.0);
        assert!(cold < hot);
        assert!(hot < 1.0);
        assert!(cold > 0.0);
    }

    #[test]
    fn test_better_fit_swaps_without_draw() {
        // no draw is consumed, so the generator still yields its first word
        let mut rng = StepRng::new(0, 1);
        let d = decide(1, 3, Some(300.0), &mut rng).unwrap();
        assert_eq!(
            d,
            Decision {
                swapped: true,
                thermal: None
            }
        );
        assert_eq!(rand::RngCore::next_u64(&mut rng), 0);
    }

    #[test]
    fn test_no_temperature_rejects() {
        let mut rng = StepRng::new(0, 1);
        for (c1, c2) in [(0, 0), (3, 1), (4, 4)] {
            let d = decide(c1, c2, None, &mut rng).unwrap();
            assert!(!d.swapped);
            assert!(d.thermal.is_none());
        }
    }

    #[test]
    fn test_thermal_draw_below_probability_swaps() {
        // a zero word maps to a draw of exactly 0.0
        let mut rng = StepRng::new(0, 0);
        let d = decide(4, 0, Some(300.0), &mut rng).unwrap();
        assert!(d.swapped);
        let t = d.thermal.unwrap();
        assert_eq!(t.rand, 0.0);
        assert_relative_eq!(t.prob, boltzmann_probability(4, 0, 300.0));
    }

    #[test]
    fn test_thermal_draw_above_probability_rejects() {
        // an all-ones word maps to the largest draw below 1.0
        let mut rng = StepRng::new(u64::MAX, 0);
        let d = decide(4, 0, Some(300.0), &mut rng).unwrap();
        assert!(!d.swapped);
        assert!(d.thermal.unwrap().rand > 0.99);
    }

    #[test]
    fn test_equal_counts_always_accept() {
        let mut rng = StepRng::new(u64::MAX, 0);
        let d = decide(2, 2, Some(1e-3), &mut rng).unwrap();
        assert!(d.swapped);
        assert_eq!(d.thermal.unwrap().prob, 1.0);
    }

    #[test]
    fn test_zero_temperature_equal_counts_overflows() {
        let mut rng = StepRng::new(0, 0);
        let err = decide(2, 2, Some(0.0), &mut rng).unwrap_err();
        assert!(matches!(err, SimulationError::ProbabilityOverflow(p) if p.is_nan()));
    }
}
