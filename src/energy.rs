use crate::lattice::{Coord, Lattice};
use crate::neighborhood::NeighborSet;

/// Number of orthogonal neighbors on a square lattice.
pub const COORDINATION: usize = 4;

/// What the identical-neighbor count is subtracted from.
///
/// The two only differ on lattices with a side of 1 or 2, where periodic
/// wrap folds neighbors together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnergyBaseline {
    /// Always subtract from [`COORDINATION`].
    #[default]
    Coordination,
    /// Subtract from the number of distinct neighbors actually present.
    DistinctNeighbors,
}

impl EnergyBaseline {
    #[inline(always)]
    fn base(self, neighbors: &NeighborSet) -> usize {
        match self {
            Self::Coordination => COORDINATION,
            Self::DistinctNeighbors => neighbors.len(),
        }
    }
}

impl TryFrom<&str> for EnergyBaseline {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "coordination" => Ok(Self::Coordination),
            "distinct" => Ok(Self::DistinctNeighbors),
            _ => Err(format!(
                "unknown energy baseline '{s}', expected 'coordination' or 'distinct'"
            )),
        }
    }
}

/// Count cells in `neighbors` whose state equals `value`.
#[inline]
pub fn count_identical(neighbors: &NeighborSet, value: bool, lattice: &Lattice) -> usize {
    neighbors.iter().filter(|&&c| lattice[c] == value).count()
}

/// Per-cell energy: neighbors that differ from the cell's own state.
#[inline]
pub fn opposite_energy(lattice: &Lattice, c: Coord, baseline: EnergyBaseline) -> usize {
    let neighbors = lattice.neighbors(c);
    baseline.base(&neighbors) - count_identical(&neighbors, lattice[c], lattice)
}

/// Total energy summed over every cell, with the given baseline.
///
/// Bounded by `0 ..= 4 * rows * cols`. Lower means more phase separated.
pub fn total_energy(lattice: &Lattice, baseline: EnergyBaseline) -> usize {
    lattice
        .coords()
        .map(|c| opposite_energy(lattice, c, baseline))
        .sum()
}

/// Total energy with the fixed coordination baseline.
pub fn count_total_energy(lattice: &Lattice) -> usize {
    total_energy(lattice, EnergyBaseline::Coordination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::LatticeGenerator;

    fn roll_rows(lattice: &Lattice, shift: usize) -> Lattice {
        let rows = lattice.rows();
        Lattice::from_fn(rows, lattice.cols(), |c| {
            lattice[Coord::new((c.x + shift) % rows, c.y)]
        })
        .unwrap()
    }

    fn roll_cols(lattice: &Lattice, shift: usize) -> Lattice {
        let cols = lattice.cols();
        Lattice::from_fn(lattice.rows(), cols, |c| {
            lattice[Coord::new(c.x, (c.y + shift) % cols)]
        })
        .unwrap()
    }

    #[test]
    fn test_count_identical_bounds() {
        let lat = LatticeGenerator::random(6, 5, 40.0, 7).unwrap();
        for c in lat.coords() {
            let n = lat.neighbors(c);
            for value in [false, true] {
                let count = count_identical(&n, value, &lat);
                assert!(count <= n.len());
            }
            // each neighbor matches exactly one of the two states
            assert_eq!(
                count_identical(&n, false, &lat) + count_identical(&n, true, &lat),
                n.len()
            );
        }
    }

    #[test]
    fn test_count_identical_uniform_is_four() {
        let lat = LatticeGenerator::uniform(4, 4, true).unwrap();
        let n = lat.neighbors(Coord::new(2, 3));
        assert_eq!(count_identical(&n, true, &lat), 4);
        assert_eq!(count_identical(&n, false, &lat), 0);
    }

    #[test]
    fn test_uniform_energy_is_zero() {
        for (rows, cols) in [(3, 3), (4, 7), (10, 10)] {
            for state in [false, true] {
                let lat = LatticeGenerator::uniform(rows, cols, state).unwrap();
                assert_eq!(count_total_energy(&lat), 0);
            }
        }
    }

    #[test]
    fn test_checkerboard_energy_is_maximal() {
        for (rows, cols) in [(4, 4), (4, 6), (8, 10)] {
            let lat = LatticeGenerator::checkerboard(rows, cols).unwrap();
            assert_eq!(count_total_energy(&lat), 4 * rows * cols);
        }
    }

    #[test]
    fn test_energy_within_bounds() {
        for seed in 0..5 {
            let lat = LatticeGenerator::random(7, 9, 50.0, seed).unwrap();
            let e = count_total_energy(&lat);
            assert!(e <= 4 * 7 * 9);
        }
    }

    #[test]
    fn test_cyclic_shift_preserves_energy() {
        let lat = LatticeGenerator::random(5, 6, 50.0, 11).unwrap();
        let e = count_total_energy(&lat);
        for shift in 1..5 {
            assert_eq!(count_total_energy(&roll_rows(&lat, shift)), e);
        }
        for shift in 1..6 {
            assert_eq!(count_total_energy(&roll_cols(&lat, shift)), e);
        }
    }

    #[test]
    fn test_hand_counted_energy() {
        // single 1 in a sea of 0s: the 1 sees four opposite neighbors,
        // each of its four neighbors sees one
        let mut lat = Lattice::new(5, 5).unwrap();
        lat.set(Coord::new(2, 2), true);
        assert_eq!(opposite_energy(&lat, Coord::new(2, 2), EnergyBaseline::Coordination), 4);
        assert_eq!(opposite_energy(&lat, Coord::new(1, 2), EnergyBaseline::Coordination), 1);
        assert_eq!(opposite_energy(&lat, Coord::new(0, 0), EnergyBaseline::Coordination), 0);
        assert_eq!(count_total_energy(&lat), 8);
    }

    #[test]
    fn test_baselines_agree_on_regular_lattices() {
        let lat = LatticeGenerator::random(4, 5, 30.0, 3).unwrap();
        assert_eq!(
            total_energy(&lat, EnergyBaseline::Coordination),
            total_energy(&lat, EnergyBaseline::DistinctNeighbors)
        );
    }

    #[test]
    fn test_one_by_one_baselines() {
        // the only neighbor is the cell itself, which always matches
        let lat = Lattice::from_rows(&[[1u8]]).unwrap();
        assert_eq!(total_energy(&lat, EnergyBaseline::Coordination), 3);
        assert_eq!(total_energy(&lat, EnergyBaseline::DistinctNeighbors), 0);
    }

    #[test]
    fn test_one_by_n_baselines() {
        // three distinct neighbors per cell: itself plus left and right
        let uniform = LatticeGenerator::uniform(1, 4, false).unwrap();
        assert_eq!(total_energy(&uniform, EnergyBaseline::Coordination), 4);
        assert_eq!(total_energy(&uniform, EnergyBaseline::DistinctNeighbors), 0);

        let alternating = Lattice::from_rows(&[[0u8, 1, 0, 1]]).unwrap();
        assert_eq!(total_energy(&alternating, EnergyBaseline::Coordination), 12);
        assert_eq!(total_energy(&alternating, EnergyBaseline::DistinctNeighbors), 8);
    }

    #[test]
    fn test_two_by_two_baselines() {
        // two distinct neighbors per cell
        let uniform = LatticeGenerator::uniform(2, 2, true).unwrap();
        assert_eq!(total_energy(&uniform, EnergyBaseline::Coordination), 8);
        assert_eq!(total_energy(&uniform, EnergyBaseline::DistinctNeighbors), 0);

        let checker = LatticeGenerator::checkerboard(2, 2).unwrap();
        assert_eq!(total_energy(&checker, EnergyBaseline::Coordination), 16);
        assert_eq!(total_energy(&checker, EnergyBaseline::DistinctNeighbors), 8);
    }

    #[test]
    fn test_baseline_from_str() {
        assert_eq!(
            EnergyBaseline::try_from("distinct"),
            Ok(EnergyBaseline::DistinctNeighbors)
        );
        assert!(EnergyBaseline::try_from("four").is_err());
    }
}
