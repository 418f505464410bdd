use std::collections::BTreeSet;

use crate::lattice::Coord;

/// Distinct neighbor coordinates of a cell.
///
/// Small lattices fold several offsets onto the same cell, so the set may hold
/// fewer than four entries.
pub type NeighborSet = BTreeSet<Coord>;

/// Orthogonal offsets: down, up, right, left.
const OFFSETS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Four orthogonal neighbors of `c` on a `rows x cols` torus.
///
/// Periodic boundary conditions are applied via `rem_euclid`, so every
/// returned coordinate is in range.
pub fn neighbors(c: Coord, rows: usize, cols: usize) -> NeighborSet {
    OFFSETS
        .iter()
        .map(|&(dx, dy)| {
            Coord::new(
                (c.x as isize + dx).rem_euclid(rows as isize) as usize,
                (c.y as isize + dy).rem_euclid(cols as isize) as usize,
            )
        })
        .collect()
}
