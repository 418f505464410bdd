use std::fmt;
use std::ops::Index;

use bitvec::prelude::BitVec;

use crate::error::SimulationError;
use crate::neighborhood::{self, NeighborSet};

/// Cell position on the lattice: `x` is the row, `y` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    #[inline(always)]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// Fixed-size binary lattice with periodic boundaries.
///
/// Cells are stored row-major in a bit vector; a set bit is state `1`.
/// Dimensions never change after construction.
#[derive(Clone, PartialEq, Eq)]
pub struct Lattice {
    rows: usize,
    cols: usize,
    cells: BitVec,
}

impl Lattice {
    /// All-zero lattice of the given shape.
    pub fn new(rows: usize, cols: usize) -> Result<Self, SimulationError> {
        if rows == 0 || cols == 0 {
            return Err(SimulationError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: BitVec::repeat(false, rows * cols),
        })
    }

    /// Build from nested rows of `0`/`1` values.
    pub fn from_rows<R: AsRef<[u8]>>(grid: &[R]) -> Result<Self, SimulationError> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, |r| r.as_ref().len());
        let mut lattice = Self::new(rows, cols)?;

        for (x, row) in grid.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(SimulationError::RaggedRow {
                    row: x,
                    expected: cols,
                    actual: row.len(),
                });
            }
            for (y, &value) in row.iter().enumerate() {
                let state = match value {
                    0 => false,
                    1 => true,
                    _ => return Err(SimulationError::InvalidCellValue { x, y, value }),
                };
                lattice.cells.set(x * cols + y, state);
            }
        }

        Ok(lattice)
    }

    /// Build by evaluating `f` at every coordinate in row-major order.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(Coord) -> bool,
    ) -> Result<Self, SimulationError> {
        let mut lattice = Self::new(rows, cols)?;
        for i in 0..rows * cols {
            let state = f(Coord::new(i / cols, i % cols));
            lattice.cells.set(i, state);
        }
        Ok(lattice)
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline(always)]
    fn offset(&self, c: Coord) -> usize {
        assert!(
            c.x < self.rows && c.y < self.cols,
            "coordinate ({}, {}) out of bounds for {}x{} lattice",
            c.x,
            c.y,
            self.rows,
            self.cols
        );
        c.x * self.cols + c.y
    }

    /// Cell state as `0` or `1`.
    #[inline(always)]
    pub fn get(&self, c: Coord) -> u8 {
        self[c] as u8
    }

    #[inline(always)]
    pub fn set(&mut self, c: Coord, state: bool) {
        let i = self.offset(c);
        self.cells.set(i, state);
    }

    /// Exchange the states of two cells.
    pub fn swap(&mut self, a: Coord, b: Coord) {
        let (i, j) = (self.offset(a), self.offset(b));
        self.cells.swap(i, j);
    }

    /// Periodic orthogonal neighbors of `c`.
    #[inline(always)]
    pub fn neighbors(&self, c: Coord) -> NeighborSet {
        neighborhood::neighbors(c, self.rows, self.cols)
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.size()).map(move |i| Coord::new(i / self.cols, i % self.cols))
    }

    pub fn count_ones(&self) -> usize {
        self.cells.count_ones()
    }

    /// Fraction of cells in state `1`.
    pub fn composition(&self) -> f64 {
        self.count_ones() as f64 / self.size() as f64
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|b| *b as u8).collect())
            .collect()
    }
}

impl Index<Coord> for Lattice {
    type Output = bool;

    #[inline(always)]
    fn index(&self, c: Coord) -> &Self::Output {
        &self.cells[self.offset(c)]
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for bit in row.iter() {
                write!(f, "{}", *bit as u8)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lattice {}x{}\n{}", self.rows, self.cols, self)
    }
}
