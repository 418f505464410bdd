use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use itertools::Itertools;

use crate::error::SimulationError;
use crate::lattice::Coord;

/// Column names of the tabular trajectory view.
pub const COLUMNS: [&str; 12] = [
    "x1",
    "y1",
    "grid1",
    "x2",
    "y2",
    "grid2",
    "count1",
    "count2",
    "prob",
    "rand",
    "switch",
    "total_energy",
];

/// What happened in one Monte Carlo iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct SwapRecord {
    pub p1: Coord,
    /// State at `p1` before the iteration.
    pub grid1: u8,
    pub p2: Coord,
    /// State at `p2` before the iteration.
    pub grid2: u8,
    /// Neighbors of `p1` sharing `grid1`.
    pub count1: usize,
    /// Neighbors of `p2` sharing `grid1`.
    pub count2: usize,
    pub prob: Option<f64>,
    pub draw: Option<f64>,
    pub switch: bool,
    /// Lattice energy after the iteration.
    pub total_energy: usize,
}

/// Append-only log of swap records, one per iteration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    records: Vec<SwapRecord>,
}

impl Trajectory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, record: SwapRecord) {
        self.records.push(record);
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline(always)]
    pub fn records(&self) -> &[SwapRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SwapRecord> {
        self.records.iter()
    }

    /// Energy after each iteration.
    pub fn energies(&self) -> impl Iterator<Item = usize> + '_ {
        self.records.iter().map(|r| r.total_energy)
    }

    pub fn final_energy(&self) -> Option<usize> {
        self.records.last().map(|r| r.total_energy)
    }

    /// Number of iterations that swapped.
    pub fn accepted(&self) -> usize {
        self.records.iter().filter(|r| r.switch).count()
    }

    pub fn acceptance_rate(&self) -> Option<f64> {
        (!self.is_empty()).then(|| self.accepted() as f64 / self.len() as f64)
    }

    /// Write the log as CSV; absent probabilities and draws are empty cells.
    pub fn write_csv<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        fn opt(v: Option<f64>) -> String {
            v.map(|v| v.to_string()).unwrap_or_default()
        }

        writeln!(out, "{}", COLUMNS.iter().join(","))?;
        for r in &self.records {
            writeln!(
                out,
                "{},{},{},{},{},{},{},{},{},{},{},{}",
                r.p1.x,
                r.p1.y,
                r.grid1,
                r.p2.x,
                r.p2.y,
                r.grid2,
                r.count1,
                r.count2,
                opt(r.prob),
                opt(r.draw),
                r.switch,
                r.total_energy
            )?;
        }
        out.flush()
    }

    pub fn save_csv(&self, filename: impl AsRef<Path>) -> Result<(), SimulationError> {
        let file = File::create(filename)?;
        self.write_csv(BufWriter::new(file))?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a SwapRecord;
    type IntoIter = std::slice::Iter<'a, SwapRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
