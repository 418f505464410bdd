//! Typed errors for lattice construction, configuration and simulation output.

use std::fmt;

/// Errors raised while validating simulation inputs or writing its artifacts.
#[derive(Debug)]
pub enum SimulationError {
    /// Lattice has zero rows or zero columns.
    InvalidDimensions { rows: usize, cols: usize },

    /// A row of the input grid differs in length from the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A cell holds a value outside `{0, 1}`.
    InvalidCellValue { x: usize, y: usize, value: u8 },

    /// Negative iteration count.
    InvalidIterationCount(i64),

    /// Temperature is not a finite positive number of kelvin.
    InvalidTemperature(f64),

    /// Composition percentage outside `[0, 100]`.
    InvalidComposition(f64),

    /// Boltzmann probability could not be compared against a uniform draw.
    ProbabilityOverflow(f64),

    /// Writing an artifact (trajectory table) failed.
    Io(std::io::Error),

    /// Heat-map rendering failed (wraps the plotters backend message).
    Render(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "lattice must have positive dimensions, got {rows}x{cols}")
            }
            Self::RaggedRow {
                row,
                expected,
                actual,
            } => write!(
                f,
                "row {row} has {actual} cells, expected {expected} like the first row"
            ),
            Self::InvalidCellValue { x, y, value } => {
                write!(f, "cell ({x}, {y}) holds {value}, expected 0 or 1")
            }
            Self::InvalidIterationCount(n) => {
                write!(f, "iteration count must be >= 0, got {n}")
            }
            Self::InvalidTemperature(t) => {
                write!(f, "temperature must be finite and > 0 K, got {t}")
            }
            Self::InvalidComposition(p) => {
                write!(f, "composition percentage must be within [0, 100], got {p}")
            }
            Self::ProbabilityOverflow(p) => {
                write!(f, "acceptance probability {p} is not comparable to a uniform draw")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Render(msg) => write!(f, "heat map rendering failed: {msg}"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SimulationError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
