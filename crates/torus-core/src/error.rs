//! Error types for grid construction and editing.
//!
//! Every variant is a local, synchronous failure that leaves the grid
//! (and any other live grid) exactly as it was before the call.

use std::error::Error;
use std::fmt;

/// Errors from grid construction, seeding, and cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero.
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A supplied seed pattern does not hold exactly `width * height` bytes.
    SeedLengthMismatch {
        /// Required length (`width * height`).
        expected: usize,
        /// Length actually supplied.
        got: usize,
    },
    /// A row or column lies outside the grid.
    IndexOutOfBounds {
        /// Requested row.
        row: u32,
        /// Requested column.
        col: u32,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// A byte that is neither 0 (dead) nor 1 (alive).
    InvalidCellState {
        /// The rejected byte.
        value: u8,
    },
    /// A random seed density above 100 percent.
    InvalidDensity {
        /// The rejected percentage.
        percent: u8,
    },
    /// `width * height` does not fit the `u32` length reported to the host.
    CellCountOverflow {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid dimensions {width}x{height}: both must be >= 1")
            }
            Self::SeedLengthMismatch { expected, got } => {
                write!(f, "seed pattern has {got} cells, expected {expected}")
            }
            Self::IndexOutOfBounds {
                row,
                col,
                width,
                height,
            } => write!(
                f,
                "cell ({row}, {col}) out of bounds for {width}x{height} grid"
            ),
            Self::InvalidCellState { value } => {
                write!(f, "invalid cell state {value}: expected 0 or 1")
            }
            Self::InvalidDensity { percent } => {
                write!(f, "invalid seed density {percent}%: expected 0..=100")
            }
            Self::CellCountOverflow { width, height } => {
                write!(f, "{width}x{height} grid exceeds u32::MAX cells")
            }
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_coordinates() {
        let e = GridError::IndexOutOfBounds {
            row: 7,
            col: 2,
            width: 4,
            height: 5,
        };
        assert_eq!(e.to_string(), "cell (7, 2) out of bounds for 4x5 grid");
    }

    #[test]
    fn display_seed_mismatch() {
        let e = GridError::SeedLengthMismatch {
            expected: 16,
            got: 3,
        };
        assert_eq!(e.to_string(), "seed pattern has 3 cells, expected 16");
    }
}
