//! Initial-state rules for new and reset grids.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cell::Cell;
use crate::error::GridError;

/// How a grid's cells are initialised.
///
/// Every rule is deterministic: the same rule on the same dimensions
/// always produces the same buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedRule {
    /// Every cell dead.
    AllDead,
    /// Cell `i` alive iff `i % 2 == 0 || i % 7 == 0`.
    Interference,
    /// Cell `i` alive iff `i % 3 == 0`.
    EveryThird,
    /// Each cell alive with probability `density_percent / 100`, drawn
    /// from a ChaCha8 stream seeded with `seed`.
    Random {
        /// RNG seed.
        seed: u64,
        /// Probability of a live cell, in percent (0..=100).
        density_percent: u8,
    },
    /// Explicit row-major bytes; length must be exactly `width * height`
    /// and every byte must be 0 or 1.
    Pattern(Vec<u8>),
}

impl SeedRule {
    /// Rule id for [`SeedRule::AllDead`].
    pub const ALL_DEAD: u32 = 0;
    /// Rule id for [`SeedRule::Interference`].
    pub const INTERFERENCE: u32 = 1;
    /// Rule id for [`SeedRule::EveryThird`].
    pub const EVERY_THIRD: u32 = 2;
    /// Rule id for [`SeedRule::Random`] with seed 0 and 50% density.
    pub const RANDOM: u32 = 3;

    /// Resolve a scalar rule id as passed across the host boundary.
    ///
    /// Patterns carry data and have no id; returns `None` for unknown ids.
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            Self::ALL_DEAD => Some(Self::AllDead),
            Self::INTERFERENCE => Some(Self::Interference),
            Self::EVERY_THIRD => Some(Self::EveryThird),
            Self::RANDOM => Some(Self::Random {
                seed: 0,
                density_percent: 50,
            }),
            _ => None,
        }
    }

    /// Check the rule against a grid of `cell_count` cells without
    /// touching any buffer.
    pub fn validate(&self, cell_count: usize) -> Result<(), GridError> {
        match self {
            Self::Random {
                density_percent, ..
            } if *density_percent > 100 => Err(GridError::InvalidDensity {
                percent: *density_percent,
            }),
            Self::Pattern(bytes) => {
                if bytes.len() != cell_count {
                    return Err(GridError::SeedLengthMismatch {
                        expected: cell_count,
                        got: bytes.len(),
                    });
                }
                match bytes.iter().find(|&&b| Cell::from_byte(b).is_none()) {
                    Some(&value) => Err(GridError::InvalidCellState { value }),
                    None => Ok(()),
                }
            }
            _ => Ok(()),
        }
    }

    /// Validate, then overwrite `cells` with this rule's initial state.
    ///
    /// On error `cells` is left untouched.
    pub fn fill(&self, cells: &mut [u8]) -> Result<(), GridError> {
        self.validate(cells.len())?;
        match self {
            Self::AllDead => cells.fill(Cell::Dead.as_byte()),
            Self::Interference => fill_indexed(cells, |i| i % 2 == 0 || i % 7 == 0),
            Self::EveryThird => fill_indexed(cells, |i| i % 3 == 0),
            Self::Random {
                seed,
                density_percent,
            } => {
                let mut rng = ChaCha8Rng::seed_from_u64(*seed);
                let threshold = u32::from(*density_percent);
                for cell in cells.iter_mut() {
                    *cell = Cell::from(rng.next_u32() % 100 < threshold).as_byte();
                }
            }
            Self::Pattern(bytes) => cells.copy_from_slice(bytes),
        }
        Ok(())
    }
}

fn fill_indexed(cells: &mut [u8], alive: impl Fn(usize) -> bool) {
    for (i, cell) in cells.iter_mut().enumerate() {
        *cell = Cell::from(alive(i)).as_byte();
    }
}
