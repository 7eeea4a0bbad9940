//! Grid configuration and validation.
//!
//! [`GridConfig`] is the builder-input for constructing a grid.
//! [`validate()`](GridConfig::validate) checks every construction
//! invariant up front so the engine never has to clamp or repair input.

use crate::error::GridError;
use crate::seed::SeedRule;

/// Dimensions and initial state for a new grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Number of columns. Must be >= 1.
    pub width: u32,
    /// Number of rows. Must be >= 1.
    pub height: u32,
    /// Initial-state rule.
    pub seed: SeedRule,
}

impl GridConfig {
    /// Bundle dimensions and a seed rule. Does not validate.
    pub fn new(width: u32, height: u32, seed: SeedRule) -> Self {
        Self {
            width,
            height,
            seed,
        }
    }

    /// Number of cells, or an error if the dimensions are unusable.
    ///
    /// Rejects zero-sized axes and products that overflow the `u32`
    /// length reported across the host boundary.
    pub fn cell_count(&self) -> Result<usize, GridError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let count = u64::from(self.width) * u64::from(self.height);
        if count > u64::from(u32::MAX) {
            return Err(GridError::CellCountOverflow {
                width: self.width,
                height: self.height,
            });
        }
        usize::try_from(count).map_err(|_| GridError::CellCountOverflow {
            width: self.width,
            height: self.height,
        })
    }

    /// Check dimensions, then the seed rule against the resulting cell count.
    pub fn validate(&self) -> Result<usize, GridError> {
        let cells = self.cell_count()?;
        self.seed.validate(cells)?;
        Ok(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_or_height_rejected() {
        for (w, h) in [(0, 4), (4, 0), (0, 0)] {
            let cfg = GridConfig::new(w, h, SeedRule::AllDead);
            assert_eq!(
                cfg.validate(),
                Err(GridError::InvalidDimensions {
                    width: w,
                    height: h
                })
            );
        }
    }

    #[test]
    fn one_by_one_is_valid() {
        assert_eq!(GridConfig::new(1, 1, SeedRule::AllDead).validate(), Ok(1));
    }

    #[test]
    fn overflowing_cell_count_rejected() {
        let cfg = GridConfig::new(u32::MAX, 2, SeedRule::AllDead);
        assert_eq!(
            cfg.validate(),
            Err(GridError::CellCountOverflow {
                width: u32::MAX,
                height: 2
            })
        );
    }

    #[test]
    fn dimensions_checked_before_pattern() {
        let cfg = GridConfig::new(0, 3, SeedRule::Pattern(vec![0; 5]));
        assert!(matches!(
            cfg.validate(),
            Err(GridError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn pattern_length_checked() {
        let cfg = GridConfig::new(3, 2, SeedRule::Pattern(vec![0; 5]));
        assert_eq!(
            cfg.validate(),
            Err(GridError::SeedLengthMismatch {
                expected: 6,
                got: 5
            })
        );
    }
}
