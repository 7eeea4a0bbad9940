//! Text rendering of a grid.

use std::fmt;

use torus_core::Cell;

use crate::grid::Grid;

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.cells().rows() {
            for &byte in line {
                write!(f, "{}", Cell::from(byte != 0))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
