//! Canonical Life patterns as `(row, col)` offsets from their top-left.
//!
//! - [`GLIDER`]: travels one cell down and right every 4 generations.
//! - [`BLINKER`]: period-2 oscillator (horizontal phase).
//! - [`BLOCK`]: still life.
//! - [`SINGLE`]: one isolated cell; dies of underpopulation.

/// ```text
/// .#.
/// ..#
/// ###
/// ```
pub const GLIDER: [(u32, u32); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

/// ```text
/// ###
/// ```
pub const BLINKER: [(u32, u32); 3] = [(0, 0), (0, 1), (0, 2)];

/// ```text
/// ##
/// ##
/// ```
pub const BLOCK: [(u32, u32); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];

/// ```text
/// #
/// ```
pub const SINGLE: [(u32, u32); 1] = [(0, 0)];
