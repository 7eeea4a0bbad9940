//! The two-valued cell state and its byte encoding.

use std::fmt;

/// State of a single grid cell.
///
/// Stored as one byte (`0 = Dead`, `1 = Alive`) so a grid's buffer can be
/// handed to the host and read as a plain byte array without translation.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Byte value 0.
    #[default]
    Dead = 0,
    /// Byte value 1.
    Alive = 1,
}

impl Cell {
    /// Decode a buffer byte. Returns `None` for anything other than 0 or 1.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::Dead),
            1 => Some(Self::Alive),
            _ => None,
        }
    }

    /// The byte this state is stored as.
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// Whether the cell is alive.
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// The opposite state.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dead => Self::Alive,
            Self::Alive => Self::Dead,
        }
    }

    /// Conway's rule (B3/S23) applied to one cell.
    pub const fn next(self, live_neighbours: u8) -> Self {
        match (self, live_neighbours) {
            (Self::Alive, 2) | (Self::Alive, 3) => Self::Alive,
            (Self::Dead, 3) => Self::Alive,
            _ => Self::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.as_byte()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Dead => '◻',
            Self::Alive => '◼',
        };
        write!(f, "{symbol}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_encoding_is_stable() {
        assert_eq!(Cell::Dead.as_byte(), 0);
        assert_eq!(Cell::Alive.as_byte(), 1);
        assert_eq!(std::mem::size_of::<Cell>(), 1);
    }

    #[test]
    fn from_byte_rejects_other_values() {
        assert_eq!(Cell::from_byte(0), Some(Cell::Dead));
        assert_eq!(Cell::from_byte(1), Some(Cell::Alive));
        assert_eq!(Cell::from_byte(2), None);
        assert_eq!(Cell::from_byte(255), None);
    }

    #[test]
    fn rule_table() {
        for n in 0..=8u8 {
            let survives = Cell::Alive.next(n);
            let born = Cell::Dead.next(n);
            assert_eq!(survives.is_alive(), n == 2 || n == 3, "alive with {n}");
            assert_eq!(born.is_alive(), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(Cell::Dead.toggled(), Cell::Alive);
        assert_eq!(Cell::Alive.toggled(), Cell::Dead);
    }
}
