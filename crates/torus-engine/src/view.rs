//! Borrowed, read-only view over a grid's published buffer.
//!
//! A [`CellsView`] borrows the [`Grid`](crate::Grid) it came from, so the
//! borrow checker rejects any attempt to keep it across `tick`,
//! `set_cell`, `reset`, or drop. Hosts that cannot express lifetimes get
//! the same bytes through a raw address and must re-fetch after every
//! mutating call instead.

use torus_core::Cell;

/// Zero-copy view of a grid generation.
#[derive(Clone, Copy, Debug)]
pub struct CellsView<'a> {
    bytes: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> CellsView<'a> {
    pub(crate) fn new(bytes: &'a [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(bytes.len(), width as usize * height as usize);
        Self {
            bytes,
            width,
            height,
        }
    }

    /// Row-major cell bytes (`0 = Dead`, `1 = Alive`).
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Start address of the buffer.
    pub fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }

    /// Number of cells (equal to the byte length).
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`: grids have at least one cell.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Grid width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cell at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: u32, col: u32) -> Option<Cell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let idx = row as usize * self.width as usize + col as usize;
        Some(Cell::from(self.bytes[idx] != 0))
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + 'a {
        self.bytes.iter().map(|&b| Cell::from(b != 0))
    }

    /// One byte slice per row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> + 'a {
        self.bytes.chunks(self.width as usize)
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.bytes.iter().filter(|&&b| b != 0).count()
    }

    /// `(row, col)` of every live cell, row-major.
    pub fn live_cells(&self) -> Vec<(u32, u32)> {
        let width = self.width as usize;
        self.bytes
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b != 0)
            .map(|(i, _)| ((i / width) as u32, (i % width) as u32))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_rows() {
        let bytes = [0u8, 1, 0, 1, 1, 0];
        let view = CellsView::new(&bytes, 3, 2);
        assert_eq!(view.get(0, 1), Some(Cell::Alive));
        assert_eq!(view.get(1, 2), Some(Cell::Dead));
        assert_eq!(view.get(2, 0), None);
        assert_eq!(view.get(0, 3), None);
        let rows: Vec<&[u8]> = view.rows().collect();
        assert_eq!(rows, vec![&[0u8, 1, 0][..], &[1u8, 1, 0][..]]);
        assert_eq!(view.live_count(), 3);
        assert_eq!(view.live_cells(), vec![(0, 1), (1, 0), (1, 1)]);
    }
}
