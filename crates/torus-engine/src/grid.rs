//! The automaton grid and its generation transition.

use smallvec::SmallVec;
use torus_core::{Cell, GridConfig, GridError, SeedRule};

use crate::neighbourhood;
use crate::view::CellsView;

/// A fixed-size toroidal Game of Life grid.
///
/// Cells are stored row-major (`index = row * width + col`), one byte per
/// cell. Width and height are immutable after construction and neither
/// buffer is ever resized, so the published buffer's address is stable
/// for the grid's whole lifetime.
#[derive(Clone, Debug)]
pub struct Grid {
    width: u32,
    height: u32,
    /// Current generation; the only buffer exposed to readers.
    published: Vec<u8>,
    /// Next generation under construction during `tick()`.
    staging: Vec<u8>,
    /// Ticks applied since construction or the last `reset()`.
    generation: u64,
}

impl Grid {
    /// Create a `width x height` grid initialised by `seed`.
    ///
    /// Fails with [`GridError::InvalidDimensions`] if either dimension is
    /// zero and with [`GridError::SeedLengthMismatch`] if a pattern seed
    /// does not hold exactly `width * height` cells.
    pub fn new(width: u32, height: u32, seed: SeedRule) -> Result<Self, GridError> {
        Self::from_config(&GridConfig::new(width, height, seed))
    }

    /// Create a grid from a [`GridConfig`], validating it first.
    pub fn from_config(config: &GridConfig) -> Result<Self, GridError> {
        let cell_count = config.validate()?;
        let mut published = vec![Cell::Dead.as_byte(); cell_count];
        config.seed.fill(&mut published)?;
        tracing::debug!(
            width = config.width,
            height = config.height,
            cells = cell_count,
            "grid created"
        );
        Ok(Self {
            width: config.width,
            height: config.height,
            published,
            staging: vec![Cell::Dead.as_byte(); cell_count],
            generation: 0,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells (`width * height`).
    pub fn cell_count(&self) -> usize {
        self.published.len()
    }

    /// Ticks applied since construction or the last [`reset`](Self::reset).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Borrowed, zero-copy view of the current generation.
    ///
    /// Valid until the next mutating call on this grid.
    pub fn cells(&self) -> CellsView<'_> {
        CellsView::new(&self.published, self.width, self.height)
    }

    /// Start address of the published buffer.
    ///
    /// Stable for the grid's lifetime, but readers must still re-fetch
    /// after each mutating call; see [`CellsView`].
    pub fn cells_ptr(&self) -> *const u8 {
        self.published.as_ptr()
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells().live_count()
    }

    fn check_bounds(&self, row: u32, col: u32) -> Result<usize, GridError> {
        if row >= self.height || col >= self.width {
            return Err(GridError::IndexOutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(row as usize * self.width as usize + col as usize)
    }

    /// State of the cell at `(row, col)`.
    pub fn get_cell(&self, row: u32, col: u32) -> Result<Cell, GridError> {
        let idx = self.check_bounds(row, col)?;
        Ok(Cell::from(self.published[idx] != 0))
    }

    /// Set the cell at `(row, col)`.
    ///
    /// Fails with [`GridError::IndexOutOfBounds`] and leaves the grid
    /// unmodified if `row >= height` or `col >= width`.
    pub fn set_cell(&mut self, row: u32, col: u32, state: Cell) -> Result<(), GridError> {
        let idx = self.check_bounds(row, col)?;
        self.published[idx] = state.as_byte();
        Ok(())
    }

    /// Flip the cell at `(row, col)` and return its new state.
    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<Cell, GridError> {
        let idx = self.check_bounds(row, col)?;
        let next = Cell::from(self.published[idx] != 0).toggled();
        self.published[idx] = next.as_byte();
        Ok(next)
    }

    /// Set every listed cell to `state`. All-or-nothing: if any
    /// coordinate is out of bounds, no cell is changed.
    pub fn set_cells(&mut self, coords: &[(u32, u32)], state: Cell) -> Result<(), GridError> {
        let indices = coords
            .iter()
            .map(|&(row, col)| self.check_bounds(row, col))
            .collect::<Result<Vec<_>, _>>()?;
        for idx in indices {
            self.published[idx] = state.as_byte();
        }
        Ok(())
    }

    /// Re-seed in place and restart the generation counter.
    ///
    /// Validated exactly like construction; on error the grid is
    /// unchanged. The buffer is overwritten, never reallocated.
    pub fn reset(&mut self, seed: &SeedRule) -> Result<(), GridError> {
        seed.fill(&mut self.published)?;
        self.generation = 0;
        tracing::debug!(width = self.width, height = self.height, "grid reset");
        Ok(())
    }

    /// Toroidal neighbours of `(row, col)`.
    pub fn neighbours(&self, row: u32, col: u32) -> Result<SmallVec<[(u32, u32); 8]>, GridError> {
        self.check_bounds(row, col)?;
        Ok(neighbourhood::neighbours(row, col, self.width, self.height))
    }

    /// Live neighbours of `(row, col)` in the current generation.
    pub fn live_neighbours(&self, row: u32, col: u32) -> Result<u8, GridError> {
        self.check_bounds(row, col)?;
        Ok(neighbourhood::live_count(
            &self.published,
            row,
            col,
            self.width,
            self.height,
        ))
    }

    /// Advance one generation under B3/S23.
    ///
    /// The next generation is computed wholly into the staging buffer from
    /// the published one, then copied back, so every cell sees only the
    /// previous generation.
    pub fn tick(&mut self) {
        let _span = tracing::trace_span!(
            "tick",
            width = self.width,
            height = self.height,
            generation = self.generation
        )
        .entered();

        let width = self.width as usize;
        for row in 0..self.height {
            for col in 0..self.width {
                let idx = row as usize * width + col as usize;
                let live = neighbourhood::live_count(
                    &self.published,
                    row,
                    col,
                    self.width,
                    self.height,
                );
                let cell = Cell::from(self.published[idx] != 0);
                self.staging[idx] = cell.next(live).as_byte();
            }
        }
        self.published.copy_from_slice(&self.staging);
        self.generation += 1;
    }

    /// Advance `n` generations.
    pub fn tick_n(&mut self, n: u64) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Render as text: one line per row, `◼` alive, `◻` dead.
    pub fn render(&self) -> String {
        self.to_string()
    }
}
