//! Explicit registry context: the safe Rust face of the boundary layer.
//!
//! [`Registry`] exclusively owns every grid it creates. Callers get a
//! [`HandleId`] capability, never the grid itself. The exported C
//! functions delegate to one process-wide instance, but tests and Rust
//! embedders can hold as many independent registries as they like.

use std::error::Error;
use std::fmt;

use torus_core::{Cell, GridError, HandleId, SeedRule};
use torus_engine::{CellsView, Grid};

use crate::handle::HandleTable;

/// Errors from registry operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TorusError {
    /// The handle is unknown, disposed, or forged.
    InvalidHandle(HandleId),
    /// The grid rejected the operation.
    Grid(GridError),
    /// A scalar seed rule id with no corresponding rule.
    UnknownSeedRule(u32),
}

impl fmt::Display for TorusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHandle(h) => write!(f, "invalid grid handle {h}"),
            Self::Grid(e) => write!(f, "{e}"),
            Self::UnknownSeedRule(id) => write!(f, "unknown seed rule id {id}"),
        }
    }
}

impl Error for TorusError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for TorusError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Owning registry of grids addressed by opaque handles.
pub struct Registry {
    grids: HandleTable<Grid>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            grids: HandleTable::new(),
        }
    }

    /// Build a grid and register it under a fresh handle.
    pub fn create(
        &mut self,
        width: u32,
        height: u32,
        seed: SeedRule,
    ) -> Result<HandleId, TorusError> {
        let grid = Grid::new(width, height, seed)?;
        let handle = self.grids.insert(grid);
        tracing::debug!(handle = handle.0, width, height, "grid registered");
        Ok(handle)
    }

    /// [`create`](Self::create) with a scalar seed rule id.
    pub fn create_from_rule_id(
        &mut self,
        width: u32,
        height: u32,
        rule_id: u32,
    ) -> Result<HandleId, TorusError> {
        let seed = SeedRule::from_id(rule_id).ok_or(TorusError::UnknownSeedRule(rule_id))?;
        self.create(width, height, seed)
    }

    /// Resolve a handle to its grid.
    pub fn grid(&self, handle: HandleId) -> Result<&Grid, TorusError> {
        self.grids.get(handle).ok_or_else(|| {
            tracing::warn!(handle = handle.0, "invalid grid handle");
            TorusError::InvalidHandle(handle)
        })
    }

    fn grid_mut(&mut self, handle: HandleId) -> Result<&mut Grid, TorusError> {
        self.grids.get_mut(handle).ok_or_else(|| {
            tracing::warn!(handle = handle.0, "invalid grid handle");
            TorusError::InvalidHandle(handle)
        })
    }

    /// Advance one generation.
    pub fn tick(&mut self, handle: HandleId) -> Result<(), TorusError> {
        self.grid_mut(handle)?.tick();
        Ok(())
    }

    /// Advance `n` generations.
    pub fn tick_n(&mut self, handle: HandleId, n: u64) -> Result<(), TorusError> {
        self.grid_mut(handle)?.tick_n(n);
        Ok(())
    }

    /// Grid width.
    pub fn width(&self, handle: HandleId) -> Result<u32, TorusError> {
        Ok(self.grid(handle)?.width())
    }

    /// Grid height.
    pub fn height(&self, handle: HandleId) -> Result<u32, TorusError> {
        Ok(self.grid(handle)?.height())
    }

    /// Ticks applied since creation or the last reset.
    pub fn generation(&self, handle: HandleId) -> Result<u64, TorusError> {
        Ok(self.grid(handle)?.generation())
    }

    /// Number of live cells.
    pub fn live_count(&self, handle: HandleId) -> Result<usize, TorusError> {
        Ok(self.grid(handle)?.live_count())
    }

    /// Borrowed view of the current generation.
    ///
    /// The borrow of `self` ends the view before any further mutation.
    pub fn cells(&self, handle: HandleId) -> Result<CellsView<'_>, TorusError> {
        Ok(self.grid(handle)?.cells())
    }

    /// Start address and byte length of the published buffer.
    ///
    /// Raw form of [`cells`](Self::cells) for hosts that can only hold
    /// scalars. The address must be re-fetched after every mutating call.
    pub fn cells_ptr(&self, handle: HandleId) -> Result<(*const u8, u32), TorusError> {
        let grid = self.grid(handle)?;
        // Construction rejects cell counts above u32::MAX.
        let len = u32::try_from(grid.cell_count()).map_err(|_| GridError::CellCountOverflow {
            width: grid.width(),
            height: grid.height(),
        })?;
        Ok((grid.cells_ptr(), len))
    }

    /// State of one cell.
    pub fn get_cell(&self, handle: HandleId, row: u32, col: u32) -> Result<Cell, TorusError> {
        Ok(self.grid(handle)?.get_cell(row, col)?)
    }

    /// Set one cell. Out-of-range coordinates leave the grid unmodified.
    pub fn set_cell(
        &mut self,
        handle: HandleId,
        row: u32,
        col: u32,
        state: Cell,
    ) -> Result<(), TorusError> {
        Ok(self.grid_mut(handle)?.set_cell(row, col, state)?)
    }

    /// Flip one cell, returning its new state.
    pub fn toggle_cell(&mut self, handle: HandleId, row: u32, col: u32) -> Result<Cell, TorusError> {
        Ok(self.grid_mut(handle)?.toggle_cell(row, col)?)
    }

    /// Re-seed a grid in place.
    pub fn reset(&mut self, handle: HandleId, seed: &SeedRule) -> Result<(), TorusError> {
        self.grid_mut(handle)?.reset(seed)?;
        tracing::debug!(handle = handle.0, "grid reseeded");
        Ok(())
    }

    /// Text rendering of the current generation.
    pub fn render(&self, handle: HandleId) -> Result<String, TorusError> {
        Ok(self.grid(handle)?.render())
    }

    /// Remove a grid and release its memory.
    ///
    /// Every later call with this handle, including another `dispose`,
    /// fails with [`TorusError::InvalidHandle`] and touches nothing else.
    pub fn dispose(&mut self, handle: HandleId) -> Result<(), TorusError> {
        match self.grids.remove(handle) {
            Some(_) => {
                tracing::debug!(handle = handle.0, "grid disposed");
                Ok(())
            }
            None => {
                tracing::warn!(handle = handle.0, "dispose of invalid grid handle");
                Err(TorusError::InvalidHandle(handle))
            }
        }
    }

    /// Dispose every grid.
    pub fn dispose_all(&mut self) {
        tracing::debug!(count = self.grids.len(), "disposing all grids");
        self.grids.clear();
    }

    /// Live handles in creation order.
    pub fn live_handles(&self) -> Vec<HandleId> {
        self.grids.handles().collect()
    }

    /// Number of live grids.
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    /// Whether no grids are live.
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}
