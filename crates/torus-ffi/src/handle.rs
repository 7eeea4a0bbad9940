//! Owning handle table for FFI lifetime management.
//!
//! Handles are minted from a monotonically increasing `u32` counter and
//! are keys, not addresses. A disposed handle resolves to `None` instead
//! of another grid's memory, and double-remove is a safe `None`.

use indexmap::IndexMap;
use torus_core::HandleId;

/// A handle table mapping [`HandleId`]s to owned values.
///
/// The counter starts at 1 (0 is the reserved null handle) and wraps from
/// `u32::MAX` back to 1. After wrapping, ids that are still live are
/// skipped, so a handle is never re-issued while its entry exists.
pub(crate) struct HandleTable<T> {
    entries: IndexMap<u32, T>,
    next: u32,
}

impl<T> HandleTable<T> {
    /// Create an empty handle table.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            next: 1,
        }
    }

    fn advance(&mut self) -> u32 {
        let id = self.next;
        self.next = if id == u32::MAX { 1 } else { id + 1 };
        id
    }

    /// Insert a value and return its freshly minted handle.
    pub fn insert(&mut self, value: T) -> HandleId {
        // Terminates: there is always a vacant id while fewer than
        // u32::MAX entries are live.
        let mut id = self.advance();
        while self.entries.contains_key(&id) {
            id = self.advance();
        }
        self.entries.insert(id, value);
        HandleId(id)
    }

    /// Immutable reference to the value behind a handle.
    pub fn get(&self, handle: HandleId) -> Option<&T> {
        self.entries.get(&handle.0)
    }

    /// Mutable reference to the value behind a handle.
    pub fn get_mut(&mut self, handle: HandleId) -> Option<&mut T> {
        self.entries.get_mut(&handle.0)
    }

    /// Remove the value behind a handle, returning it.
    ///
    /// Returns `None` for unknown or already-removed handles.
    pub fn remove(&mut self, handle: HandleId) -> Option<T> {
        self.entries.shift_remove(&handle.0)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Live handles in creation order.
    pub fn handles(&self) -> impl Iterator<Item = HandleId> + '_ {
        self.entries.keys().map(|&id| HandleId(id))
    }

    /// Drop every entry. The counter keeps advancing so old handles stay dead.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
