//! Strongly-typed registry handle.

use std::fmt;

/// Opaque identifier for a grid owned by a registry.
///
/// A handle names a registry entry; it is never a memory address, so a
/// forged value can at most name another entry the registry controls.
/// `HandleId(0)` is reserved and never minted, which lets hosts use 0 as
/// "no handle" in scalar return values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(pub u32);

impl HandleId {
    /// The reserved "no handle" value.
    pub const NULL: Self = Self(0);

    /// Whether this is the reserved null handle.
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for HandleId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl From<HandleId> for u32 {
    fn from(h: HandleId) -> Self {
        h.0
    }
}
