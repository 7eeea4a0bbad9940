//! Toroidal Game of Life with a zero-copy, handle-based host boundary.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Torus sub-crates. Depend on this crate for the full
//! library, or on individual sub-crates for finer-grained control.
//!
//! # Quick start
//!
//! ```rust
//! use torus::prelude::*;
//!
//! let mut registry = Registry::new();
//! let handle = registry.create(8, 8, SeedRule::Interference).unwrap();
//!
//! registry.tick(handle).unwrap();
//! let view = registry.cells(handle).unwrap();
//! assert_eq!(view.len(), 64);
//!
//! registry.dispose(handle).unwrap();
//! assert!(registry.tick(handle).is_err());
//! ```
//!
//! # Crate organization
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `torus-core` | `Cell`, `GridError`, `HandleId`, `SeedRule`, `GridConfig` |
//! | [`engine`] | `torus-engine` | `Grid`, `CellsView` |
//! | [`ffi`] | `torus-ffi` | `Registry`, `TorusStatus`, exported C functions |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: cells, errors, handles, seed rules, configuration.
pub mod types {
    pub use torus_core::*;
}

/// The automaton engine.
pub mod engine {
    pub use torus_engine::{neighbourhood, CellsView, Grid};
}

/// The host boundary: registry, status codes, and exported functions.
pub mod ffi {
    pub use torus_ffi::*;
}

/// Common imports for typical usage.
///
/// ```rust
/// use torus::prelude::*;
/// ```
pub mod prelude {
    pub use torus_core::{Cell, GridConfig, GridError, HandleId, SeedRule};
    pub use torus_engine::{CellsView, Grid};
    pub use torus_ffi::{Registry, TorusError, TorusStatus};
}
