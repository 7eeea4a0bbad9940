//! Double-buffered toroidal Game of Life engine.
//!
//! [`Grid`] owns the live cell buffer and the transition function. It
//! knows nothing about hosts or handles; the boundary layer in
//! `torus-ffi` wraps it.
//!
//! # Buffer layout
//!
//! ```text
//! Grid
//! ├── published: Vec<u8>  ←─── read by the host, address fixed for life
//! └── staging:   Vec<u8>  ←─── next generation is computed here
//! ```
//!
//! `tick()` reads only `published` and writes only `staging`, then copies
//! `staging` back over `published`. No cell ever observes a neighbour's
//! already-updated value, and the published allocation never moves.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod neighbourhood;
mod render;
pub mod view;

pub use grid::Grid;
pub use view::CellsView;

pub use torus_core::{Cell, GridConfig, GridError, SeedRule};
