//! Core types for the Torus cellular automaton.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the engine and the boundary layer: the
//! single-byte [`Cell`], the [`GridError`] kinds, the opaque
//! [`HandleId`], initial-state [`SeedRule`]s, and the validated
//! [`GridConfig`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod config;
pub mod error;
pub mod id;
pub mod seed;

pub use cell::Cell;
pub use config::GridConfig;
pub use error::GridError;
pub use id::HandleId;
pub use seed::SeedRule;
