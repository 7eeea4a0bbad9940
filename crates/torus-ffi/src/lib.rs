//! Scalar-only boundary layer for the Torus engine.
//!
//! Hosts (a JavaScript embedder over wasm, or C) never see a Rust object.
//! They hold a `u32` handle naming a registry entry, call exported
//! functions with scalars, and read cells through a raw address into the
//! grid's published buffer. This crate is the only one in the workspace
//! that contains `unsafe` code, confined to writing through caller
//! out-pointers.
//!
//! # Safe-usage contract for the cell view
//!
//! After `torus_cells_get` (or `torus_cells_ptr` + `torus_cells_len`) the
//! host may build a byte view over `[address, address + length)`. That
//! view must be rebuilt after every `torus_tick`, `torus_tick_n`,
//! `torus_set_cell`, `torus_toggle_cell`, `torus_reset`, and must be
//! dropped at `torus_dispose`. The address does not move while the grid
//! lives, but the re-fetch discipline is the contract.
//!
//! # Threading
//!
//! The process-wide registry sits behind a `Mutex`, so concurrent calls
//! are serialized. A view handed out by `torus_cells_get` is invalidated
//! the instant another thread ticks or disposes the same handle.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run an FFI body, converting a panic into `fallback`.
///
/// `return` inside the body returns from the guarded closure.
macro_rules! ffi_guard_or {
    ($fallback:expr, $body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(_) => {
                tracing::error!("panic caught at FFI boundary");
                $fallback
            }
        }
    };
}

/// Run an FFI body returning a status code; a panic becomes `Panicked`.
macro_rules! ffi_guard {
    ($body:block) => {
        ffi_guard_or!($crate::status::TorusStatus::Panicked as i32, $body)
    };
}

/// Lock the registry. A poisoned lock means a mutation was interrupted
/// mid-way, so the registry can no longer be trusted: abort.
macro_rules! ffi_lock {
    ($mutex:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(_) => {
                tracing::error!("grid registry lock poisoned, aborting");
                std::process::abort()
            }
        }
    };
}

pub mod grid;
mod handle;
pub mod registry;
pub mod status;

pub use registry::{Registry, TorusError};
pub use status::TorusStatus;
pub use torus_core::{Cell, GridError, HandleId, SeedRule};
