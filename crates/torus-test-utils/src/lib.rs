//! Test utilities for Torus development.
//!
//! Provides canonical still lifes, oscillators, and spaceships as
//! coordinate lists, helpers to stamp them into [`SeedRule::Pattern`]
//! seeds, and a one-shot tracing subscriber for tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::Once;

use torus_core::SeedRule;
use tracing_subscriber::EnvFilter;

pub use fixtures::{BLINKER, BLOCK, GLIDER, SINGLE};

/// Row-major bytes for a `width x height` grid with `coords` alive,
/// each shifted by `origin` and wrapped onto the torus.
pub fn pattern_bytes(
    width: u32,
    height: u32,
    coords: &[(u32, u32)],
    origin: (u32, u32),
) -> Vec<u8> {
    let mut bytes = vec![0u8; width as usize * height as usize];
    for &(r, c) in coords {
        let row = (r + origin.0) % height;
        let col = (c + origin.1) % width;
        bytes[row as usize * width as usize + col as usize] = 1;
    }
    bytes
}

/// A [`SeedRule::Pattern`] stamping `coords` at `origin`.
pub fn pattern(width: u32, height: u32, coords: &[(u32, u32)], origin: (u32, u32)) -> SeedRule {
    SeedRule::Pattern(pattern_bytes(width, height, coords, origin))
}

/// `(row, col)` of every live byte, row-major.
pub fn live_coords(bytes: &[u8], width: u32) -> Vec<(u32, u32)> {
    let width = width as usize;
    bytes
        .iter()
        .enumerate()
        .filter(|&(_, &b)| b != 0)
        .map(|(i, _)| ((i / width) as u32, (i % width) as u32))
        .collect()
}

static TRACING: Once = Once::new();

/// Install a test-writer `fmt` subscriber filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
