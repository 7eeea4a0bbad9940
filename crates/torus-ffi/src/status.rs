//! C-compatible status codes.
//!
//! [`TorusStatus`] is a `repr(i32)` enum covering every failure the
//! boundary can report. Conversions from [`GridError`] and
//! [`TorusError`] are provided.

use torus_core::GridError;

use crate::registry::TorusError;

/// C-compatible status code returned by fallible FFI functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TorusStatus {
    /// Success.
    Ok = 0,
    /// Handle is unknown, disposed, or forged.
    InvalidHandle = -1,
    /// Width or height is zero.
    InvalidDimensions = -2,
    /// Seed pattern length is not `width * height`.
    SeedLengthMismatch = -3,
    /// Row or column outside the grid.
    IndexOutOfBounds = -4,
    /// Null out-pointer, unknown seed rule, or invalid cell byte/density.
    InvalidArgument = -5,
    /// Caller-provided buffer is too small.
    BufferTooSmall = -6,
    /// `width * height` exceeds `u32::MAX`.
    CellCountOverflow = -7,
    /// Internal error.
    InternalError = -20,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&GridError> for TorusStatus {
    fn from(e: &GridError) -> Self {
        match e {
            GridError::InvalidDimensions { .. } => TorusStatus::InvalidDimensions,
            GridError::SeedLengthMismatch { .. } => TorusStatus::SeedLengthMismatch,
            GridError::IndexOutOfBounds { .. } => TorusStatus::IndexOutOfBounds,
            GridError::InvalidCellState { .. } => TorusStatus::InvalidArgument,
            GridError::InvalidDensity { .. } => TorusStatus::InvalidArgument,
            GridError::CellCountOverflow { .. } => TorusStatus::CellCountOverflow,
        }
    }
}

impl From<&TorusError> for TorusStatus {
    fn from(e: &TorusError) -> Self {
        match e {
            TorusError::InvalidHandle(_) => TorusStatus::InvalidHandle,
            TorusError::Grid(g) => TorusStatus::from(g),
            TorusError::UnknownSeedRule(_) => TorusStatus::InvalidArgument,
        }
    }
}

impl<T> From<Result<T, TorusError>> for TorusStatus {
    fn from(r: Result<T, TorusError>) -> Self {
        match r {
            Ok(_) => TorusStatus::Ok,
            Err(e) => TorusStatus::from(&e),
        }
    }
}
