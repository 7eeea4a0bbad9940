//! Grid lifecycle FFI: create, tick, inspect, edit, render, dispose.
//!
//! Every function takes and returns scalars only. Fallible operations
//! return a [`TorusStatus`] code; convenience getters that return the
//! value directly fall back to 0 (or null) on an invalid handle and each
//! has a `_get` twin with explicit status.

use std::sync::{LazyLock, Mutex};

use torus_core::{Cell, GridError, HandleId, SeedRule};

use crate::registry::{Registry, TorusError};
use crate::status::TorusStatus;

static GRIDS: LazyLock<Mutex<Registry>> = LazyLock::new(|| Mutex::new(Registry::new()));

/// The process-wide registry behind the exported functions.
pub fn registry() -> &'static Mutex<Registry> {
    &GRIDS
}

fn status<T>(result: Result<T, TorusError>) -> i32 {
    TorusStatus::from(result) as i32
}

#[allow(unsafe_code)]
fn create_into(out: *mut u32, width: u32, height: u32, seed: SeedRule) -> i32 {
    if out.is_null() {
        return TorusStatus::InvalidArgument as i32;
    }
    match ffi_lock!(GRIDS).create(width, height, seed) {
        Ok(handle) => {
            // SAFETY: out is non-null and valid per caller contract.
            unsafe { *out = handle.0 };
            TorusStatus::Ok as i32
        }
        Err(e) => TorusStatus::from(&e) as i32,
    }
}

/// Create a grid seeded by a scalar rule id (see [`SeedRule::from_id`]).
///
/// Returns the new handle, or 0 on any failure. Prefer
/// [`torus_create_get`] to learn why a creation failed.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn torus_create(width: u32, height: u32, seed_rule_id: u32) -> u32 {
    ffi_guard_or!(0, {
        ffi_lock!(GRIDS)
            .create_from_rule_id(width, height, seed_rule_id)
            .map_or(0, |h| h.0)
    })
}

/// Create a grid seeded by a scalar rule id, with explicit status.
///
/// On success writes the handle to `*handle_out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn torus_create_get(
    width: u32,
    height: u32,
    seed_rule_id: u32,
    handle_out: *mut u32,
) -> i32 {
    ffi_guard!({
        let seed = match SeedRule::from_id(seed_rule_id) {
            Some(s) => s,
            None => return TorusStatus::InvalidArgument as i32,
        };
        create_into(handle_out, width, height, seed)
    })
}

/// Create a grid from `len` row-major bytes (each 0 or 1).
///
/// `bytes` may be null only when `len == 0`. The bytes are copied; the
/// caller keeps ownership of its buffer.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn torus_create_from_pattern(
    width: u32,
    height: u32,
    bytes: *const u8,
    len: usize,
    handle_out: *mut u32,
) -> i32 {
    ffi_guard!({
        let pattern = if len == 0 {
            Vec::new()
        } else {
            if bytes.is_null() {
                return TorusStatus::InvalidArgument as i32;
            }
            // SAFETY: bytes points to len readable bytes per caller contract.
            unsafe { std::slice::from_raw_parts(bytes, len) }.to_vec()
        };
        create_into(handle_out, width, height, SeedRule::Pattern(pattern))
    })
}

/// Create a grid with each cell alive with probability
/// `density_percent / 100`, deterministic in `seed`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn torus_create_random(
    width: u32,
    height: u32,
    seed: u64,
    density_percent: u8,
    handle_out: *mut u32,
) -> i32 {
    ffi_guard!({
        create_into(
            handle_out,
            width,
            height,
            SeedRule::Random {
                seed,
                density_percent,
            },
        )
    })
}

/// Advance one generation.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn torus_tick(handle: u32) -> i32 {
    ffi_guard!({ status(ffi_lock!(GRIDS).tick(HandleId(handle))) })
}

/// Advance `n` generations.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn torus_tick_n(handle: u32, n: u32) -> i32 {
    ffi_guard!({ status(ffi_lock!(GRIDS).tick_n(HandleId(handle), u64::from(n))) })
}

/// Grid width.
///
/// **Ambiguity warning:** returns 0 for an invalid handle. Prefer
/// [`torus_width_get`] for unambiguous error detection.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn torus_width(handle: u32) -> u32 {
    ffi_guard_or!(0, { ffi_lock!(GRIDS).width(HandleId(handle)).unwrap_or(0) })
}

/// Grid width with explicit error reporting.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn torus_width_get(handle: u32, out: *mut u32) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return TorusStatus::InvalidArgument as i32;
        }
        match ffi_lock!(GRIDS).width(HandleId(handle)) {
            Ok(w) => {
                // SAFETY: out is non-null and valid per caller contract.
                unsafe { *out = w };
                TorusStatus::Ok as i32
            }
            Err(e) => TorusStatus::from(&e) as i32,
        }
    })
}

/// Grid height.
///
/// **Ambiguity warning:** returns 0 for an invalid handle. Prefer
/// [`torus_height_get`] for unambiguous error detection.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn torus_height(handle: u32) -> u32 {
    ffi_guard_or!(0, { ffi_lock!(GRIDS).height(HandleId(handle)).unwrap_or(0) })
}

/// Grid height with explicit error reporting.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn torus_height_get(handle: u32, out: *mut u32) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return TorusStatus::InvalidArgument as i32;
        }
        match ffi_lock!(GRIDS).height(HandleId(handle)) {
            Ok(h) => {
                // SAFETY: out is non-null and valid per caller contract.
                unsafe { *out = h };
                TorusStatus::Ok as i32
            }
            Err(e) => TorusStatus::from(&e) as i32,
        }
    })
}

/// Ticks applied since creation or the last reset.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn torus_generation_get(handle: u32, out: *mut u64) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return TorusStatus::InvalidArgument as i32;
        }
        match ffi_lock!(GRIDS).generation(HandleId(handle)) {
            Ok(g) => {
                // SAFETY: out is non-null and valid per caller contract.
                unsafe { *out = g };
                TorusStatus::Ok as i32
            }
            Err(e) => TorusStatus::from(&e) as i32,
        }
    })
}

/// Number of live cells.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn torus_live_count_get(handle: u32, out: *mut u32) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return TorusStatus::InvalidArgument as i32;
        }
        match ffi_lock!(GRIDS).live_count(HandleId(handle)) {
            Ok(n) => {
                // Bounded by the cell count, which fits u32.
                // SAFETY: out is non-null and valid per caller contract.
                unsafe { *out = n.min(u32::MAX as usize) as u32 };
                TorusStatus::Ok as i32
            }
            Err(e) => TorusStatus::from(&e) as i32,
        }
    })
}

/// Start address of the grid's cell bytes.
///
/// **Ambiguity warning:** returns null for an invalid handle. Prefer
/// [`torus_cells_get`], which reports address and length together.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn torus_cells_ptr(handle: u32) -> *const u8 {
    ffi_guard_or!(std::ptr::null(), {
        ffi_lock!(GRIDS)
            .cells_ptr(HandleId(handle))
            .map_or(std::ptr::null(), |(ptr, _)| ptr)
    })
}

/// Byte length of the grid's cell buffer (`width * height`).
///
/// **Ambiguity warning:** returns 0 for an invalid handle.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn torus_cells_len(handle: u32) -> u32 {
    ffi_guard_or!(0, {
        ffi_lock!(GRIDS)
            .cells_ptr(HandleId(handle))
            .map_or(0, |(_, len)| len)
    })
}

/// Address and byte length of the grid's live cell buffer.
///
/// The host may read `[*addr_out, *addr_out + *len_out)` as bytes
/// (`0 = dead`, `1 = alive`) until its next mutating call on this handle,
/// and must re-fetch afterwards.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn torus_cells_get(handle: u32, addr_out: *mut *const u8, len_out: *mut u32) -> i32 {
    ffi_guard!({
        if addr_out.is_null() || len_out.is_null() {
            return TorusStatus::InvalidArgument as i32;
        }
        match ffi_lock!(GRIDS).cells_ptr(HandleId(handle)) {
            Ok((ptr, len)) => {
                // SAFETY: both out-pointers are non-null and valid per caller contract.
                unsafe {
                    *addr_out = ptr;
                    *len_out = len;
                }
                TorusStatus::Ok as i32
            }
            Err(e) => TorusStatus::from(&e) as i32,
        }
    })
}

/// Read one cell into `*out` (0 or 1).
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn torus_get_cell(handle: u32, row: u32, col: u32, out: *mut u8) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return TorusStatus::InvalidArgument as i32;
        }
        match ffi_lock!(GRIDS).get_cell(HandleId(handle), row, col) {
            Ok(cell) => {
                // SAFETY: out is non-null and valid per caller contract.
                unsafe { *out = cell.as_byte() };
                TorusStatus::Ok as i32
            }
            Err(e) => TorusStatus::from(&e) as i32,
        }
    })
}

/// Set one cell to `state` (0 = dead, 1 = alive).
///
/// Any other byte is `InvalidArgument`; out-of-range coordinates are
/// `IndexOutOfBounds`. Either way the grid is left unmodified.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn torus_set_cell(handle: u32, row: u32, col: u32, state: u8) -> i32 {
    ffi_guard!({
        let cell = match Cell::from_byte(state) {
            Some(c) => c,
            None => {
                return TorusStatus::from(&GridError::InvalidCellState { value: state }) as i32
            }
        };
        status(ffi_lock!(GRIDS).set_cell(HandleId(handle), row, col, cell))
    })
}

/// Flip one cell.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn torus_toggle_cell(handle: u32, row: u32, col: u32) -> i32 {
    ffi_guard!({ status(ffi_lock!(GRIDS).toggle_cell(HandleId(handle), row, col)) })
}

/// Re-seed a grid in place by scalar rule id. The buffer address is kept.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn torus_reset(handle: u32, seed_rule_id: u32) -> i32 {
    ffi_guard!({
        let seed = match SeedRule::from_id(seed_rule_id) {
            Some(s) => s,
            None => return TorusStatus::InvalidArgument as i32,
        };
        status(ffi_lock!(GRIDS).reset(HandleId(handle), &seed))
    })
}

/// Copy the UTF-8 text rendering into a caller buffer.
///
/// Always writes the required byte length to `*len_out`. Returns
/// `BufferTooSmall` without copying if `cap` is short, so a call with
/// `buf = null, cap = 0` is a size query.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn torus_render(handle: u32, buf: *mut u8, cap: usize, len_out: *mut usize) -> i32 {
    ffi_guard!({
        if len_out.is_null() {
            return TorusStatus::InvalidArgument as i32;
        }
        let text = match ffi_lock!(GRIDS).render(HandleId(handle)) {
            Ok(t) => t,
            Err(e) => return TorusStatus::from(&e) as i32,
        };
        let bytes = text.as_bytes();
        // SAFETY: len_out is non-null and valid per caller contract.
        unsafe { *len_out = bytes.len() };
        if buf.is_null() || cap < bytes.len() {
            return TorusStatus::BufferTooSmall as i32;
        }
        // SAFETY: buf points to cap >= bytes.len() writable bytes.
        unsafe { std::ptr::copy_nonoverlapping(bytes.as_ptr(), buf, bytes.len()) };
        TorusStatus::Ok as i32
    })
}

/// Dispose a grid, releasing its memory.
///
/// A second dispose of the same handle returns `InvalidHandle` and leaves
/// every other grid untouched.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn torus_dispose(handle: u32) -> i32 {
    ffi_guard!({ status(ffi_lock!(GRIDS).dispose(HandleId(handle))) })
}

/// Number of live grids in the process-wide registry.
///
/// Handles the host never disposes stay live for the process lifetime;
/// this count is how a host detects such leaks.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn torus_live_handles() -> u32 {
    ffi_guard_or!(0, { ffi_lock!(GRIDS).len().min(u32::MAX as usize) as u32 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use torus_test_utils::{live_coords, pattern_bytes, GLIDER};

    #[allow(unsafe_code)]
    fn read_cells(handle: u32) -> Vec<u8> {
        let mut ptr: *const u8 = std::ptr::null();
        let mut len: u32 = 0;
        assert_eq!(
            torus_cells_get(handle, &mut ptr, &mut len),
            TorusStatus::Ok as i32
        );
        // SAFETY: the registry guarantees [ptr, ptr + len) is the live buffer
        // and no other call on this handle runs before the copy completes.
        unsafe { std::slice::from_raw_parts(ptr, len as usize) }.to_vec()
    }

    #[test]
    fn create_tick_dispose_lifecycle() {
        let h = torus_create(8, 6, SeedRule::INTERFERENCE);
        assert_ne!(h, 0);
        assert_eq!(torus_width(h), 8);
        assert_eq!(torus_height(h), 6);
        assert_eq!(torus_cells_len(h), 48);
        assert_eq!(torus_tick(h), TorusStatus::Ok as i32);

        let mut generation = 0u64;
        assert_eq!(
            torus_generation_get(h, &mut generation),
            TorusStatus::Ok as i32
        );
        assert_eq!(generation, 1);
        assert_eq!(torus_dispose(h), TorusStatus::Ok as i32);
    }

    #[test]
    fn create_rejects_bad_input() {
        let mut h = 0u32;
        assert_eq!(torus_create(0, 5, SeedRule::ALL_DEAD), 0);
        assert_eq!(
            torus_create_get(0, 5, SeedRule::ALL_DEAD, &mut h),
            TorusStatus::InvalidDimensions as i32
        );
        assert_eq!(
            torus_create_get(5, 5, 1234, &mut h),
            TorusStatus::InvalidArgument as i32
        );
        assert_eq!(
            torus_create_get(5, 5, SeedRule::ALL_DEAD, std::ptr::null_mut()),
            TorusStatus::InvalidArgument as i32
        );
        assert_eq!(
            torus_create_random(5, 5, 1, 150, &mut h),
            TorusStatus::InvalidArgument as i32
        );
        assert_eq!(h, 0);
    }

    #[test]
    fn pattern_creation_checks_length() {
        let bytes = [1u8, 0, 1];
        let mut h = 0u32;
        assert_eq!(
            torus_create_from_pattern(2, 2, bytes.as_ptr(), bytes.len(), &mut h),
            TorusStatus::SeedLengthMismatch as i32
        );
        assert_eq!(
            torus_create_from_pattern(2, 2, std::ptr::null(), 4, &mut h),
            TorusStatus::InvalidArgument as i32
        );
        assert_eq!(h, 0);
    }

    #[test]
    fn glider_through_raw_view() {
        let bytes = pattern_bytes(6, 6, &GLIDER, (0, 0));
        let mut h = 0u32;
        assert_eq!(
            torus_create_from_pattern(6, 6, bytes.as_ptr(), bytes.len(), &mut h),
            TorusStatus::Ok as i32
        );
        assert_eq!(torus_tick_n(h, 4), TorusStatus::Ok as i32);
        assert_eq!(
            live_coords(&read_cells(h), 6),
            live_coords(&pattern_bytes(6, 6, &GLIDER, (1, 1)), 6)
        );
        torus_dispose(h);
    }

    #[test]
    fn cells_address_survives_tick() {
        let h = torus_create(10, 10, SeedRule::RANDOM);
        let before = torus_cells_ptr(h);
        assert!(!before.is_null());
        torus_tick_n(h, 3);
        assert_eq!(torus_cells_ptr(h), before);
        torus_dispose(h);
    }

    #[test]
    fn disposed_handle_is_rejected_everywhere() {
        let h = torus_create(4, 4, SeedRule::EVERY_THIRD);
        let other = torus_create(4, 4, SeedRule::EVERY_THIRD);
        let other_before = read_cells(other);

        assert_eq!(torus_dispose(h), TorusStatus::Ok as i32);
        let invalid = TorusStatus::InvalidHandle as i32;
        let mut w = 0u32;
        let mut ptr: *const u8 = std::ptr::null();
        let mut len = 0u32;
        assert_eq!(torus_tick(h), invalid);
        assert_eq!(torus_width_get(h, &mut w), invalid);
        assert_eq!(torus_height_get(h, &mut w), invalid);
        assert_eq!(torus_cells_get(h, &mut ptr, &mut len), invalid);
        assert_eq!(torus_set_cell(h, 0, 0, 1), invalid);
        assert_eq!(torus_dispose(h), invalid);
        assert_eq!(torus_dispose(h), invalid);
        assert!(torus_cells_ptr(h).is_null());
        assert_eq!(torus_width(h), 0);

        assert_eq!(read_cells(other), other_before);
        assert_eq!(torus_dispose(other), TorusStatus::Ok as i32);
    }

    #[test]
    fn set_cell_validates_state_and_bounds() {
        let h = torus_create(3, 2, SeedRule::ALL_DEAD);
        assert_eq!(
            torus_set_cell(h, 0, 0, 2),
            TorusStatus::InvalidArgument as i32
        );
        assert_eq!(
            torus_set_cell(h, 2, 0, 1),
            TorusStatus::IndexOutOfBounds as i32
        );
        assert_eq!(
            torus_set_cell(h, 0, 3, 1),
            TorusStatus::IndexOutOfBounds as i32
        );
        assert_eq!(read_cells(h), vec![0u8; 6]);

        assert_eq!(torus_set_cell(h, 1, 2, 1), TorusStatus::Ok as i32);
        let mut cell = 0u8;
        assert_eq!(torus_get_cell(h, 1, 2, &mut cell), TorusStatus::Ok as i32);
        assert_eq!(cell, 1);
        assert_eq!(torus_toggle_cell(h, 1, 2), TorusStatus::Ok as i32);
        assert_eq!(read_cells(h), vec![0u8; 6]);
        torus_dispose(h);
    }

    #[test]
    fn render_reports_required_length() {
        let h = torus_create(2, 1, SeedRule::INTERFERENCE);
        let mut len = 0usize;
        assert_eq!(
            torus_render(h, std::ptr::null_mut(), 0, &mut len),
            TorusStatus::BufferTooSmall as i32
        );
        let expected = "◼◻\n";
        assert_eq!(len, expected.len());

        let mut buf = vec![0u8; len];
        assert_eq!(
            torus_render(h, buf.as_mut_ptr(), buf.len(), &mut len),
            TorusStatus::Ok as i32
        );
        assert_eq!(std::str::from_utf8(&buf).unwrap(), expected);
        torus_dispose(h);
    }

    #[test]
    fn reset_keeps_address_and_restarts_generation() {
        let h = torus_create(5, 5, SeedRule::INTERFERENCE);
        let ptr = torus_cells_ptr(h);
        torus_tick_n(h, 2);
        assert_eq!(torus_reset(h, SeedRule::ALL_DEAD), TorusStatus::Ok as i32);
        assert_eq!(torus_reset(h, 99), TorusStatus::InvalidArgument as i32);
        assert_eq!(torus_cells_ptr(h), ptr);
        let mut live = 7u32;
        assert_eq!(torus_live_count_get(h, &mut live), TorusStatus::Ok as i32);
        assert_eq!(live, 0);
        let mut generation = 9u64;
        torus_generation_get(h, &mut generation);
        assert_eq!(generation, 0);
        torus_dispose(h);
    }

    #[test]
    fn live_handles_tracks_undisposed_grids() {
        let h = torus_create(2, 2, SeedRule::ALL_DEAD);
        assert!(torus_live_handles() >= 1);
        assert!(registry()
            .lock()
            .unwrap()
            .live_handles()
            .contains(&HandleId(h)));
        torus_dispose(h);
    }

    #[test]
    fn ffi_guard_catches_panic() {
        let status = ffi_guard!({
            panic!("deliberate test panic inside an FFI body");
        });
        assert_eq!(status, TorusStatus::Panicked as i32);
    }
}
