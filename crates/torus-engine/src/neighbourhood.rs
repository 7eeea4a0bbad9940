//! 8-connected toroidal neighbourhood (cardinal + diagonal).
//!
//! Each axis is stepped by the forward deltas `[len - 1, 0, 1]` modulo
//! `len`, and the pair `(0, 0)` is skipped. On axes of length three or
//! more this is the usual eight distinct neighbours. On length 2 both
//! off-axis deltas reach the same cell, which is then counted twice. On
//! length 1 the deltas are `[0, 0, 1]`: the `0` steps coincide with the
//! skipped centre, so a cell on a single-row or single-column torus
//! wraps onto itself exactly once and an isolated live cell still dies.

use smallvec::SmallVec;

/// Forward deltas along an axis of length `len`: previous, same, next.
fn axis_deltas(len: u32) -> [u32; 3] {
    [len - 1, 0, 1]
}

/// Step `pos` forward by `delta` on an axis of length `len`.
fn step(pos: u32, delta: u32, len: u32) -> u32 {
    // The sum is computed in u64 and reduced below len, so it fits in u32.
    ((u64::from(pos) + u64::from(delta)) % u64::from(len)) as u32
}

/// Visit every neighbour of `(row, col)` with multiplicity.
fn for_each_neighbour(row: u32, col: u32, width: u32, height: u32, mut f: impl FnMut(u32, u32)) {
    for dr in axis_deltas(height) {
        for dc in axis_deltas(width) {
            if dr == 0 && dc == 0 {
                continue;
            }
            f(step(row, dr, height), step(col, dc, width));
        }
    }
}

/// Toroidal `(row, col)` neighbours of an in-bounds cell.
///
/// Eight entries when both dimensions are at least 2; fewer on a
/// dimension of 1, where the self-wrap appears once per remaining delta.
pub fn neighbours(row: u32, col: u32, width: u32, height: u32) -> SmallVec<[(u32, u32); 8]> {
    let mut out = SmallVec::new();
    for_each_neighbour(row, col, width, height, |r, c| out.push((r, c)));
    out
}

/// Number of live neighbours of `(row, col)` in a row-major byte buffer.
pub(crate) fn live_count(cells: &[u8], row: u32, col: u32, width: u32, height: u32) -> u8 {
    let mut count = 0u8;
    for_each_neighbour(row, col, width, height, |r, c| {
        count += cells[r as usize * width as usize + c as usize];
    });
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_cell_has_adjacent_neighbours() {
        let n = neighbours(2, 2, 5, 5);
        assert_eq!(n.len(), 8);
        for (r, c) in n {
            assert!((1..=3).contains(&r) && (1..=3).contains(&c));
            assert_ne!((r, c), (2, 2));
        }
    }

    #[test]
    fn corner_wraps_to_opposite_edges() {
        let mut n = neighbours(0, 0, 4, 3).into_vec();
        n.sort_unstable();
        assert_eq!(
            n,
            vec![(0, 1), (0, 3), (1, 0), (1, 1), (1, 3), (2, 0), (2, 1), (2, 3)]
        );
    }

    #[test]
    fn two_wide_axis_counts_the_other_column_twice() {
        // 2x3: the only other column is both west and east.
        let cells = [0u8, 1, 0, 0, 0, 0];
        assert_eq!(live_count(&cells, 0, 0, 2, 3), 2);
    }

    #[test]
    fn single_cell_torus_wraps_onto_itself() {
        let n = neighbours(0, 0, 1, 1);
        assert_eq!(n.len(), 5);
        assert!(n.iter().all(|&rc| rc == (0, 0)));
        assert_eq!(live_count(&[1], 0, 0, 1, 1), 5);
        assert_eq!(live_count(&[0], 0, 0, 1, 1), 0);
    }

    #[test]
    fn single_row_counts_self_once() {
        let cells = [0u8, 0, 1, 0, 0];
        assert_eq!(neighbours(0, 2, 5, 1).len(), 7);
        assert_eq!(live_count(&cells, 0, 2, 5, 1), 1);
        // Same-row neighbours are reached by three row deltas each.
        assert_eq!(live_count(&cells, 0, 1, 5, 1), 3);
    }

    #[test]
    fn single_column_counts_self_once() {
        let cells = [0u8, 0, 1, 0, 0];
        assert_eq!(live_count(&cells, 2, 0, 1, 5), 1);
    }

    #[test]
    fn live_count_sees_across_edges() {
        // 3x3, only the bottom-right corner alive.
        let mut cells = [0u8; 9];
        cells[8] = 1;
        assert_eq!(live_count(&cells, 0, 0, 3, 3), 1);
        assert_eq!(live_count(&cells, 8 / 3, 8 % 3, 3, 3), 0);
    }
}
