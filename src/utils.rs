//! Assorted utilities and helpers.

/// Default cap on the number of distinct strings any enumeration cell may hold.
///
/// Used by [`crate::builder::SolverBuilder`] when no explicit limit is given.
pub const DEFAULT_MAX_SOLUTIONS: usize = 1 << 20;

/// Position of cell `(i, j)` in a row-major grid with `cols` columns.
#[inline]
pub fn cell_index(i: usize, j: usize, cols: usize) -> usize {
    i * cols + j
}
