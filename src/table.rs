//! Dynamic-programming length table for the Longest Common Subsequence.
//!
//! `table[i][j]` holds the LCS length of `x[0..i)` and `y[0..j)`. Row and
//! column 0 are the empty-prefix base case and stay zero. The table is filled
//! once, row-major, and is read-only afterwards: both the single-solution
//! backtrack and the all-solutions enumeration walk it.

use std::fmt;

use crate::utils::cell_index;

/// Full `(|x|+1) × (|y|+1)` grid of prefix-pair LCS lengths.
///
/// Cells are stored row-major in one buffer; use [`LengthTable::get`] or
/// [`LengthTable::row`] to read them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LengthTable {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl LengthTable {
    /// Build the table for `x` against `y`.
    ///
    /// O(|x|·|y|) time and space. Empty inputs are valid and give an
    /// all-zero table.
    pub fn build(x: &[char], y: &[char]) -> Self {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("build_length_table", rows = x.len(), cols = y.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let rows = x.len() + 1;
        let cols = y.len() + 1;
        let mut cells = vec![0u32; rows * cols];

        for i in 1..rows {
            let ch = x[i - 1];
            for j in 1..cols {
                cells[cell_index(i, j, cols)] = if ch == y[j - 1] {
                    cells[cell_index(i - 1, j - 1, cols)] + 1
                } else {
                    let up = cells[cell_index(i - 1, j, cols)];
                    let left = cells[cell_index(i, j - 1, cols)];
                    up.max(left)
                };
            }
        }

        Self { rows, cols, cells }
    }

    /// Number of rows, `|x| + 1`.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `|y| + 1`.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// LCS length of `x[0..i)` and `y[0..j)`.
    ///
    /// # Panics
    /// Panics if `i >= rows()` or `j >= cols()`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of range");
        self.cells[cell_index(i, j, self.cols)]
    }

    /// Row `i` of the table: LCS lengths of `x[0..i)` against every prefix of `y`.
    ///
    /// # Panics
    /// Panics if `i >= rows()`.
    pub fn row(&self, i: usize) -> &[u32] {
        assert!(i < self.rows, "row {i} out of range");
        &self.cells[cell_index(i, 0, self.cols)..cell_index(i + 1, 0, self.cols)]
    }

    /// Length of the LCS of the full inputs, `table[|x|][|y|]`.
    #[inline]
    pub fn lcs_len(&self) -> u32 {
        // cells is never empty: rows and cols are both at least 1.
        self.cells[self.cells.len() - 1]
    }

    /// Reconstruct one LCS by walking back from `(|x|, |y|)`.
    ///
    /// `x` must be the sequence the table rows were built from. Ties are
    /// broken diagonal first, then left, then up, so the result is
    /// deterministic.
    pub fn backtrack(&self, x: &[char]) -> String {
        debug_assert_eq!(x.len() + 1, self.rows);

        let mut i = self.rows - 1;
        let mut j = self.cols - 1;
        if i == 0 || j == 0 {
            return String::new();
        }

        let mut rev: Vec<char> = Vec::with_capacity(self.lcs_len() as usize);
        // A non-zero cell always has i > 0 and j > 0.
        while self.get(i, j) != 0 {
            let here = self.get(i, j);
            let up = self.get(i - 1, j);
            let left = self.get(i, j - 1);
            if up < here && left < here {
                rev.push(x[i - 1]);
                i -= 1;
                j -= 1;
            } else if up < here {
                j -= 1;
            } else {
                i -= 1;
            }
        }

        rev.iter().rev().collect()
    }
}

impl fmt::Display for LengthTable {
    /// Render the grid, one table row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.lcs_len().to_string().len();
        for i in 0..self.rows {
            let line: Vec<String> = self
                .row(i)
                .iter()
                .map(|v| format!("{v:>width$}"))
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
