//! Enumeration of every distinct maximum-length common subsequence.
//!
//! The recurrence over prefix lengths `(i, j)` is
//!
//! ```text
//! All(i, j) = { "" }                                     if i == 0 or j == 0
//!           = { s + x[i-1] : s in All(i-1, j-1) }        if x[i-1] == y[j-1]
//!           = All(i-1, j) if table[i-1][j] >= table[i][j-1]
//!             ∪ All(i, j-1) if table[i][j-1] >= table[i-1][j]
//! ```
//!
//! Branching reads the real [`LengthTable`], so only optimal directions are
//! explored. Results depend only on `(i, j)`, which makes the recurrence a
//! dynamic program in its own right: we first mark the cells reachable from
//! `(|x|, |y|)`, then fill their sets in row-major order. Row `i` only reads
//! rows `i` and `i - 1`, so just two rows of sets are live at any time. No
//! recursion is involved, so long inputs cannot exhaust the stack.

use std::collections::BTreeSet;

use crate::error::{LcsError, Result};
use crate::table::LengthTable;
use crate::utils::cell_index;

/// Direction(s) the recurrence takes out of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// Row or column 0: the empty prefix.
    Base,
    /// Last characters match: extend every solution of `(i-1, j-1)`.
    Diagonal,
    /// Last characters differ: union of the optimal neighbours.
    Split { up: bool, left: bool },
}

/// Outcome of the row-by-row fill.
pub(crate) struct Fill {
    /// Set at `(|x|, |y|)`, before the length filter.
    pub(crate) set: BTreeSet<String>,
    /// Most cell sets held at once while filling.
    pub(crate) peak_live: usize,
}

/// All-LCS enumerator bound to one pair of inputs and their length table.
pub struct Enumerator<'a> {
    x: &'a [char],
    y: &'a [char],
    table: &'a LengthTable,
    limit: Option<usize>,
}

impl<'a> Enumerator<'a> {
    /// `table` must have been built from `x` and `y`.
    ///
    /// `limit` caps the size of every intermediate set; `None` disables the cap.
    pub fn new(
        x: &'a [char],
        y: &'a [char],
        table: &'a LengthTable,
        limit: Option<usize>,
    ) -> Self {
        debug_assert_eq!(table.rows(), x.len() + 1);
        debug_assert_eq!(table.cols(), y.len() + 1);
        Self { x, y, table, limit }
    }

    /// Which neighbour(s) the recurrence visits from `(i, j)`.
    pub(crate) fn step(&self, i: usize, j: usize) -> Step {
        if i == 0 || j == 0 {
            return Step::Base;
        }
        if self.x[i - 1] == self.y[j - 1] {
            return Step::Diagonal;
        }
        let up = self.table.get(i - 1, j);
        let left = self.table.get(i, j - 1);
        Step::Split {
            up: up >= left,
            left: left >= up,
        }
    }

    /// Mark every cell the recurrence visits when started at `(|x|, |y|)`.
    ///
    /// Predecessors of `(i, j)` always come later in reverse row-major order,
    /// so a single backwards sweep suffices.
    pub(crate) fn reachable(&self) -> Vec<bool> {
        let rows = self.table.rows();
        let cols = self.table.cols();
        let mut marks = vec![false; rows * cols];
        marks[cell_index(rows - 1, cols - 1, cols)] = true;

        for i in (0..rows).rev() {
            for j in (0..cols).rev() {
                if !marks[cell_index(i, j, cols)] {
                    continue;
                }
                match self.step(i, j) {
                    Step::Base => {}
                    Step::Diagonal => marks[cell_index(i - 1, j - 1, cols)] = true,
                    Step::Split { up, left } => {
                        if up {
                            marks[cell_index(i - 1, j, cols)] = true;
                        }
                        if left {
                            marks[cell_index(i, j - 1, cols)] = true;
                        }
                    }
                }
            }
        }

        marks
    }

    /// Every distinct string produced by the recurrence at `(|x|, |y|)`,
    /// restricted to those of maximum length.
    ///
    /// # Errors
    /// [`LcsError::ResourceExceeded`] if any cell would hold more strings
    /// than the configured limit.
    pub fn run(&self) -> Result<BTreeSet<String>> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "enumerate_all",
            rows = self.table.rows(),
            cols = self.table.cols(),
            limit = ?self.limit
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let marks = self.reachable();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            reachable = marks.iter().filter(|&&m| m).count(),
            "marked reachable cells"
        );

        let fill = self.fill(&marks)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(peak_live = fill.peak_live, "filled cell sets");

        let max = self.table.lcs_len() as usize;
        Ok(fill
            .set
            .into_iter()
            .filter(|s| s.chars().count() == max)
            .collect())
    }

    /// Fill the sets of the marked cells row by row, keeping only the
    /// previous and the current row.
    pub(crate) fn fill(&self, marks: &[bool]) -> Result<Fill> {
        let rows = self.table.rows();
        let cols = self.table.cols();
        let mut prev: Vec<Option<BTreeSet<String>>> = vec![None; cols];
        let mut cur: Vec<Option<BTreeSet<String>>> = vec![None; cols];
        let mut peak_live = 0;

        for i in 0..rows {
            for j in 0..cols {
                // cur still holds row i - 2 here; drop it.
                cur[j] = None;
                if !marks[cell_index(i, j, cols)] {
                    continue;
                }
                let set = self.cell_set(&prev, &cur, i, j);
                self.check_limit(set.len())?;
                cur[j] = Some(set);
            }
            let live = prev.iter().chain(cur.iter()).filter(|c| c.is_some()).count();
            peak_live = peak_live.max(live);
            std::mem::swap(&mut prev, &mut cur);
        }

        // After the final swap the last row sits in `prev`.
        let set = prev
            .pop()
            .flatten()
            .unwrap_or_else(|| BTreeSet::from([String::new()]));
        Ok(Fill { set, peak_live })
    }

    /// Evaluate the recurrence at `(i, j)` from already filled neighbours.
    /// `prev` is row `i - 1`; `cur` is row `i`, filled up to column `j - 1`.
    fn cell_set(
        &self,
        prev: &[Option<BTreeSet<String>>],
        cur: &[Option<BTreeSet<String>>],
        i: usize,
        j: usize,
    ) -> BTreeSet<String> {
        match self.step(i, j) {
            Step::Base => BTreeSet::from([String::new()]),
            Step::Diagonal => {
                let ch = self.x[i - 1];
                prev[j - 1]
                    .as_ref()
                    .into_iter()
                    .flatten()
                    .map(|s| {
                        let mut ext = String::with_capacity(s.len() + ch.len_utf8());
                        ext.push_str(s);
                        ext.push(ch);
                        ext
                    })
                    .collect()
            }
            Step::Split { up, left } => {
                let mut out = BTreeSet::new();
                if up {
                    out.extend(prev[j].iter().flatten().cloned());
                }
                if left {
                    out.extend(cur[j - 1].iter().flatten().cloned());
                }
                out
            }
        }
    }

    fn check_limit(&self, size: usize) -> Result<()> {
        match self.limit {
            Some(limit) if size > limit => {
                #[cfg(feature = "tracing")]
                tracing::warn!(size, limit, "enumeration limit exceeded");
                Err(LcsError::ResourceExceeded { limit })
            }
            _ => Ok(()),
        }
    }
}
