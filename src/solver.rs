//! LCS solvers over a fixed pair of strings.
//!
//! [`LcsSolver`] answers the length of the LCS and produces one solution.
//! [`AllLcsSolver`] wraps it and adds enumeration of every distinct
//! maximum-length solution plus validation of candidate sets. Both share one
//! [`SolverState`]: the length table is built once by `solve()` and reused by
//! every later query.
//!
//! Two solvers are equal when they were built over the same unordered pair of
//! strings, so `(x, y)` and `(y, x)` compare (and hash) equal.
//!
//! ```
//! use all_lcs::{AllLcsSolver, Solver};
//!
//! let mut solver = AllLcsSolver::new("ABCBDAB", "BDCABA");
//! solver.solve();
//! assert_eq!(solver.length_of_solution().unwrap(), 4);
//! assert!(solver.all_solutions().unwrap().contains("BCBA"));
//! ```

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use crate::builder::SolverConfig;
use crate::enumerate::Enumerator;
use crate::error::{LcsError, Result};
use crate::subsequence;
use crate::table::LengthTable;
use crate::traits::Solver;

/// Lifecycle of a solver. The transition is one-way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SolverState {
    #[default]
    Unsolved,
    Solved(LengthTable),
}

impl SolverState {
    fn table(&self) -> Result<&LengthTable> {
        match self {
            SolverState::Solved(table) => Ok(table),
            SolverState::Unsolved => Err(LcsError::InvalidState),
        }
    }
}

/// Solver for the length of the LCS and one concrete solution.
#[derive(Clone, Debug)]
pub struct LcsSolver {
    x: String,
    y: String,
    x_chars: Vec<char>,
    y_chars: Vec<char>,
    config: SolverConfig,
    state: SolverState,
}

impl LcsSolver {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self::with_config(x, y, SolverConfig::default())
    }

    pub fn with_config(x: impl Into<String>, y: impl Into<String>, config: SolverConfig) -> Self {
        let x = x.into();
        let y = y.into();
        let x_chars = x.chars().collect();
        let y_chars = y.chars().collect();
        Self {
            x,
            y,
            x_chars,
            y_chars,
            config,
            state: SolverState::Unsolved,
        }
    }

    /// Checked constructor for inputs that may be absent.
    ///
    /// # Errors
    /// [`LcsError::NullArgument`] naming the first missing input.
    pub fn try_new(x: Option<&str>, y: Option<&str>) -> Result<Self> {
        let x = x.ok_or(LcsError::NullArgument { name: "x" })?;
        let y = y.ok_or(LcsError::NullArgument { name: "y" })?;
        Ok(Self::new(x, y))
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn state(&self) -> &SolverState {
        &self.state
    }

    /// The length table built by `solve()`.
    ///
    /// # Errors
    /// [`LcsError::InvalidState`] if the instance has not been solved.
    pub fn table(&self) -> Result<&LengthTable> {
        self.state.table()
    }

    /// One longest common subsequence.
    ///
    /// When several exist, the choice is deterministic (see
    /// [`LengthTable::backtrack`]).
    ///
    /// # Errors
    /// [`LcsError::InvalidState`] if the instance has not been solved.
    pub fn one_solution(&self) -> Result<String> {
        Ok(self.table()?.backtrack(&self.x_chars))
    }

    fn enumerator(&self) -> Result<Enumerator<'_>> {
        let table = self.table()?;
        Ok(Enumerator::new(
            &self.x_chars,
            &self.y_chars,
            table,
            self.config.max_solutions,
        ))
    }
}

impl Solver for LcsSolver {
    fn x(&self) -> &str {
        &self.x
    }

    fn y(&self) -> &str {
        &self.y
    }

    fn solve(&mut self) {
        if self.is_solved() {
            return;
        }

        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "lcs_solve",
            x_len = self.x_chars.len(),
            y_len = self.y_chars.len()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let table = LengthTable::build(&self.x_chars, &self.y_chars);

        #[cfg(feature = "tracing")]
        tracing::debug!(lcs_len = table.lcs_len(), "length table built");

        self.state = SolverState::Solved(table);
    }

    fn is_solved(&self) -> bool {
        matches!(self.state, SolverState::Solved(_))
    }

    fn length_of_solution(&self) -> Result<usize> {
        Ok(self.table()?.lcs_len() as usize)
    }

    fn is_common_subsequence(&self, z: &str) -> bool {
        subsequence::is_common_subsequence(z, &self.x_chars, &self.y_chars)
    }
}

impl PartialEq for LcsSolver {
    fn eq(&self, other: &Self) -> bool {
        (self.x == other.x && self.y == other.y) || (self.x == other.y && self.y == other.x)
    }
}

impl Eq for LcsSolver {}

impl Hash for LcsSolver {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (lo, hi) = if self.x <= self.y {
            (&self.x, &self.y)
        } else {
            (&self.y, &self.x)
        };
        lo.hash(state);
        hi.hash(state);
    }
}

/// Solver for every distinct longest common subsequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AllLcsSolver {
    inner: LcsSolver,
}

impl AllLcsSolver {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            inner: LcsSolver::new(x, y),
        }
    }

    pub fn with_config(x: impl Into<String>, y: impl Into<String>, config: SolverConfig) -> Self {
        Self {
            inner: LcsSolver::with_config(x, y, config),
        }
    }

    /// # Errors
    /// [`LcsError::NullArgument`] naming the first missing input.
    pub fn try_new(x: Option<&str>, y: Option<&str>) -> Result<Self> {
        Ok(Self {
            inner: LcsSolver::try_new(x, y)?,
        })
    }

    pub fn config(&self) -> &SolverConfig {
        self.inner.config()
    }

    /// The wrapped single-solution solver.
    pub fn lcs_solver(&self) -> &LcsSolver {
        &self.inner
    }

    /// Same as [`Solver::length_of_solution`].
    pub fn length_of_solutions(&self) -> Result<usize> {
        self.inner.length_of_solution()
    }

    pub fn one_solution(&self) -> Result<String> {
        self.inner.one_solution()
    }

    /// Every distinct common subsequence of maximum length.
    ///
    /// Recomputed on each call; repeated calls return equal sets.
    ///
    /// # Errors
    /// - [`LcsError::InvalidState`] if the instance has not been solved.
    /// - [`LcsError::ResourceExceeded`] if enumeration outgrows the configured
    ///   `max_solutions`.
    pub fn all_solutions(&self) -> Result<BTreeSet<String>> {
        self.inner.enumerator()?.run()
    }

    /// Returns `true` if every candidate has the same length and is one of
    /// the longest common subsequences.
    ///
    /// The empty string is admitted whenever it is a candidate, so `{""}`
    /// passes for any inputs. An empty candidate set is vacuously valid and is
    /// accepted even before `solve()`.
    ///
    /// # Errors
    /// - [`LcsError::InvalidState`] if candidates are given but the instance
    ///   has not been solved.
    /// - [`LcsError::ResourceExceeded`] as for
    ///   [`all_solutions`](Self::all_solutions).
    pub fn check_lcss<I, S>(&self, candidates: I) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let candidates: Vec<S> = candidates.into_iter().collect();
        let Some(first) = candidates.first() else {
            return Ok(true);
        };

        let solutions = self.all_solutions()?;

        let len = first.as_ref().chars().count();
        let same_length = candidates
            .iter()
            .all(|c| c.as_ref().chars().count() == len);
        let all_known = candidates.iter().all(|c| {
            let c = c.as_ref();
            c.is_empty() || solutions.contains(c)
        });

        #[cfg(feature = "tracing")]
        tracing::debug!(
            candidates = candidates.len(),
            same_length,
            all_known,
            "check_lcss"
        );

        Ok(same_length && all_known)
    }

    /// Checked form of [`check_lcss`](Self::check_lcss) for a candidate set
    /// that may be absent.
    ///
    /// # Errors
    /// [`LcsError::NullArgument`] if `candidates` is `None`, otherwise as
    /// [`check_lcss`](Self::check_lcss).
    pub fn try_check_lcss<I, S>(&self, candidates: Option<I>) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let candidates = candidates.ok_or(LcsError::NullArgument { name: "candidates" })?;
        self.check_lcss(candidates)
    }
}

impl Solver for AllLcsSolver {
    fn x(&self) -> &str {
        self.inner.x()
    }

    fn y(&self) -> &str {
        self.inner.y()
    }

    fn solve(&mut self) {
        self.inner.solve();
    }

    fn is_solved(&self) -> bool {
        self.inner.is_solved()
    }

    fn length_of_solution(&self) -> Result<usize> {
        self.inner.length_of_solution()
    }

    fn is_common_subsequence(&self, z: &str) -> bool {
        self.inner.is_common_subsequence(z)
    }
}
