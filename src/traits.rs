//! Core trait shared by the solvers.
//!
//! Both [`LcsSolver`](crate::solver::LcsSolver) and
//! [`AllLcsSolver`](crate::solver::AllLcsSolver) follow the same lifecycle:
//! they are built over two fixed input strings, start `Unsolved`, and move to
//! `Solved` once [`Solver::solve`] has filled the length table. Result
//! queries are only answered in the `Solved` state; subsequence membership
//! does not depend on the table and is answered at any time.

use crate::error::{LcsError, Result};

/// Common surface of an LCS solver over a fixed pair of inputs `(x, y)`.
pub trait Solver {
    /// The first input string.
    fn x(&self) -> &str;

    /// The second input string.
    fn y(&self) -> &str;

    /// Solve the instance if it has not been solved yet.
    ///
    /// Calling this on an already solved instance is a no-op; the length
    /// table is never recomputed.
    fn solve(&mut self);

    /// Returns `true` once [`solve`](Self::solve) has been called.
    fn is_solved(&self) -> bool;

    /// Length of the longest common subsequences of `x` and `y`.
    ///
    /// # Errors
    /// [`LcsError::InvalidState`] if the instance has not been solved.
    fn length_of_solution(&self) -> Result<usize>;

    /// Returns `true` if `z` is a subsequence of both `x` and `y`.
    ///
    /// Independent of the solver state. The empty string always qualifies.
    fn is_common_subsequence(&self, z: &str) -> bool;

    /// Checked form of [`is_common_subsequence`](Self::is_common_subsequence)
    /// for callers whose candidate may be absent.
    ///
    /// # Errors
    /// [`LcsError::NullArgument`] if `z` is `None`.
    fn try_is_common_subsequence(&self, z: Option<&str>) -> Result<bool> {
        let z = z.ok_or(LcsError::NullArgument { name: "z" })?;
        Ok(self.is_common_subsequence(z))
    }
}
