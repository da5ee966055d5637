//! Longest Common Subsequence (LCS) solvers.
//!
//! This crate answers, for two strings `x` and `y`:
//! - the length of their longest common subsequence,
//! - one concrete longest common subsequence,
//! - the set of *all distinct* longest common subsequences ("All-LCS"),
//! - whether a string is a common subsequence, and whether a set of strings
//!   consists of longest common subsequences.
//!
//! ## Core idea
//! 1. Build the classic O(|x|·|y|) [`LengthTable`] of prefix-pair LCS lengths.
//! 2. Walk it backwards once to recover one solution.
//! 3. Re-run the LCS recurrence over the table as a memoized dynamic program
//!    over sets of strings to enumerate every solution.
//!
//! ## Quick start
//! ```
//! use all_lcs::{AllLcsSolver, Solver};
//!
//! let mut solver = AllLcsSolver::new("AGCAT", "GAC");
//! solver.solve();
//! assert_eq!(solver.length_of_solution().unwrap(), 2);
//!
//! let all = solver.all_solutions().unwrap();
//! assert_eq!(all.into_iter().collect::<Vec<_>>(), ["AC", "GA", "GC"]);
//! assert!(solver.is_common_subsequence("GC"));
//! ```
//!
//! Solvers start unsolved; result queries before [`Solver::solve`] fail with
//! [`LcsError::InvalidState`]. Enumeration is capped by
//! [`SolverConfig::max_solutions`], configurable through [`SolverBuilder`].
//!
//! With the default `tracing` feature the solvers emit spans and events via
//! the `tracing` crate; install any subscriber to see them.

pub mod builder;
pub mod enumerate;
pub mod error;
pub mod solver;
pub mod subsequence;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::{SolverBuilder, SolverConfig};
pub use crate::error::{LcsError, Result};
pub use crate::solver::{AllLcsSolver, LcsSolver, SolverState};
pub use crate::table::LengthTable;
pub use crate::traits::Solver;
