//! Error types for the solvers.

use thiserror::Error;

/// Errors that can occur when querying a solver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LcsError {
    /// A required argument was absent. Raised before any computation.
    #[error("missing required argument `{name}`")]
    NullArgument { name: &'static str },

    /// A result was requested before `solve()` was called.
    #[error("solver has not been solved yet")]
    InvalidState,

    /// Enumeration produced more candidate solutions than the configured limit.
    #[error("enumeration exceeded the limit of {limit} solutions")]
    ResourceExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, LcsError>;
