use crate::solver::{AllLcsSolver, LcsSolver};
use crate::utils::DEFAULT_MAX_SOLUTIONS;

/// Tunables shared by both solvers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Largest number of strings any enumeration cell may hold before
    /// `all_solutions` gives up with `ResourceExceeded`. `None` is unbounded.
    pub max_solutions: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_solutions: Some(DEFAULT_MAX_SOLUTIONS),
        }
    }
}

pub struct SolverBuilder {
    x: String,
    y: String,
    max_solutions: Option<usize>,
    unbounded: bool,
}

impl SolverBuilder {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            max_solutions: None,
            unbounded: false,
        }
    }

    /// # Panics
    /// Panics if `limit == 0`.
    pub fn with_max_solutions(mut self, limit: usize) -> Self {
        assert!(limit > 0, "max_solutions must be positive");
        self.max_solutions = Some(limit);
        self.unbounded = false;
        self
    }

    pub fn unbounded(mut self) -> Self {
        self.unbounded = true;
        self
    }

    pub fn config(&self) -> SolverConfig {
        if self.unbounded {
            SolverConfig {
                max_solutions: None,
            }
        } else {
            SolverConfig {
                max_solutions: Some(self.max_solutions.unwrap_or(DEFAULT_MAX_SOLUTIONS)),
            }
        }
    }

    pub fn build(self) -> LcsSolver {
        let config = self.config();
        LcsSolver::with_config(self.x, self.y, config)
    }

    pub fn build_all(self) -> AllLcsSolver {
        let config = self.config();
        AllLcsSolver::with_config(self.x, self.y, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Solver;

    #[test]
    fn default_limit_applies() {
        let b = SolverBuilder::new("AB", "BA");
        assert_eq!(b.config(), SolverConfig::default());
        assert_eq!(b.config().max_solutions, Some(DEFAULT_MAX_SOLUTIONS));
    }

    #[test]
    fn explicit_and_unbounded_limits() {
        let b = SolverBuilder::new("AB", "BA").with_max_solutions(7);
        assert_eq!(b.config().max_solutions, Some(7));
        let b = b.unbounded();
        assert_eq!(b.config().max_solutions, None);
        let b = b.with_max_solutions(2);
        assert_eq!(b.config().max_solutions, Some(2));
    }

    #[test]
    fn builds_carry_inputs_and_config() {
        let solver = SolverBuilder::new("ABC", "AC").with_max_solutions(5).build();
        assert_eq!(solver.x(), "ABC");
        assert_eq!(solver.y(), "AC");
        assert_eq!(solver.config().max_solutions, Some(5));

        let all = SolverBuilder::new("ABC", "AC").unbounded().build_all();
        assert_eq!(all.config().max_solutions, None);
        assert!(!all.is_solved());
    }

    #[test]
    #[should_panic(expected = "max_solutions must be positive")]
    fn zero_limit_rejected() {
        let _ = SolverBuilder::new("A", "A").with_max_solutions(0);
    }
}
