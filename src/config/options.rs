//! Solver options.
//!
//! `SolveOptions` collects the stopping criteria for a solve. It is plain
//! data with builder-style setters, consumed by
//! [`CgSolver::from_options`](crate::solver::CgSolver::from_options).

use crate::core::traits::Scalar;
use crate::utils::convergence::Convergence;

/// Stopping criteria for a CG/PCG solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveOptions<T> {
    /// Relative residual `‖b − A x‖ / ‖b‖` at which the solve stops.
    pub tol: T,

    /// Maximum number of iterations; `0` means unbounded.
    pub max_iters: usize,
}

impl<T: Scalar> Default for SolveOptions<T> {
    fn default() -> Self {
        Self {
            tol: T::from(1e-10).unwrap_or_else(T::epsilon),
            max_iters: 0,
        }
    }
}

impl<T: Scalar> SolveOptions<T> {
    pub fn new(tol: T, max_iters: usize) -> Self {
        Self { tol, max_iters }
    }
    pub fn with_tol(mut self, tol: T) -> Self {
        self.tol = tol;
        self
    }
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    pub(crate) fn convergence(&self) -> Convergence<T> {
        Convergence { tol: self.tol, max_iters: self.max_iters }
    }
}
