//! Solve drivers: run a sequence to convergence or to its iteration budget.
//!
//! The driver stops when the sequence is final, when the relative residual
//! reaches the tolerance, or when `max_iters` advances have been made
//! (`max_iters == 0` is unbounded). A breakdown aborts the solve and is
//! returned as is. Throughout, the iterate with the smallest residual is kept
//! and returned, so late floating-point drift never makes the answer worse.

use std::io::Write;

use crate::config::SolveOptions;
use crate::core::traits::{LinearOperator, Scalar};
use crate::error::SolveError;
use crate::solver::{CgSequence, IterationSequence, PcgSequence};
use crate::utils::convergence::{BestSolution, Convergence, SolveStats};
use crate::utils::monitor::ObjectiveMonitor;

/// Result of a driven solve.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<T> {
    pub x: Vec<T>,
    pub stats: SolveStats<T>,
}

/// Configurable CG/PCG driver.
///
/// ```
/// use spdsolve::CgSolver;
///
/// let a = |x: &[f64]| vec![3.0 * x[0] - 2.0 * x[1], -2.0 * x[0] + 2.0 * x[1]];
/// let sol = CgSolver::new(0.0, 2).solve(&a, &[0.0, 2.0], &[0.0, 0.0]).unwrap();
/// assert_eq!(sol.x, vec![2.0, 3.0]);
/// assert_eq!(sol.stats.iterations, 2);
/// ```
pub struct CgSolver<'w, T> {
    pub conv: Convergence<T>,
    diagnostics: Option<&'w mut dyn Write>,
}

impl<'w, T: Scalar> CgSolver<'w, T> {
    pub fn new(tol: T, max_iters: usize) -> Self {
        Self { conv: Convergence { tol, max_iters }, diagnostics: None }
    }

    pub fn from_options(opts: &SolveOptions<T>) -> Self {
        Self { conv: opts.convergence(), diagnostics: None }
    }

    /// Write one line per iteration (index, objective, residual, `incr`
    /// marker when the objective went up) to `sink`.
    pub fn with_diagnostics(mut self, sink: &'w mut dyn Write) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    /// Unpreconditioned CG.
    pub fn solve<A>(&mut self, a: &A, b: &[T], x0: &[T]) -> Result<Solution<T>, SolveError>
    where
        A: LinearOperator<T> + ?Sized,
    {
        let seq = CgSequence::new(a, b, x0)?;
        self.drive(seq)
    }

    /// PCG with preconditioner `cinv ≈ A⁻¹`.
    pub fn solve_preconditioned<A, C>(
        &mut self,
        a: &A,
        b: &[T],
        cinv: &C,
        x0: &[T],
    ) -> Result<Solution<T>, SolveError>
    where
        A: LinearOperator<T> + ?Sized,
        C: LinearOperator<T> + ?Sized,
    {
        let seq = PcgSequence::new(a, b, cinv, x0)?;
        self.drive(seq)
    }

    /// Runs any sequence under this driver's stopping rule.
    pub fn drive<S>(&mut self, mut seq: S) -> Result<Solution<T>, SolveError>
    where
        S: IterationSequence<T>,
    {
        let mut monitor = ObjectiveMonitor::new(self.diagnostics.as_deref_mut());
        let mut best = BestSolution::new();
        let mut steps = 0;
        let mut converged = false;
        let mut residual = seq.residual();

        loop {
            if seq.is_final() {
                converged = true;
                break;
            }
            if self.conv.exhausted(steps) {
                break;
            }
            if let Err(err) = seq.advance() {
                log::warn!("solve aborted after {} iterations: {}", steps, err);
                return Err(err);
            }
            steps += 1;
            residual = seq.residual();
            best.observe(steps, residual, seq.solution());
            if monitor.is_active() {
                monitor.observe(steps, seq.objective(), residual);
            }
            if self.conv.converged(residual) {
                converged = true;
                break;
            }
        }

        let (best_iteration, best_residual, x) = match best.into_inner() {
            Some(best) => best,
            None => (0, residual, seq.solution().to_vec()),
        };
        if converged {
            log::debug!("converged in {} iterations, residual {:e}", steps, residual);
        } else {
            log::debug!(
                "stopped after {} iterations without converging, best residual {:e} at iteration {}",
                steps,
                best_residual,
                best_iteration
            );
        }
        Ok(Solution {
            x,
            stats: SolveStats {
                iterations: steps,
                final_residual: residual,
                best_residual,
                best_iteration,
                converged,
            },
        })
    }
}

/// Minimizes `½ xᵀA x − bᵀx` by solving `A x = b` with CG.
///
/// `A` must be symmetric positive-definite. Stops once the relative residual
/// is `≤ tol` or after `max_iters` iterations (`0` for no limit).
pub fn solve<T, A>(a: &A, b: &[T], x0: &[T], tol: T, max_iters: usize) -> Result<Vec<T>, SolveError>
where
    T: Scalar,
    A: LinearOperator<T> + ?Sized,
{
    CgSolver::new(tol, max_iters).solve(a, b, x0).map(|sol| sol.x)
}

/// Solves `A x = b` with PCG using the preconditioner `cinv`.
///
/// Both `A` and `cinv` must be symmetric positive-definite.
pub fn solve_preconditioned<T, A, C>(
    a: &A,
    b: &[T],
    cinv: &C,
    x0: &[T],
    tol: T,
    max_iters: usize,
) -> Result<Vec<T>, SolveError>
where
    T: Scalar,
    A: LinearOperator<T> + ?Sized,
    C: LinearOperator<T> + ?Sized,
{
    CgSolver::new(tol, max_iters)
        .solve_preconditioned(a, b, cinv, x0)
        .map(|sol| sol.x)
}
