//! Convergence tracking & tolerance checks for iterative solvers.

use num_traits::Float;

/// Stopping criteria.
///
/// `max_iters == 0` means the iteration count is unbounded and only the
/// tolerance (or an exactly zero residual, or a breakdown) ends the solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Convergence<T> {
    pub tol: T,
    pub max_iters: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SolveStats<T> {
    /// Advances performed by the driver. Steps a caller made on a sequence
    /// before handing it to the driver are not counted.
    pub iterations: usize,
    /// Relative residual of the last iterate.
    pub final_residual: T,
    /// Relative residual of the returned iterate.
    pub best_residual: T,
    /// Driver step that produced the returned iterate, counted like
    /// `iterations`; `0` means the iterate the sequence started with.
    pub best_iteration: usize,
    pub converged: bool,
}

impl<T: Copy + Float> Convergence<T> {
    /// True once `completed` advances use up the iteration budget.
    pub fn exhausted(&self, completed: usize) -> bool {
        self.max_iters > 0 && completed >= self.max_iters
    }

    /// True if the relative residual `res` meets the tolerance.
    pub fn converged(&self, res: T) -> bool {
        res <= self.tol
    }
}

/// Accumulator that keeps the iterate with the smallest residual seen.
///
/// Late iterations of an ill-conditioned solve can drift upwards in residual;
/// folding every iterate through this keeps the best one. Ties go to the
/// later iterate, and NaN residuals are never recorded.
#[derive(Clone, Debug)]
pub struct BestSolution<T> {
    best: Option<(usize, T, Vec<T>)>,
}

impl<T: Copy + Float> Default for BestSolution<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Float> BestSolution<T> {
    pub fn new() -> Self {
        Self { best: None }
    }

    /// Offer the iterate `x` from `iteration` with relative residual
    /// `residual`. Returns whether it became the new best.
    pub fn observe(&mut self, iteration: usize, residual: T, x: &[T]) -> bool {
        let improves = match &self.best {
            Some((_, best_res, _)) => residual <= *best_res,
            None => !residual.is_nan(),
        };
        if improves {
            self.best = Some((iteration, residual, x.to_vec()));
        }
        improves
    }

    pub fn residual(&self) -> Option<T> {
        self.best.as_ref().map(|(_, res, _)| *res)
    }

    pub fn iteration(&self) -> Option<usize> {
        self.best.as_ref().map(|(i, _, _)| *i)
    }

    /// Consume the accumulator, yielding `(iteration, residual, x)`.
    pub fn into_inner(self) -> Option<(usize, T, Vec<T>)> {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_budget_is_unbounded() {
        let conv = Convergence { tol: 1e-8, max_iters: 0 };
        assert!(!conv.exhausted(0));
        assert!(!conv.exhausted(1_000_000));
        let conv = Convergence { tol: 1e-8, max_iters: 3 };
        assert!(!conv.exhausted(2));
        assert!(conv.exhausted(3));
    }

    #[test]
    fn tolerance_is_inclusive() {
        let conv = Convergence { tol: 0.0, max_iters: 10 };
        assert!(conv.converged(0.0));
        assert!(!conv.converged(1e-300));
        assert!(!conv.converged(f64::NAN));
    }

    #[test]
    fn best_solution_keeps_minimum_residual() {
        let mut best = BestSolution::new();
        assert!(best.observe(1, 0.5, &[1.0]));
        assert!(best.observe(2, 0.1, &[2.0]));
        // residual drifted up: keep iteration 2
        assert!(!best.observe(3, 0.2, &[3.0]));
        assert!(!best.observe(4, f64::NAN, &[4.0]));
        assert_eq!(best.iteration(), Some(2));
        assert_eq!(best.residual(), Some(0.1));
        // ties prefer the later iterate
        assert!(best.observe(5, 0.1, &[5.0]));
        let (it, res, x) = best.into_inner().unwrap();
        assert_eq!((it, res, x), (5, 0.1, vec![5.0]));
    }

    #[test]
    fn nan_is_never_first_best() {
        let mut best = BestSolution::<f64>::new();
        assert!(!best.observe(1, f64::NAN, &[0.0]));
        assert!(best.into_inner().is_none());
    }
}
