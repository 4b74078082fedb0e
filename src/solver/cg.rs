//! Conjugate Gradient (unpreconditioned) per Saad §6.7, one step at a time.
//!
//! The sequence holds the triple `(x, r, p)` and every [`advance`] replaces
//! it with the next triple computed by [`CgState::next`]. Exactly one
//! operator evaluation is spent per step: the new residual is updated from
//! `A p` instead of being recomputed as `b − A x`.
//!
//! [`advance`]: crate::solver::IterationSequence::advance

use crate::core::traits::{LinearOperator, Scalar};
use crate::core::vector::{dot, minus, plus_scaled, sqr_norm};
use crate::error::SolveError;
use crate::solver::{IterationSequence, objective, relative_residual};

/// Iterate, residual `b − A x` and A-conjugate search direction.
#[derive(Clone, Debug, PartialEq)]
pub struct CgState<T> {
    pub x: Vec<T>,
    pub r: Vec<T>,
    pub p: Vec<T>,
}

impl<T: Scalar> CgState<T> {
    /// Initial state for guess `x0`; the first direction is steepest descent.
    pub fn initial<A>(a: &A, b: &[T], x0: &[T]) -> Result<Self, SolveError>
    where
        A: LinearOperator<T> + ?Sized,
    {
        let n = b.len();
        SolveError::check_len("initial guess", n, x0.len())?;
        let x = x0.to_vec();
        let ax = a.apply(&x);
        SolveError::check_len("operator output", n, ax.len())?;
        let r = minus(b, &ax);
        let p = r.clone();
        Ok(Self { x, r, p })
    }

    /// Computes the state after one CG step. `iteration` only labels a breakdown.
    pub fn next<A>(&self, a: &A, iteration: usize) -> Result<Self, SolveError>
    where
        A: LinearOperator<T> + ?Sized,
    {
        let ap = a.apply(&self.p);
        let pap = dot(&self.p, &ap);
        if pap == T::zero() {
            return Err(SolveError::Breakdown { iteration });
        }
        let rsq = sqr_norm(&self.r);
        let alpha = rsq / pap;
        let x = plus_scaled(&self.x, alpha, &self.p);
        // equals b - A x without a second operator evaluation
        let r = plus_scaled(&self.r, -alpha, &ap);
        let beta = sqr_norm(&r) / rsq;
        let p = plus_scaled(&r, beta, &self.p);
        log::trace!("cg step {}: alpha={:e} beta={:e}", iteration, alpha, beta);
        Ok(Self { x, r, p })
    }
}

/// Unpreconditioned CG on `A x = b` for an SPD operator `A`.
///
/// The sequence borrows the operator and owns private copies of `b` and of
/// the current state, so nothing the caller does to its own buffers is ever
/// observed.
pub struct CgSequence<'a, T, A: ?Sized> {
    a: &'a A,
    b: Vec<T>,
    state: CgState<T>,
    iterations: usize,
}

impl<'a, T, A> CgSequence<'a, T, A>
where
    T: Scalar,
    A: LinearOperator<T> + ?Sized,
{
    pub fn new(a: &'a A, b: &[T], x0: &[T]) -> Result<Self, SolveError> {
        let state = CgState::initial(a, b, x0)?;
        Ok(Self { a, b: b.to_vec(), state, iterations: 0 })
    }

    pub fn state(&self) -> &CgState<T> {
        &self.state
    }

    pub fn into_solution(self) -> Vec<T> {
        self.state.x
    }
}

impl<'a, T, A> IterationSequence<T> for CgSequence<'a, T, A>
where
    T: Scalar,
    A: LinearOperator<T> + ?Sized,
{
    fn is_final(&self) -> bool {
        sqr_norm(&self.state.r) == T::zero()
    }

    fn advance(&mut self) -> Result<(), SolveError> {
        self.state = self.state.next(self.a, self.iterations)?;
        self.iterations += 1;
        Ok(())
    }

    fn solution(&self) -> &[T] {
        &self.state.x
    }

    fn objective(&self) -> T {
        objective(&self.state.x, &self.state.r, &self.b)
    }

    fn residual(&self) -> T {
        relative_residual(&self.state.r, &self.b)
    }

    fn iterations(&self) -> usize {
        self.iterations
    }
}
