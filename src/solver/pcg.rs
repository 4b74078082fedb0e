//! Preconditioned Conjugate Gradient (PCG) per Saad §9.2, one step at a time.
//!
//! The preconditioner is any operator `Cinv ≈ A⁻¹`; the caller chooses and
//! builds it. Reported quantities ([`objective`], [`residual`], finality) use
//! only the raw residual `b − A x`, so runs with different preconditioners
//! can be compared directly.
//!
//! [`objective`]: crate::solver::IterationSequence::objective
//! [`residual`]: crate::solver::IterationSequence::residual

use crate::core::traits::{LinearOperator, Scalar};
use crate::core::vector::{dot, minus, plus_scaled, sqr_norm};
use crate::error::SolveError;
use crate::solver::{IterationSequence, objective, relative_residual};

/// Iterate, residual, preconditioned residual `z = Cinv r` and search direction.
#[derive(Clone, Debug, PartialEq)]
pub struct PcgState<T> {
    pub x: Vec<T>,
    pub r: Vec<T>,
    pub z: Vec<T>,
    pub p: Vec<T>,
}

impl<T: Scalar> PcgState<T> {
    pub fn initial<A, C>(a: &A, b: &[T], cinv: &C, x0: &[T]) -> Result<Self, SolveError>
    where
        A: LinearOperator<T> + ?Sized,
        C: LinearOperator<T> + ?Sized,
    {
        let n = b.len();
        SolveError::check_len("initial guess", n, x0.len())?;
        let x = x0.to_vec();
        let ax = a.apply(&x);
        SolveError::check_len("operator output", n, ax.len())?;
        let r = minus(b, &ax);
        let z = cinv.apply(&r);
        SolveError::check_len("preconditioner output", n, z.len())?;
        let p = z.clone();
        Ok(Self { x, r, z, p })
    }

    /// Computes the state after one PCG step. `iteration` only labels a breakdown.
    pub fn next<A, C>(&self, a: &A, cinv: &C, iteration: usize) -> Result<Self, SolveError>
    where
        A: LinearOperator<T> + ?Sized,
        C: LinearOperator<T> + ?Sized,
    {
        let ap = a.apply(&self.p);
        let pap = dot(&self.p, &ap);
        if pap == T::zero() {
            return Err(SolveError::Breakdown { iteration });
        }
        let rz = dot(&self.r, &self.z);
        let alpha = rz / pap;
        let x = plus_scaled(&self.x, alpha, &self.p);
        let r = plus_scaled(&self.r, -alpha, &ap);
        let z = cinv.apply(&r);
        let beta = dot(&z, &r) / rz;
        let p = plus_scaled(&z, beta, &self.p);
        log::trace!("pcg step {}: alpha={:e} beta={:e}", iteration, alpha, beta);
        Ok(Self { x, r, z, p })
    }
}

/// PCG on `A x = b` with preconditioner `cinv`, both SPD.
///
/// Operator and preconditioner are fixed for the life of the sequence.
pub struct PcgSequence<'a, T, A: ?Sized, C: ?Sized> {
    a: &'a A,
    cinv: &'a C,
    b: Vec<T>,
    state: PcgState<T>,
    iterations: usize,
}

impl<'a, T, A, C> PcgSequence<'a, T, A, C>
where
    T: Scalar,
    A: LinearOperator<T> + ?Sized,
    C: LinearOperator<T> + ?Sized,
{
    pub fn new(a: &'a A, b: &[T], cinv: &'a C, x0: &[T]) -> Result<Self, SolveError> {
        let state = PcgState::initial(a, b, cinv, x0)?;
        Ok(Self { a, cinv, b: b.to_vec(), state, iterations: 0 })
    }

    pub fn state(&self) -> &PcgState<T> {
        &self.state
    }

    pub fn into_solution(self) -> Vec<T> {
        self.state.x
    }
}

impl<'a, T, A, C> IterationSequence<T> for PcgSequence<'a, T, A, C>
where
    T: Scalar,
    A: LinearOperator<T> + ?Sized,
    C: LinearOperator<T> + ?Sized,
{
    /// Tests the raw residual, not `z`.
    fn is_final(&self) -> bool {
        sqr_norm(&self.state.r) == T::zero()
    }

    fn advance(&mut self) -> Result<(), SolveError> {
        self.state = self.state.next(self.a, self.cinv, self.iterations)?;
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
