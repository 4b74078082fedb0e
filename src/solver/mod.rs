//! Conjugate-gradient iteration sequences and the drivers that run them.

use crate::core::traits::Scalar;
use crate::core::vector::{dot, sqr_norm};
use crate::error::SolveError;

/// A solver advanced one step at a time.
///
/// Driving a sequence by hand (instead of through [`CgSolver`]) is how a
/// caller implements its own stopping rule or cancellation.
pub trait IterationSequence<T> {
    /// True iff the residual is exactly zero. Advancing a final sequence
    /// breaks down, since the next step would divide by zero.
    fn is_final(&self) -> bool;
    /// Performs one iteration. On error the state is left untouched.
    fn advance(&mut self) -> Result<(), SolveError>;
    /// Current solution estimate.
    fn solution(&self) -> &[T];
    /// Returns `½ xᵀA x − bᵀx`, the quadratic CG minimizes.
    fn objective(&self) -> T;
    /// Returns `‖b − A x‖ / ‖b‖`.
    fn residual(&self) -> T;
    /// Successful advances so far.
    fn iterations(&self) -> usize;
}

/// `½ xᵀA x − bᵀx` from the residual `r = b − A x`:
/// `xᵀr = xᵀb − xᵀA x`, hence the objective is `−½ xᵀ(b + r)`.
pub(crate) fn objective<T: Scalar>(x: &[T], r: &[T], b: &[T]) -> T {
    let two = T::one() + T::one();
    -(dot(x, b) + dot(x, r)) / two
}

/// `‖r‖ / ‖b‖`, or `‖r‖` when `b` is zero.
pub(crate) fn relative_residual<T: Scalar>(r: &[T], b: &[T]) -> T {
    let bsq = sqr_norm(b);
    let rsq = sqr_norm(r);
    if bsq == T::zero() {
        rsq.sqrt()
    } else {
        (rsq / bsq).sqrt()
    }
}

pub mod cg;
pub use cg::{CgSequence, CgState};

pub mod pcg;
pub use pcg::{PcgSequence, PcgState};

pub mod driver;
pub use driver::{CgSolver, Solution, solve, solve_preconditioned};
