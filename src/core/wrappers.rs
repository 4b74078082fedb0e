//! Operator adapters for faer dense matrices.
//!
//! A `faer::Mat` or `faer::MatRef` can be handed to any solver as a
//! [`LinearOperator`]. [`Normal`] wraps a (possibly rectangular) matrix `V`
//! and applies `VᵀV` as two matrix-vector products, never forming the Gram
//! matrix itself.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)

use crate::core::traits::LinearOperator;
use faer::{Mat, MatRef};
use num_traits::Float;

fn matvec<T: Float>(a: MatRef<'_, T>, x: &[T]) -> Vec<T> {
    assert_eq!(a.ncols(), x.len(), "Input vector x has incorrect length");
    let mut y = vec![T::zero(); a.nrows()];
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            y[i] = y[i] + a[(i, j)] * x[j];
        }
    }
    y
}

fn mattransvec<T: Float>(a: MatRef<'_, T>, x: &[T]) -> Vec<T> {
    assert_eq!(a.nrows(), x.len(), "Input vector x has incorrect length");
    let mut y = vec![T::zero(); a.ncols()];
    for j in 0..a.ncols() {
        for i in 0..a.nrows() {
            y[j] = y[j] + a[(i, j)] * x[i];
        }
    }
    y
}

/// Computes `y = A * x` for a dense matrix.
impl<T: Float> LinearOperator<T> for Mat<T> {
    fn apply(&self, x: &[T]) -> Vec<T> {
        matvec(self.as_ref(), x)
    }
}

/// Computes `y = A * x` for a matrix view.
impl<'a, T: Float> LinearOperator<T> for MatRef<'a, T> {
    fn apply(&self, x: &[T]) -> Vec<T> {
        matvec(*self, x)
    }
}

/// The implicit operator `VᵀV` for an `m × n` matrix `V`.
///
/// SPD whenever `V` has full column rank.
#[derive(Debug, Clone, Copy)]
pub struct Normal<'a, T> {
    v: MatRef<'a, T>,
}

impl<'a, T> Normal<'a, T> {
    pub fn new(v: MatRef<'a, T>) -> Self {
        Self { v }
    }

    /// Dimension `n` of the space the operator acts on.
    pub fn dim(&self) -> usize {
        self.v.ncols()
    }
}

impl<'a, T: Float> LinearOperator<T> for Normal<'a, T> {
    fn apply(&self, x: &[T]) -> Vec<T> {
        let vx = matvec(self.v, x);
        mattransvec(self.v, &vx)
    }
}
