//! Core linear-algebra traits for spdsolve.

use std::fmt::{Debug, LowerExp};

use num_traits::Float;

/// Floating-point scalar the solvers are generic over.
pub trait Scalar: Float + LowerExp + Debug + Send + Sync + 'static {}

impl<T> Scalar for T where T: Float + LowerExp + Debug + Send + Sync + 'static {}

/// A linear map `R^n → R^n`, applied without ever materializing its matrix.
///
/// For the solvers to be correct the map must be deterministic and represent
/// a fixed symmetric positive-definite matrix. Nothing here verifies that.
pub trait LinearOperator<T> {
    /// Compute `A · x`.
    fn apply(&self, x: &[T]) -> Vec<T>;
}

/// Any closure `|x: &[T]| -> Vec<T>` is an operator.
impl<T, F> LinearOperator<T> for F
where
    F: Fn(&[T]) -> Vec<T>,
{
    fn apply(&self, x: &[T]) -> Vec<T> {
        self(x)
    }
}

/// The identity map. Useful as a no-op preconditioner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<T: Clone> LinearOperator<T> for Identity {
    fn apply(&self, x: &[T]) -> Vec<T> {
        x.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_operators() {
        let scale = |x: &[f64]| x.iter().map(|v| 2.0 * v).collect::<Vec<_>>();
        assert_eq!(scale.apply(&[1.0, -3.0]), vec![2.0, -6.0]);
        // references to operators are operators too
        let by_ref = &scale;
        assert_eq!(by_ref.apply(&[0.5]), vec![1.0]);
    }

    #[test]
    fn identity_copies_input() {
        let x = vec![1.0_f32, 2.0, 3.0];
        let y = LinearOperator::<f32>::apply(&Identity, &x);
        assert_eq!(x, y);
    }
}
