//! Dense vector algebra over slices.
//!
//! Every routine allocates its result, so callers can build a fresh state
//! from the previous one without aliasing. With the `rayon` feature enabled
//! dot products are reduced in parallel.

use num_traits::Float;

/// Computes `xᵀ y`.
pub fn dot<T: Float + Send + Sync>(x: &[T], y: &[T]) -> T {
    assert_eq!(x.len(), y.len(), "Vectors must have the same length");
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        x.par_iter()
            .zip(y.par_iter())
            .map(|(xi, yi)| *xi * *yi)
            .reduce(|| T::zero(), |acc, v| acc + v)
    }
    #[cfg(not(feature = "rayon"))]
    {
        x.iter()
            .zip(y.iter())
            .map(|(xi, yi)| *xi * *yi)
            .fold(T::zero(), |acc, v| acc + v)
    }
}

/// Computes `‖x‖²`.
pub fn sqr_norm<T: Float + Send + Sync>(x: &[T]) -> T {
    dot(x, x)
}

/// Computes `‖x‖₂`.
pub fn norm<T: Float + Send + Sync>(x: &[T]) -> T {
    sqr_norm(x).sqrt()
}

/// Returns `a + k·b`.
pub fn plus_scaled<T: Float>(a: &[T], k: T, b: &[T]) -> Vec<T> {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");
    a.iter().zip(b).map(|(&ai, &bi)| ai + k * bi).collect()
}

/// Returns `a − b`.
pub fn minus<T: Float>(a: &[T], b: &[T]) -> Vec<T> {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");
    a.iter().zip(b).map(|(&ai, &bi)| ai - bi).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn dot_and_norms() {
        let x = [3.0, 4.0];
        let y = [1.0, -2.0];
        assert_eq!(dot(&x, &y), -5.0);
        assert_eq!(sqr_norm(&x), 25.0);
        assert_abs_diff_eq!(norm(&x), 5.0, epsilon = 1e-15);
    }

    #[test]
    fn scaled_add_and_subtract() {
        let a = [1.0, 2.0, 3.0];
        let b = [0.5, 0.0, -1.0];
        assert_eq!(plus_scaled(&a, 2.0, &b), vec![2.0, 2.0, 1.0]);
        assert_eq!(minus(&a, &b), vec![0.5, 2.0, 4.0]);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn mismatched_lengths_panic() {
        let _ = dot(&[1.0, 2.0], &[1.0]);
    }
}
