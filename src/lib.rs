//! spdsolve: matrix-free Conjugate Gradient and Preconditioned Conjugate Gradient
//!
//! Solves `A x = b` for symmetric positive-definite `A` given only as a
//! linear operator, i.e. a function computing `A · x`. The matrix is never
//! formed, so implicit operators (`VᵀV`, stencils, transforms) are solved
//! directly from their action.
//!
//! ```
//! use spdsolve::{Identity, solve, solve_preconditioned};
//!
//! let a = |x: &[f64]| vec![3.0 * x[0] - 2.0 * x[1], -2.0 * x[0] + 2.0 * x[1]];
//! let b = [0.0, 2.0];
//! assert_eq!(solve(&a, &b, &[0.0, 0.0], 0.0, 2).unwrap(), vec![2.0, 3.0]);
//! assert_eq!(
//!     solve_preconditioned(&a, &b, &Identity, &[0.0, 0.0], 0.0, 2).unwrap(),
//!     vec![2.0, 3.0]
//! );
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use self::config::*;
pub use self::core::*;
pub use self::error::*;
pub use self::solver::*;
pub use self::utils::*;
