//! Operator abstraction and the vector algebra the solvers are built on.

pub mod traits;
pub mod vector;
pub mod wrappers;

pub use traits::{Identity, LinearOperator, Scalar};
pub use wrappers::Normal;
