use thiserror::Error;

// Unified error type for spdsolve

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// `pᵀ A p` vanished: the search direction is A-orthogonal to itself.
    /// The Krylov subspace is exhausted or the operator is not positive-definite.
    #[error("breakdown at iteration {iteration}: search direction is A-orthogonal to itself (p^T A p = 0)")]
    Breakdown { iteration: usize },
    #[error("dimension mismatch for {what}: expected length {expected}, found {found}")]
    InvalidDimension {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}

impl SolveError {
    /// Shorthand used by the sequences when validating vector lengths.
    pub(crate) fn check_len(what: &'static str, expected: usize, found: usize) -> Result<(), Self> {
        if expected == found {
            Ok(())
        } else {
            Err(SolveError::InvalidDimension { what, expected, found })
        }
    }
}
