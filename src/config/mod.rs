//! API options for the solve drivers.

pub mod options;

pub use options::SolveOptions;
