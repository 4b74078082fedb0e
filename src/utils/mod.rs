//! Convergence bookkeeping and iteration diagnostics shared by the drivers.

pub mod convergence;
pub mod monitor;

pub use convergence::{BestSolution, Convergence, SolveStats};
pub use monitor::{IterationReport, ObjectiveMonitor};
