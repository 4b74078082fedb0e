//! Per-iteration diagnostics.
//!
//! Each iteration of a monitored solve produces an [`IterationReport`]. When a
//! sink is attached the report is written to it as one line; an increase of
//! the objective (which should never happen for an SPD operator in exact
//! arithmetic) is flagged with `incr` and logged as a warning. None of this
//! ever stops a solve.

use std::fmt;
use std::io::Write;

use crate::core::traits::Scalar;

/// Snapshot of one iteration for diagnostic output.
#[derive(Clone, Debug, PartialEq)]
pub struct IterationReport<T> {
    pub iteration: usize,
    pub objective: T,
    pub residual: T,
    /// Objective went up compared to the previous report.
    pub increased: bool,
}

impl<T: Scalar> fmt::Display for IterationReport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:6}: f:{:13.6e} r:{:10.3e} {:>4}",
            self.iteration,
            self.objective,
            self.residual,
            if self.increased { "incr" } else { "" }
        )
    }
}

/// Watches the objective across iterations and forwards reports to a sink.
pub struct ObjectiveMonitor<T, W> {
    sink: Option<W>,
    prev_objective: Option<T>,
}

impl<T: Scalar, W: Write> ObjectiveMonitor<T, W> {
    pub fn new(sink: Option<W>) -> Self {
        Self { sink, prev_objective: None }
    }

    /// Whether reports go anywhere. Computing the objective is skipped otherwise.
    pub fn is_active(&self) -> bool {
        self.sink.is_some() || log::log_enabled!(log::Level::Debug)
    }

    pub fn observe(&mut self, iteration: usize, objective: T, residual: T) -> IterationReport<T> {
        let increased = self.prev_objective.is_some_and(|prev| objective > prev);
        self.prev_objective = Some(objective);
        let report = IterationReport { iteration, objective, residual, increased };
        if increased {
            log::warn!(
                "objective increased at iteration {}: {:e} (numerical trouble?)",
                iteration,
                objective
            );
        }
        log::debug!("{}", report);
        if let Some(sink) = self.sink.as_mut() {
            if let Err(err) = writeln!(sink, "{}", report) {
                log::warn!("diagnostic sink failed, disabling it: {}", err);
                self.sink = None;
            }
        }
        report
    }
}
