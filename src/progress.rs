// src/progress.rs
use crate::runner::CycleReport;

/// Status sink for the poll loop. Frontends implement this to surface
/// per-cycle outcomes; logging happens regardless.
pub trait Progress {
    /// Called before cycle `n` (1-based) starts.
    fn begin(&mut self, _cycle: u64) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when cycle `n` completes, successful or not.
    fn finish(&mut self, _cycle: u64, _report: &CycleReport) {}
}
