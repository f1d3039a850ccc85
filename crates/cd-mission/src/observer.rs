//! Mission observer trait for progress reporting and logging.

use tracing::{info, warn};

use cd_core::Mission;

use crate::{MissionOutcome, RunSummary};

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] around
/// each mission.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  `seq` is the mission's 0-based
/// position in the run.
pub trait MissionObserver {
    /// Called before the engine touches the registry.
    fn on_mission_start(&mut self, _seq: usize, _mission: &Mission) {}

    /// Called with the mission's outcome, after the registry was updated.
    fn on_mission_end(&mut self, _seq: usize, _mission: &Mission, _outcome: &MissionOutcome) {}

    /// Called once after the last mission.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`MissionObserver`] that does nothing.
pub struct NoopObserver;

impl MissionObserver for NoopObserver {}

/// Emits one `tracing` event per warning and per mission outcome.
///
/// | Event                      | Level  |
/// |----------------------------|--------|
/// | mission completed          | `info` |
/// | per-mission warning        | `warn` |
/// | mission aborted            | `warn` |
/// | run finished (summary)     | `info` |
pub struct LoggingObserver;

impl MissionObserver for LoggingObserver {
    fn on_mission_end(&mut self, seq: usize, mission: &Mission, outcome: &MissionOutcome) {
        match outcome {
            Ok(report) => {
                for warning in &report.warnings {
                    warn!(seq, %mission, "{warning}");
                }
                info!(
                    seq,
                    %mission,
                    vehicle   = %report.vehicle,
                    dropped   = report.dropped.len(),
                    delivered = report.delivered.len(),
                    "mission completed"
                );
            }
            Err(abort) => warn!(seq, %mission, "mission aborted: {abort}"),
        }
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        info!(
            completed     = summary.completed,
            with_warnings = summary.completed_with_warnings,
            aborted       = summary.aborted,
            "all missions processed"
        );
    }
}
