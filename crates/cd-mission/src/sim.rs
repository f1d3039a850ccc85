//! The `Simulation` struct and its mission loop.

use cd_core::{Mission, Registry};

use crate::{LoadSummary, MissionEngine, MissionObserver, MissionOutcome};

/// Tally of mission outcomes over one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Missions that ran to completion, with or without warnings.
    pub completed:               usize,
    /// Subset of `completed` that reported at least one warning.
    pub completed_with_warnings: usize,
    pub aborted:                 usize,
    /// Total warnings across all completed missions.
    pub warnings:                usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.completed + self.aborted
    }

    fn record(&mut self, outcome: &MissionOutcome) {
        match outcome {
            Ok(report) => {
                self.completed += 1;
                if report.has_warnings() {
                    self.completed_with_warnings += 1;
                    self.warnings += report.warnings.len();
                }
            }
            Err(_) => self.aborted += 1,
        }
    }
}

/// A populated registry plus the engine that mutates it.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Simulation {
    pub engine:   MissionEngine,
    /// Every city's inventory.  Read it after [`run`][Self::run] to write
    /// results.
    pub registry: Registry,
    /// What the builder loaded and skipped.
    pub load:     LoadSummary,
}

impl Simulation {
    /// Apply `missions` strictly in order, one at a time.
    ///
    /// Aborted missions change nothing and do not stop the run.  Calls
    /// observer hooks around every mission.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: MissionObserver>(&mut self, missions: &[Mission], observer: &mut O) -> RunSummary {
        let mut summary = RunSummary::default();
        for (seq, mission) in missions.iter().enumerate() {
            observer.on_mission_start(seq, mission);
            let outcome = self.execute(mission);
            summary.record(&outcome);
            observer.on_mission_end(seq, mission, &outcome);
        }
        observer.on_run_end(&summary);
        summary
    }

    /// Apply a single mission.
    pub fn execute(&mut self, mission: &Mission) -> MissionOutcome {
        self.engine.execute(&mut self.registry, mission)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
