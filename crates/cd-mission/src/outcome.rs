//! What a mission reports back to its caller.

use std::fmt;

use thiserror::Error;

use cd_core::{CityName, PackageId, VehicleId};

/// Which loading step a warning refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Leg {
    Source,
    Middle,
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Leg::Source => "source",
            Leg::Middle => "middle",
        })
    }
}

/// A recoverable problem.  The mission still ran to completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MissionWarning {
    /// The city's stack emptied before `requested` packages were loaded.
    InsufficientPackages {
        city:      CityName,
        leg:       Leg,
        requested: usize,
        loaded:    usize,
    },
    /// A drop-off position did not address any package in the cargo.
    InvalidDropPosition {
        position:  usize,
        cargo_len: usize,
    },
}

impl fmt::Display for MissionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissionWarning::InsufficientPackages { city, leg, requested, loaded } => write!(
                f,
                "not enough packages in {city} ({leg}): requested {requested}, loaded {loaded}"
            ),
            MissionWarning::InvalidDropPosition { position, cargo_len } => write!(
                f,
                "invalid drop-off position {position} for cargo of {cargo_len}"
            ),
        }
    }
}

/// Why a mission was abandoned.  An aborted mission changed nothing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MissionAbort {
    /// One or more route cities are not registered.  Lists each missing
    /// name once, in route order.
    #[error("city not found: {}", join(.0))]
    CityNotFound(Vec<CityName>),

    #[error("no vehicle available in source city {0}")]
    NoVehicle(CityName),
}

fn join(names: &[CityName]) -> String {
    names
        .iter()
        .map(CityName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The record of a mission that ran to completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissionReport {
    pub vehicle:          VehicleId,
    pub loaded_at_source: usize,
    pub loaded_at_middle: usize,
    /// Packages left at the middle city, in removal order.
    pub dropped:          Vec<PackageId>,
    /// Packages unloaded at the destination, in unloading order.
    pub delivered:        Vec<PackageId>,
    pub warnings:         Vec<MissionWarning>,
}

impl MissionReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Result of one mission.
pub type MissionOutcome = Result<MissionReport, MissionAbort>;
