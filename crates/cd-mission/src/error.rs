//! Error types for cd-mission.

use cd_core::CoreError;
use thiserror::Error;

/// Failures while assembling a [`Simulation`][crate::Simulation].
///
/// Mission-level problems are never errors; they are reported through
/// [`MissionOutcome`][crate::MissionOutcome].
#[derive(Debug, Error)]
pub enum SimError {
    #[error("registry error: {0}")]
    Core(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
