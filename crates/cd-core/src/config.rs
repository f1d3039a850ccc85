//! Engine configuration.
//!
//! Two mission details are conventions rather than facts of the domain:
//! how drop-off positions count, and which end of the cargo hold unloads
//! first at the destination.  Both are fixed per run by [`EngineConfig`].
//!
//! | Field          | Default        | Alternatives     |
//! |----------------|----------------|------------------|
//! | `index_base`   | `Zero`         | `One`            |
//! | `drain_order`  | `FrontToBack`  | `BackToFront`    |

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// How drop-off positions in a mission map onto cargo indices.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum IndexBase {
    /// Position `p` is cargo index `p`.
    #[default]
    Zero,
    /// Position `p` is cargo index `p - 1`; position 0 addresses nothing.
    One,
}

impl IndexBase {
    /// Convert a mission position into a cargo index.
    ///
    /// Returns `None` for position 0 under [`IndexBase::One`].  Bounds
    /// against the actual cargo are the caller's concern.
    pub fn to_index(self, position: usize) -> Option<usize> {
        match self {
            IndexBase::Zero => Some(position),
            IndexBase::One  => position.checked_sub(1),
        }
    }
}

/// Order in which cargo left after drop-off is unloaded at the destination.
///
/// Each unloaded package is pushed onto the destination stack, so the
/// package unloaded last ends up on top.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DrainOrder {
    /// Remove from the cargo front; the former cargo back ends on top.
    #[default]
    FrontToBack,
    /// Remove from the cargo back; the former cargo front ends on top.
    BackToFront,
}

/// Per-run engine settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    pub index_base:  IndexBase,
    pub drain_order: DrainOrder,
}

impl EngineConfig {
    pub fn with_index_base(mut self, index_base: IndexBase) -> Self {
        self.index_base = index_base;
        self
    }

    pub fn with_drain_order(mut self, drain_order: DrainOrder) -> Self {
        self.drain_order = drain_order;
        self
    }
}

// ── Text forms (CLI flags) ────────────────────────────────────────────────────

impl fmt::Display for IndexBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IndexBase::Zero => "zero",
            IndexBase::One  => "one",
        })
    }
}

impl FromStr for IndexBase {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" | "0" => Ok(IndexBase::Zero),
            "one" | "1"  => Ok(IndexBase::One),
            other => Err(CoreError::Config(format!(
                "invalid index base {other:?}: expected \"zero\" or \"one\""
            ))),
        }
    }
}

impl fmt::Display for DrainOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DrainOrder::FrontToBack => "front-to-back",
            DrainOrder::BackToFront => "back-to-front",
        })
    }
}

impl FromStr for DrainOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "front-to-back" | "front" => Ok(DrainOrder::FrontToBack),
            "back-to-front" | "back"  => Ok(DrainOrder::BackToFront),
            other => Err(CoreError::Config(format!(
                "invalid drain order {other:?}: expected \"front-to-back\" or \"back-to-front\""
            ))),
        }
    }
}
