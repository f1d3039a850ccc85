//! `cd-core` — the domain model of the cargo delivery simulation.
//!
//! Everything here is plain data plus the containers from `cd-collections`;
//! the mission algorithm that mutates it lives in `cd-mission`.
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `CityIdx`, `CityName`, `PackageId`, `VehicleId`         |
//! | [`mission`]   | `Mission` — one parsed missions-file line               |
//! | [`package`]   | `Package`                                               |
//! | [`vehicle`]   | `Vehicle` and its cargo hold                            |
//! | [`city`]      | `City`, `DistributionCenter`                            |
//! | [`registry`]  | `Registry` — name → city map, registration ordered      |
//! | [`config`]    | `EngineConfig`, `IndexBase`, `DrainOrder`               |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                    |
//! |-----------|-----------------------------------------------------------|
//! | `serde`   | Adds `Serialize`/`Deserialize` to ids and configuration.  |
//! | `fx-hash` | Uses `rustc-hash` for the registry's name index.          |

pub mod city;
pub mod config;
pub mod error;
pub mod ids;
pub mod mission;
pub mod package;
pub mod registry;
pub mod vehicle;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use city::{City, DistributionCenter};
pub use config::{DrainOrder, EngineConfig, IndexBase};
pub use error::{CoreError, CoreResult};
pub use ids::{CityIdx, CityName, PackageId, VehicleId};
pub use mission::Mission;
pub use package::Package;
pub use registry::Registry;
pub use vehicle::Vehicle;
