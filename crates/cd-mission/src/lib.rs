//! `cd-mission` — the mission engine and the loop that feeds it.
//!
//! # Mission algorithm
//!
//! ```text
//! for mission in missions (file order, one at a time):
//!   ① Resolve   — look up source, middle, destination.  Any missing → abort.
//!   ② Vehicle   — dequeue one vehicle at the source.  None → abort.
//!   ③ Load A    — pop ≤ a packages at the source onto the cargo front.
//!   ④ Load B    — pop ≤ b packages at the middle onto the cargo front.
//!   ⑤ Drop-off  — remove the requested cargo indices, highest first, and
//!                 push each onto the middle city's stack.
//!   ⑥ Park      — enqueue the vehicle at the destination.
//!   ⑦ Deliver   — unload the remaining cargo onto the destination stack.
//! ```
//!
//! Aborts (①, ②) leave every container untouched.  Running short of
//! packages in ③/④ or naming a missing cargo slot in ⑤ is recorded as a
//! [`MissionWarning`] and the mission carries on.  Nothing is rolled back.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`engine`]   | `MissionEngine` — executes one mission                    |
//! | [`outcome`]  | `MissionReport`, `MissionWarning`, `MissionAbort`, `Leg`  |
//! | [`observer`] | `MissionObserver`, `NoopObserver`, `LoggingObserver`      |
//! | [`builder`]  | `SimBuilder`, `LoadSummary`                               |
//! | [`sim`]      | `Simulation`, `RunSummary`                                |
//! | [`error`]    | `SimError`, `SimResult<T>`                                |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cd_core::EngineConfig;
//! use cd_mission::{LoggingObserver, SimBuilder};
//!
//! let inputs = cd_input::load_inputs(&paths)?;
//! let mut sim = SimBuilder::new(EngineConfig::default())
//!     .inputs(&inputs)
//!     .build()?;
//! let summary = sim.run(&inputs.missions, &mut LoggingObserver);
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod outcome;
pub mod sim;


pub use builder::{LoadSummary, SimBuilder};
pub use engine::MissionEngine;
pub use error::{SimError, SimResult};
pub use observer::{LoggingObserver, MissionObserver, NoopObserver};
pub use outcome::{Leg, MissionAbort, MissionOutcome, MissionReport, MissionWarning};
pub use sim::{RunSummary, Simulation};
