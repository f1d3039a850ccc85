//! `cd-output` — final-inventory writers for the cargo delivery simulation.
//!
//! | Feature   | Writer          | Layout                                          |
//! |-----------|-----------------|-------------------------------------------------|
//! | *(none)*  | [`TextWriter`]  | name, `Packages:`, ids, `Vehicles:`, ids, rule  |
//! | *(none)*  | [`CsvWriter`]   | `city,kind,position,id`, one row per item       |
//! | `sqlite`  | `SqliteWriter`  | table `inventory(city, kind, position, id)`     |
//!
//! All writers implement [`InventoryWriter`] and are driven by
//! [`write_registry`], which visits every city in registration order.
//! Reading a city never modifies it: stacks and queues are walked with
//! their borrowing iterators.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cd_output::{TextWriter, write_registry};
//!
//! let mut writer = TextWriter::from_path(Path::new("result.txt"))?;
//! write_registry(sim.registry(), &mut writer)?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod text;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::{CityInventory, InventoryRow, ItemKind};
pub use text::TextWriter;
pub use writer::{InventoryWriter, write_registry};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
