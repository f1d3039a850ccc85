//! `cd-input` — parsing of the four line-oriented input files.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`record`]  | `PackageRecord`, `VehicleRecord`, `InputKind`               |
//! | [`loader`]  | `load_*_path` / `load_*_reader` per file, `load_inputs`     |
//! | [`error`]   | `InputError`, `InputResult<T>`                              |
//!
//! # File formats
//!
//! ```text
//! cities     Istanbul                      one name per line
//! packages   P17 Istanbul                  id city
//! vehicles   V3 Ankara 120.5               id city volume
//! missions   Istanbul-Ankara-Izmir-2-1-0,1 source-middle-dest-a-b-positions
//! ```
//!
//! Blank lines are skipped everywhere.  Any other malformed line is a fatal
//! [`InputError::Parse`]: a run never proceeds on partially understood input.
//! Whether the named cities exist is *not* checked here; that is the
//! registry's job.

pub mod error;
pub mod loader;
pub mod record;

#[cfg(test)]
mod tests;

pub use error::{InputError, InputResult};
pub use loader::{
    load_cities_path, load_cities_reader, load_inputs, load_missions_path, load_missions_reader,
    load_packages_path, load_packages_reader, load_vehicles_path, load_vehicles_reader, InputPaths,
    InputSet,
};
pub use record::{InputKind, PackageRecord, VehicleRecord};
