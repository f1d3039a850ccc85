//! Typed records produced by the loaders.

use std::fmt;

use cd_core::{CityName, PackageId, VehicleId};

/// Which input file a record or error belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    Cities,
    Packages,
    Vehicles,
    Missions,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputKind::Cities   => "cities",
            InputKind::Packages => "packages",
            InputKind::Vehicles => "vehicles",
            InputKind::Missions => "missions",
        })
    }
}

/// One line of the packages file: a package waiting at `city`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageRecord {
    pub id:   PackageId,
    pub city: CityName,
}

/// One line of the vehicles file: a vehicle parked at `city`.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleRecord {
    pub id:     VehicleId,
    pub city:   CityName,
    pub volume: f64,
}
