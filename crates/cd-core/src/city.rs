//! `City` and its `DistributionCenter`.

use cd_collections::{Queue, Stack};

use crate::{CityName, Package, Vehicle};

/// A city's holding area: one package stack and one vehicle queue.
///
/// Both containers start empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DistributionCenter {
    packages: Stack<Package>,
    vehicles: Queue<Vehicle>,
}

impl DistributionCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn packages(&self) -> &Stack<Package> {
        &self.packages
    }

    pub fn packages_mut(&mut self) -> &mut Stack<Package> {
        &mut self.packages
    }

    pub fn vehicles(&self) -> &Queue<Vehicle> {
        &self.vehicles
    }

    pub fn vehicles_mut(&mut self) -> &mut Queue<Vehicle> {
        &mut self.vehicles
    }
}

/// A named city owning exactly one distribution center.
#[derive(Clone, Debug, PartialEq)]
pub struct City {
    name:   CityName,
    center: DistributionCenter,
}

impl City {
    pub fn new(name: impl Into<CityName>) -> Self {
        Self {
            name:   name.into(),
            center: DistributionCenter::new(),
        }
    }

    pub fn name(&self) -> &CityName {
        &self.name
    }

    pub fn center(&self) -> &DistributionCenter {
        &self.center
    }

    pub fn center_mut(&mut self) -> &mut DistributionCenter {
        &mut self.center
    }
}
