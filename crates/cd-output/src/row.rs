//! Snapshot types handed to writers.

use std::fmt;

use cd_core::{City, CityName, PackageId, VehicleId};

/// What an [`InventoryRow`] refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Package,
    Vehicle,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Package => "package",
            ItemKind::Vehicle => "vehicle",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One city's remaining inventory, copied out of the registry.
///
/// `packages` is in pop order (top of the stack first) and `vehicles` in
/// dequeue order (front of the queue first).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CityInventory {
    pub city:     CityName,
    pub packages: Vec<PackageId>,
    pub vehicles: Vec<VehicleId>,
}

impl CityInventory {
    /// Snapshot `city` without popping or dequeuing anything.
    pub fn from_city(city: &City) -> Self {
        let center = city.center();
        Self {
            city:     city.name().clone(),
            packages: center.packages().iter().map(|p| p.id().clone()).collect(),
            vehicles: center.vehicles().iter().map(|v| v.id().clone()).collect(),
        }
    }

    /// Flatten into one row per item: packages first, then vehicles, each
    /// numbered from 0 within its kind.
    pub fn rows(&self) -> impl Iterator<Item = InventoryRow<'_>> + '_ {
        let packages = self.packages.iter().enumerate().map(|(position, id)| InventoryRow {
            city: self.city.as_str(),
            kind: ItemKind::Package,
            position,
            id: id.as_str(),
        });
        let vehicles = self.vehicles.iter().enumerate().map(|(position, id)| InventoryRow {
            city: self.city.as_str(),
            kind: ItemKind::Vehicle,
            position,
            id: id.as_str(),
        });
        packages.chain(vehicles)
    }
}

/// A single item in a city's inventory, as written by tabular backends.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InventoryRow<'a> {
    pub city:     &'a str,
    pub kind:     ItemKind,
    pub position: usize,
    pub id:       &'a str,
}
