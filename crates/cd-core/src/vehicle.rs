//! The `Vehicle` type and its cargo hold.

use cd_collections::OrderedSequence;

use crate::{Package, VehicleId};

/// A vehicle parked in a city's queue or carrying cargo on a mission.
///
/// `capacity` is the volume read from input.  Packages carry no volume, so
/// the capacity is informational and nothing checks cargo against it.
#[derive(Clone, Debug, PartialEq)]
pub struct Vehicle {
    id:       VehicleId,
    capacity: f64,
    /// Packages aboard, index 0 being the most recently loaded.
    cargo:    OrderedSequence<Package>,
}

impl Vehicle {
    /// Create a vehicle with an empty hold.
    pub fn new(id: impl Into<VehicleId>, capacity: f64) -> Self {
        Self {
            id:       id.into(),
            capacity,
            cargo:    OrderedSequence::new(),
        }
    }

    pub fn id(&self) -> &VehicleId {
        &self.id
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn cargo(&self) -> &OrderedSequence<Package> {
        &self.cargo
    }

    pub fn cargo_mut(&mut self) -> &mut OrderedSequence<Package> {
        &mut self.cargo
    }

    /// Load `package` at the front of the hold (cargo index 0).
    pub fn load(&mut self, package: Package) {
        self.cargo.push_front(package);
    }
}
