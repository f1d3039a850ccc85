//! Fluent builder for constructing a [`Simulation`].

use tracing::warn;

use cd_core::{CityName, CoreError, EngineConfig, Registry};
use cd_input::{InputSet, PackageRecord, VehicleRecord};

use crate::{MissionEngine, SimResult, Simulation};

/// Counts of what [`SimBuilder::build`] placed in the registry and what it
/// had to skip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub cities:           usize,
    pub duplicate_cities: usize,
    pub packages:         usize,
    pub skipped_packages: usize,
    pub vehicles:         usize,
    pub skipped_vehicles: usize,
}

/// Fluent builder for [`Simulation`].
///
/// # Inputs
///
/// | Method          | Default   | Applied                                    |
/// |-----------------|-----------|--------------------------------------------|
/// | `.cities(v)`    | none      | registered in order; repeats keep the first |
/// | `.packages(v)`  | none      | pushed in order onto their city's stack    |
/// | `.vehicles(v)`  | none      | enqueued in order at their city            |
/// | `.inputs(&set)` | —         | shorthand for all three                    |
///
/// A package or vehicle naming an unregistered city is skipped with a
/// warning and counted in [`LoadSummary`].
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(EngineConfig::default())
///     .cities(vec!["X".into(), "Y".into()])
///     .packages(packages)
///     .vehicles(vehicles)
///     .build()?;
/// ```
pub struct SimBuilder {
    config:   EngineConfig,
    cities:   Vec<CityName>,
    packages: Vec<PackageRecord>,
    vehicles: Vec<VehicleRecord>,
}

impl SimBuilder {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            cities:   Vec::new(),
            packages: Vec::new(),
            vehicles: Vec::new(),
        }
    }

    pub fn cities(mut self, cities: Vec<CityName>) -> Self {
        self.cities = cities;
        self
    }

    pub fn packages(mut self, packages: Vec<PackageRecord>) -> Self {
        self.packages = packages;
        self
    }

    pub fn vehicles(mut self, vehicles: Vec<VehicleRecord>) -> Self {
        self.vehicles = vehicles;
        self
    }

    /// Take cities, packages and vehicles from a loaded [`InputSet`].
    /// Missions are not part of the build; pass them to
    /// [`Simulation::run`].
    pub fn inputs(self, inputs: &InputSet) -> Self {
        self.cities(inputs.cities.clone())
            .packages(inputs.packages.clone())
            .vehicles(inputs.vehicles.clone())
    }

    /// Populate the registry and return a ready-to-run [`Simulation`].
    pub fn build(self) -> SimResult<Simulation> {
        let mut registry = Registry::new();
        let mut load = LoadSummary::default();

        // ── Cities ────────────────────────────────────────────────────────
        for name in self.cities {
            match registry.register(name) {
                Ok(_) => load.cities += 1,
                Err(CoreError::DuplicateCity(name)) => {
                    warn!(city = %name, "duplicate city ignored");
                    load.duplicate_cities += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }

        // ── Packages ──────────────────────────────────────────────────────
        for rec in self.packages {
            match registry.stock_package(rec.id.clone(), rec.city.as_str()) {
                Ok(()) => load.packages += 1,
                Err(CoreError::CityNotFound(city)) => {
                    warn!(package = %rec.id, %city, "package skipped: city not found");
                    load.skipped_packages += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }

        // ── Vehicles ──────────────────────────────────────────────────────
        for rec in self.vehicles {
            match registry.station_vehicle(rec.id.clone(), rec.city.as_str(), rec.volume) {
                Ok(()) => load.vehicles += 1,
                Err(CoreError::CityNotFound(city)) => {
                    warn!(vehicle = %rec.id, %city, "vehicle skipped: city not found");
                    load.skipped_vehicles += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(Simulation {
            engine: MissionEngine::new(self.config),
            registry,
            load,
        })
    }
}
