//! The `MissionEngine`: applies one mission to a registry.

use tracing::debug;

use cd_core::{
    CityIdx, CityName, DistributionCenter, DrainOrder, EngineConfig, Mission, Package, PackageId,
    Registry, Vehicle,
};

use crate::{Leg, MissionAbort, MissionOutcome, MissionReport, MissionWarning};

/// The three centers of a mission, resolved to registry positions.
///
/// Indices may repeat (`A-A-B` is a valid route); every step re-borrows the
/// registry, so aliasing is never an issue.
#[derive(Copy, Clone, Debug)]
struct Route {
    source:      CityIdx,
    middle:      CityIdx,
    destination: CityIdx,
}

/// Executes missions against a [`Registry`] under a fixed [`EngineConfig`].
///
/// The engine holds no state between missions; everything it mutates lives
/// in the registry passed to [`execute`][Self::execute].
#[derive(Clone, Debug, Default)]
pub struct MissionEngine {
    config: EngineConfig,
}

impl MissionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run `mission` to completion or abort it.
    ///
    /// On `Err` the registry is exactly as it was before the call.  On `Ok`
    /// the vehicle is parked at the destination and the report lists every
    /// package that moved plus any warnings.
    pub fn execute(&self, registry: &mut Registry, mission: &Mission) -> MissionOutcome {
        // ── ① Resolve ─────────────────────────────────────────────────────
        let route = resolve(registry, mission)?;

        // ── ② Take a vehicle ──────────────────────────────────────────────
        let mut vehicle = registry[route.source]
            .center_mut()
            .vehicles_mut()
            .dequeue()
            .ok_or_else(|| MissionAbort::NoVehicle(mission.source.clone()))?;
        debug!(vehicle = %vehicle.id(), %mission, "vehicle dispatched");

        let mut warnings = Vec::new();

        // ── ③ ④ Load at source, then middle ───────────────────────────────
        let loaded_at_source = load_leg(
            registry[route.source].center_mut(),
            &mut vehicle,
            mission.load_at_source,
            Leg::Source,
            &mission.source,
            &mut warnings,
        );
        let loaded_at_middle = load_leg(
            registry[route.middle].center_mut(),
            &mut vehicle,
            mission.load_at_middle,
            Leg::Middle,
            &mission.middle,
            &mut warnings,
        );

        // ── ⑤ Drop-off at middle ──────────────────────────────────────────
        let dropped = self.drop_off(
            &mut vehicle,
            registry[route.middle].center_mut(),
            &mission.drop_positions,
            &mut warnings,
        );

        // ── ⑥ ⑦ Park at destination, then unload what is left ─────────────
        let vehicle_id = vehicle.id().clone();
        let delivered = self.deliver(vehicle, registry[route.destination].center_mut());

        Ok(MissionReport {
            vehicle: vehicle_id,
            loaded_at_source,
            loaded_at_middle,
            dropped,
            delivered,
            warnings,
        })
    }

    /// Remove the cargo slots named by `positions`, highest index first, and
    /// push each removed package onto `center`'s stack.
    ///
    /// Positions are converted with the configured [`IndexBase`] and checked
    /// against the cargo as it stands before any removal.  Repeated
    /// positions are removed once.
    ///
    /// [`IndexBase`]: cd_core::IndexBase
    fn drop_off(
        &self,
        vehicle:   &mut Vehicle,
        center:    &mut DistributionCenter,
        positions: &[usize],
        warnings:  &mut Vec<MissionWarning>,
    ) -> Vec<PackageId> {
        let cargo_len = vehicle.cargo().len();

        let mut indices = Vec::with_capacity(positions.len());
        for &position in positions {
            match self.config.index_base.to_index(position) {
                Some(i) if i < cargo_len => indices.push(i),
                _ => warnings.push(MissionWarning::InvalidDropPosition { position, cargo_len }),
            }
        }

        // Descending: removing a high index never shifts a lower one.
        indices.sort_unstable_by(|a, b| b.cmp(a));
        indices.dedup();

        let mut dropped = Vec::with_capacity(indices.len());
        for i in indices {
            if let Some(package) = vehicle.cargo_mut().remove(i) {
                debug!(package = %package.id(), index = i, "dropped at middle");
                dropped.push(package.id().clone());
                center.packages_mut().push(package);
            }
        }
        dropped
    }

    /// Park `vehicle` at `center`, then move its remaining cargo onto
    /// `center`'s stack in the configured [`DrainOrder`].
    fn deliver(&self, mut vehicle: Vehicle, center: &mut DistributionCenter) -> Vec<PackageId> {
        let mut cargo = std::mem::take(vehicle.cargo_mut());
        center.vehicles_mut().enqueue(vehicle);

        let mut delivered = Vec::with_capacity(cargo.len());
        let mut unload = |package: Package| {
            delivered.push(package.id().clone());
            center.packages_mut().push(package);
        };
        match self.config.drain_order {
            DrainOrder::FrontToBack => cargo.drain().for_each(&mut unload),
            DrainOrder::BackToFront => cargo.drain().rev().for_each(&mut unload),
        }
        delivered
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Look up all three route cities.  Reports every missing name, once each.
fn resolve(registry: &Registry, mission: &Mission) -> Result<Route, MissionAbort> {
    let lookup = mission.route().map(|name| registry.resolve(name.as_str()));
    match lookup {
        [Some(source), Some(middle), Some(destination)] => Ok(Route { source, middle, destination }),
        _ => {
            let mut missing = Vec::new();
            for (name, idx) in mission.route().into_iter().zip(lookup) {
                if idx.is_none() && !missing.contains(name) {
                    missing.push(name.clone());
                }
            }
            Err(MissionAbort::CityNotFound(missing))
        }
    }
}

/// Pop up to `count` packages from `center` onto the front of the cargo.
///
/// Stops early, recording a warning, when the stack runs out.  Returns the
/// number actually loaded.
fn load_leg(
    center:   &mut DistributionCenter,
    vehicle:  &mut Vehicle,
    count:    usize,
    leg:      Leg,
    city:     &CityName,
    warnings: &mut Vec<MissionWarning>,
) -> usize {
    let mut loaded = 0;
    while loaded < count {
        let Some(package) = center.packages_mut().pop() else {
            warnings.push(MissionWarning::InsufficientPackages {
                city: city.clone(),
                leg,
                requested: count,
                loaded,
            });
            break;
        };
        vehicle.load(package);
        loaded += 1;
    }
    loaded
}
