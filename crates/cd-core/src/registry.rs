//! The city registry: an explicit name → `City` map.
//!
//! # Data layout
//!
//! Cities are stored densely in registration order; a hash index maps each
//! name to its [`CityIdx`].  Iteration therefore follows the order the
//! cities file listed them, which is also the order results are written in.
//!
//! The registry is built once before missions run.  Nothing removes a city,
//! so a `CityIdx` handed out by [`Registry::resolve`] stays valid for the
//! lifetime of the registry.

use std::ops::{Index, IndexMut};

use crate::{City, CityIdx, CityName, CoreError, CoreResult, Package, PackageId, Vehicle, VehicleId};

#[cfg(not(feature = "fx-hash"))]
type NameIndex = std::collections::HashMap<CityName, CityIdx>;
#[cfg(feature = "fx-hash")]
type NameIndex = rustc_hash::FxHashMap<CityName, CityIdx>;

/// All cities of a run, keyed by unique name.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    cities: Vec<City>,
    index:  NameIndex,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new, empty city.
    ///
    /// # Errors
    ///
    /// [`CoreError::DuplicateCity`] if `name` is already registered; the
    /// existing city is left untouched.  [`CoreError::TooManyCities`] once
    /// the next position no longer fits a [`CityIdx`].
    pub fn register(&mut self, name: impl Into<CityName>) -> CoreResult<CityIdx> {
        let name = name.into();
        if self.index.contains_key(name.as_str()) {
            return Err(CoreError::DuplicateCity(name));
        }
        let idx = CityIdx::try_from(self.cities.len())?;
        self.cities.push(City::new(name.clone()));
        self.index.insert(name, idx);
        Ok(idx)
    }

    /// Index of the city called `name`, if registered.
    pub fn resolve(&self, name: &str) -> Option<CityIdx> {
        self.index.get(name).copied()
    }

    /// Like [`resolve`][Self::resolve] but reports the missing name as an
    /// error.
    pub fn require(&self, name: &str) -> CoreResult<CityIdx> {
        self.resolve(name)
            .ok_or_else(|| CoreError::CityNotFound(CityName::new(name)))
    }

    pub fn get(&self, name: &str) -> Option<&City> {
        self.resolve(name).map(|idx| &self[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Push a new package registered at `city` onto that city's stack.
    ///
    /// The package's origin is recorded as `city`.
    pub fn stock_package(&mut self, id: impl Into<PackageId>, city: &str) -> CoreResult<()> {
        let idx = self.require(city)?;
        let origin = self[idx].name().clone();
        self[idx]
            .center_mut()
            .packages_mut()
            .push(Package::new(id, origin));
        Ok(())
    }

    /// Enqueue a new, empty vehicle at `city`.
    pub fn station_vehicle(
        &mut self,
        id:       impl Into<VehicleId>,
        city:     &str,
        capacity: f64,
    ) -> CoreResult<()> {
        let idx = self.require(city)?;
        self[idx]
            .center_mut()
            .vehicles_mut()
            .enqueue(Vehicle::new(id, capacity));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Cities in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, City> {
        self.cities.iter()
    }

    /// City names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &CityName> + '_ {
        self.cities.iter().map(City::name)
    }
}

impl Index<CityIdx> for Registry {
    type Output = City;

    #[inline]
    fn index(&self, idx: CityIdx) -> &City {
        &self.cities[idx.index()]
    }
}

impl IndexMut<CityIdx> for Registry {
    #[inline]
    fn index_mut(&mut self, idx: CityIdx) -> &mut City {
        &mut self.cities[idx.index()]
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item     = &'a City;
    type IntoIter = std::slice::Iter<'a, City>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
