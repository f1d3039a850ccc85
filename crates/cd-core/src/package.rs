//! The `Package` value type.

use crate::{CityName, PackageId};

/// A parcel waiting in a distribution center or riding in a vehicle.
///
/// `origin` is the city the package was first registered at.  It is never
/// updated as the package moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Package {
    id:     PackageId,
    origin: CityName,
}

impl Package {
    pub fn new(id: impl Into<PackageId>, origin: impl Into<CityName>) -> Self {
        Self {
            id:     id.into(),
            origin: origin.into(),
        }
    }

    pub fn id(&self) -> &PackageId {
        &self.id
    }

    pub fn origin(&self) -> &CityName {
        &self.origin
    }
}
