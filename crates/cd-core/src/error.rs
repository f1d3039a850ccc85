//! Domain error type.
//!
//! Empty containers are never an error in this crate: they surface as
//! `None`.  `CoreError` covers only lookups and registrations that name a
//! city the registry cannot satisfy, a registry out of index space, and
//! configuration parsing.

use thiserror::Error;

use crate::CityName;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("city {0} not found")]
    CityNotFound(CityName),

    #[error("city {0} is already registered")]
    DuplicateCity(CityName),

    #[error("registry is full: a city index must fit in u32 ({0})")]
    TooManyCities(#[from] std::num::TryFromIntError),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `cd-core`.
pub type CoreResult<T> = Result<T, CoreError>;
