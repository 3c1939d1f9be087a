//! `fleet-geo`: address lookup and the distance oracle.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`index`]  | `AddressIndex` (address ↔ `NodeId`)                         |
//! | [`matrix`] | `DistanceMatrix` (square, symmetric, zero diagonal)         |
//! | [`lookup`] | `DistanceOracle` trait, `GeoLookup`, `GeoLookupBuilder`     |
//! | [`loader`] | `load_geo_csv`, `load_addresses_reader`, `load_distances_reader` |
//! | [`error`]  | `GeoError`, `GeoResult<T>`                                  |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | Uses FxHash for the address map instead of SipHash.      |

pub mod error;
pub mod index;
pub mod loader;
pub mod lookup;
pub mod matrix;

#[cfg(test)]
mod tests;

pub use error::{GeoError, GeoResult};
pub use index::AddressIndex;
pub use loader::{load_addresses_reader, load_distances_reader, load_geo_csv};
pub use lookup::{DistanceOracle, GeoLookup, GeoLookupBuilder};
pub use matrix::DistanceMatrix;
