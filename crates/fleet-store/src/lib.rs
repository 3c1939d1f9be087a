//! `fleet-store`: package records and the shared package store.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`package`]  | `Package`, `Deadline`, `PackageStatus`                    |
//! | [`store`]    | `PackageStore` (per-key `Mutex`)                          |
//! | [`overrides`]| `PackageOverride`, `apply_overrides`                      |
//! | [`loader`]   | `load_packages_csv`, `load_packages_reader`, `load_overrides_reader` |
//! | [`error`]    | `StoreError`, `StoreResult<T>`                            |
//!
//! # Delivery state
//!
//! Each [`Package`] carries per-run delivery state (status, departure and
//! delivery stamps, truck assignment) next to its manifest attributes.  The
//! router writes that state during one simulated day; call
//! [`PackageStore::reset_all`] before simulating the day again.

pub mod error;
pub mod loader;
pub mod overrides;
pub mod package;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{StoreError, StoreResult};
pub use loader::{load_overrides_csv, load_overrides_reader, load_packages_csv, load_packages_reader};
pub use overrides::{PackageOverride, apply_overrides};
pub use package::{Deadline, Package, PackageStatus};
pub use store::PackageStore;
