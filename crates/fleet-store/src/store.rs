//! The `PackageStore`: keyed package records with per-key locking.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use fleet_core::PackageId;

use crate::Package;

/// All packages for one simulated day, keyed by ID.
///
/// Each record sits behind its own `Mutex`, so trucks routed on different
/// threads can update their own packages through a shared `&PackageStore`
/// without contending on each other.  Structural changes (`insert`,
/// `remove`) need `&mut self` and happen before a simulation starts.
///
/// Iteration is in ascending `PackageId` order.
#[derive(Debug, Default)]
pub struct PackageStore {
    packages: BTreeMap<PackageId, Mutex<Package>>,
}

impl PackageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a package, returning the record it replaced.
    pub fn insert(&mut self, package: Package) -> Option<Package> {
        self.packages
            .insert(package.id, Mutex::new(package))
            .map(|m| m.into_inner().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn remove(&mut self, id: PackageId) -> Option<Package> {
        self.packages
            .remove(&id)
            .map(|m| m.into_inner().unwrap_or_else(PoisonError::into_inner))
    }

    /// A copy of the package's current record, or `None` if absent.
    pub fn get(&self, id: PackageId) -> Option<Package> {
        self.with(id, Package::clone)
    }

    /// Read a package under its lock.  Returns `None` if absent.
    pub fn with<T>(&self, id: PackageId, f: impl FnOnce(&Package) -> T) -> Option<T> {
        self.packages.get(&id).map(|m| f(&lock(m)))
    }

    /// Mutate a package under its lock.  Returns `None` if absent.
    pub fn with_mut<T>(&self, id: PackageId, f: impl FnOnce(&mut Package) -> T) -> Option<T> {
        self.packages.get(&id).map(|m| f(&mut lock(m)))
    }

    pub fn contains(&self, id: PackageId) -> bool {
        self.packages.contains_key(&id)
    }

    /// Ordered snapshots of every package.
    pub fn iter(&self) -> impl Iterator<Item = (PackageId, Package)> + '_ {
        self.packages.iter().map(|(&id, m)| (id, lock(m).clone()))
    }

    pub fn ids(&self) -> impl Iterator<Item = PackageId> + '_ {
        self.packages.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Clear delivery state on every package.  Must run between simulated
    /// days that share this store.
    pub fn reset_all(&self) {
        for m in self.packages.values() {
            lock(m).reset();
        }
    }
}

impl FromIterator<Package> for PackageStore {
    fn from_iter<I: IntoIterator<Item = Package>>(iter: I) -> Self {
        let mut store = PackageStore::new();
        for package in iter {
            store.insert(package);
        }
        store
    }
}

/// Lock a record, recovering the data if another thread panicked while
/// holding it.  Package writes are single-field stores, so a poisoned
/// record is still consistent.
#[inline]
fn lock(m: &Mutex<Package>) -> MutexGuard<'_, Package> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}
