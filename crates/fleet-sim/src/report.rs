//! End-of-day results.

use std::collections::BTreeMap;

use fleet_core::{PackageId, SimTime, TruckId};
use fleet_route::{RouteLog, Truck};
use fleet_store::PackageStore;

/// One truck's end state.
#[derive(Debug, Clone, PartialEq)]
pub struct TruckResult {
    pub truck: Truck,
    /// `None` if the truck had no load and never left the hub.
    pub log:   Option<RouteLog>,
}

impl TruckResult {
    pub fn miles(&self) -> f64 {
        self.truck.miles
    }

    /// Departure time (after any hold or wait for a driver).
    pub fn start(&self) -> SimTime {
        self.truck.start_time
    }

    /// Clock on return to the hub.
    pub fn finish(&self) -> SimTime {
        self.truck.clock
    }
}

/// Every truck's end state plus the fleet mileage.
#[derive(Debug, Clone, PartialEq)]
pub struct DayReport {
    pub trucks:      BTreeMap<TruckId, TruckResult>,
    pub total_miles: f64,
}

impl DayReport {
    pub fn truck(&self, id: TruckId) -> Option<&TruckResult> {
        self.trucks.get(&id)
    }

    /// Latest return to the hub across the fleet.
    pub fn finish(&self) -> Option<SimTime> {
        self.trucks.values().map(TruckResult::finish).max()
    }

    /// Loaded packages that a truck gave up on.
    pub fn stranded(&self) -> Vec<PackageId> {
        self.logs().flat_map(|log| log.stranded.iter().copied()).collect()
    }

    /// Packages listed in a load but missing from the store.
    pub fn missing(&self) -> Vec<PackageId> {
        self.logs().flat_map(|log| log.missing.iter().copied()).collect()
    }

    /// Every package in `store` with no delivery stamp, whether stranded,
    /// dropped by capacity, or never loaded.
    pub fn undelivered(&self, store: &PackageStore) -> Vec<PackageId> {
        store
            .iter()
            .filter(|(_, p)| p.delivery_time.is_none())
            .map(|(id, _)| id)
            .collect()
    }

    /// Packages delivered after their deadline.
    pub fn late_deliveries(&self, store: &PackageStore) -> Vec<PackageId> {
        store
            .iter()
            .filter(|(_, p)| p.delivered_late())
            .map(|(id, _)| id)
            .collect()
    }

    fn logs(&self) -> impl Iterator<Item = &RouteLog> + '_ {
        self.trucks.values().filter_map(|t| t.log.as_ref())
    }
}
