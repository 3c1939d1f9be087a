//! The `DaySimulator` and its driver pool.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap};

use fleet_core::{FleetConfig, PackageId, SimTime, TruckId};
use fleet_geo::DistanceOracle;
use fleet_route::{GreedyRouter, RouteLog, RouteResult, Router, Truck};
use fleet_store::PackageStore;

use crate::{DayReport, NoopObserver, SimError, SimObserver, SimResult, TruckResult};

/// Package IDs to load, per truck.
pub type Loads = BTreeMap<TruckId, Vec<PackageId>>;

/// Earliest start time, per truck.
pub type Holds = BTreeMap<TruckId, SimTime>;

// ── DaySimulator ──────────────────────────────────────────────────────────────

/// Runs one delivery day for `config.truck_count` trucks sharing
/// `config.driver_count` drivers.
///
/// The simulator itself is stateless between calls; every call builds a
/// fresh fleet at the hub.
pub struct DaySimulator<R: Router> {
    pub config: FleetConfig,
    pub router: R,
}

impl DaySimulator<GreedyRouter> {
    /// A simulator using [`GreedyRouter`] configured from `config`.
    pub fn greedy(config: FleetConfig) -> SimResult<Self> {
        let router = GreedyRouter::from_config(&config);
        Self::new(config, router)
    }
}

impl<R: Router> DaySimulator<R> {
    /// Validate `config` and pair it with a router.
    pub fn new(config: FleetConfig, router: R) -> SimResult<Self> {
        config.validate()?;
        Ok(Self { config, router })
    }

    /// Simulate one day.
    ///
    /// `loads` maps truck → package IDs (in load order); `holds` maps
    /// truck → earliest start.  Entries for trucks outside
    /// `1..=truck_count` are ignored.
    ///
    /// Mutates the delivery state of every loaded package in `store`.
    ///
    /// # Errors
    ///
    /// [`SimError::Config`] if `config` no longer validates.
    /// [`SimError::Route`] for the lowest-numbered truck whose routing
    /// failed.  Trucks routed alongside it are unaffected but their results
    /// are not returned.
    pub fn simulate_day<O: SimObserver>(
        &self,
        store:    &PackageStore,
        geo:      &dyn DistanceOracle,
        loads:    &Loads,
        holds:    &Holds,
        observer: &mut O,
    ) -> SimResult<DayReport> {
        // `config` is public and may have changed since `new`.
        self.config.validate()?;
        self.warn_on_suspect_input(loads, holds);

        // ── Fresh fleet at the hub ────────────────────────────────────────
        let mut trucks = Vec::with_capacity(usize::from(self.config.truck_count));
        for id in (1..=self.config.truck_count).map(TruckId) {
            let truck = Truck::from_config(id, &self.config)
                .map_err(|source| SimError::Route { truck: id, source })?;
            trucks.push(truck);
        }

        for truck in &mut trucks {
            if let Some(&t) = holds.get(&truck.id) {
                truck.hold_until(t);
            }
        }

        let drivers = usize::from(self.config.driver_count);
        let (first_wave, later) = trucks.split_at_mut(drivers);
        let mut logs: BTreeMap<TruckId, Option<RouteLog>> = BTreeMap::new();

        // ── ① First wave ──────────────────────────────────────────────────
        let results = self.route_wave(first_wave, loads, store, geo);
        for (truck, result) in first_wave.iter().zip(results) {
            let log = result.map_err(|source| SimError::Route { truck: truck.id, source })?;
            notify(observer, truck, log.as_ref());
            logs.insert(truck.id, log);
        }

        // A driver frees up when their truck is back; an idle truck's driver
        // is free from that truck's start time.
        let mut free_drivers: BinaryHeap<Reverse<SimTime>> =
            first_wave.iter().map(|t| Reverse(t.clock)).collect();

        // ── ② Later trucks wait for a driver ──────────────────────────────
        for truck in later.iter_mut() {
            let Some(ids) = load_for(loads, truck.id) else {
                logs.insert(truck.id, None);
                continue;
            };
            if let Some(Reverse(free)) = free_drivers.pop()
                && truck.start_time < free
            {
                tracing::debug!(truck = %truck.id, until = %free, "waiting for a driver");
                truck.hold_until(free);
            }
            let log = self
                .router
                .route(truck, ids, store, geo)
                .map_err(|source| SimError::Route { truck: truck.id, source })?;
            free_drivers.push(Reverse(truck.clock));
            notify(observer, truck, Some(&log));
            logs.insert(truck.id, Some(log));
        }

        // ── ③ Report ──────────────────────────────────────────────────────
        let total_miles = trucks.iter().map(|t| t.miles).sum();
        let trucks = trucks
            .into_iter()
            .map(|truck| {
                let log = logs.remove(&truck.id).flatten();
                (truck.id, TruckResult { truck, log })
            })
            .collect();
        let report = DayReport { trucks, total_miles };

        let stranded = report.stranded();
        if !stranded.is_empty() {
            tracing::warn!(?stranded, "day ended with stranded packages");
        }
        tracing::info!(total_miles = report.total_miles, "day complete");

        observer.on_day_end(&report);
        Ok(report)
    }

    /// Route every truck in `wave` that has a load.  Results are in the same
    /// order as `wave`.
    fn route_wave(
        &self,
        wave:  &mut [Truck],
        loads: &Loads,
        store: &PackageStore,
        geo:   &dyn DistanceOracle,
    ) -> Vec<RouteResult<Option<RouteLog>>> {
        let router = &self.router;
        let route_one = |truck: &mut Truck| -> RouteResult<Option<RouteLog>> {
            match load_for(loads, truck.id) {
                Some(ids) => router.route(truck, ids, store, geo).map(Some),
                None => Ok(None),
            }
        };

        #[cfg(not(feature = "parallel"))]
        {
            wave.iter_mut().map(route_one).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // Each truck is a disjoint &mut; packages are locked per record.
            wave.par_iter_mut().map(route_one).collect()
        }
    }

    fn warn_on_suspect_input(&self, loads: &Loads, holds: &Holds) {
        let known = 1..=self.config.truck_count;
        for id in loads.keys().chain(holds.keys()) {
            if !known.contains(&id.0) {
                tracing::warn!(truck = %id, "no such truck; entry ignored");
            }
        }

        let mut owner: HashMap<PackageId, TruckId> = HashMap::new();
        for (&truck, ids) in loads {
            for &id in ids {
                if let Some(other) = owner.insert(id, truck)
                    && other != truck
                {
                    tracing::warn!(package = %id, first = %other, second = %truck, "package loaded on two trucks");
                }
            }
        }
    }
}

/// Simulate a day with the default fleet configuration and greedy router.
pub fn simulate_day(
    store: &PackageStore,
    geo:   &dyn DistanceOracle,
    loads: &Loads,
    holds: &Holds,
) -> SimResult<DayReport> {
    DaySimulator::greedy(FleetConfig::default())?.simulate_day(store, geo, loads, holds, &mut NoopObserver)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// The truck's load, if it has a non-empty one.
fn load_for(loads: &Loads, truck: TruckId) -> Option<&[PackageId]> {
    loads
        .get(&truck)
        .map(Vec::as_slice)
        .filter(|ids| !ids.is_empty())
}

fn notify<O: SimObserver>(observer: &mut O, truck: &Truck, log: Option<&RouteLog>) {
    let Some(log) = log else {
        return;
    };
    observer.on_truck_start(truck.id, log.start);
    for stop in &log.stops {
        observer.on_delivery(truck.id, stop);
    }
    observer.on_truck_finish(truck, log);
}
