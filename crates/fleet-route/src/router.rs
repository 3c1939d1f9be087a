//! Routing trait and the greedy nearest-feasible-stop implementation.
//!
//! # Pluggability
//!
//! `fleet-sim` drives trucks through the [`Router`] trait, so alternative
//! dispatch policies can be simulated without touching the day simulator.
//! [`GreedyRouter`] is the default.

use std::time::Duration;

use fleet_core::{FleetConfig, PackageId, SimTime, TruckId};
use fleet_geo::DistanceOracle;
use fleet_store::{PackageStatus, PackageStore};

use crate::{Candidate, RouteResult, Truck, select_next};

// ── RouteLog ──────────────────────────────────────────────────────────────────

/// One delivery made by the truck.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub package:  PackageId,
    /// Effective address at the arrival time.
    pub address:  String,
    /// Leg length from the previous location.
    pub miles:    f64,
    /// Clock when the stop was chosen.
    pub departed: SimTime,
    pub arrival:  SimTime,
    /// `true` if `arrival` is after the package's deadline.
    pub late:     bool,
}

/// A starvation-guard clock advance: nothing was available at `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wait {
    pub from:  SimTime,
    pub until: SimTime,
}

/// Everything one call to [`Router::route`] did, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLog {
    pub truck:        TruckId,
    pub start:        SimTime,
    pub stops:        Vec<Stop>,
    pub waits:        Vec<Wait>,
    /// Miles driven back to the hub after the last stop (zero if none).
    pub return_miles: f64,
    pub finish:       SimTime,
    /// IDs past the truck's capacity.  Never assigned or delivered.
    pub dropped:      Vec<PackageId>,
    /// IDs not found in the store.
    pub missing:      Vec<PackageId>,
    /// Loaded packages left undelivered when the loop gave up.
    ///
    /// Only filled if the store changes under the router mid-route: a pending
    /// package that is not yet available always has a future availability
    /// instant to wait for.
    pub stranded:     Vec<PackageId>,
}

impl RouteLog {
    fn new(truck: TruckId, start: SimTime) -> Self {
        Self {
            truck,
            start,
            stops:        Vec::new(),
            waits:        Vec::new(),
            return_miles: 0.0,
            finish:       start,
            dropped:      Vec::new(),
            missing:      Vec::new(),
            stranded:     Vec::new(),
        }
    }

    /// Packages delivered, in delivery order.
    pub fn delivered(&self) -> impl Iterator<Item = PackageId> + '_ {
        self.stops.iter().map(|s| s.package)
    }

    /// Packages delivered after their deadline.
    pub fn late(&self) -> impl Iterator<Item = PackageId> + '_ {
        self.stops.iter().filter(|s| s.late).map(|s| s.package)
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable dispatch policy for a single truck.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: the day simulator routes the
/// first wave of trucks concurrently against one shared router, store and
/// distance oracle.
pub trait Router: Send + Sync {
    /// Load `package_ids` onto `truck` and drive until every loaded package
    /// is delivered or no further progress is possible, then return to the
    /// hub.
    ///
    /// Mutates `truck` and the loaded packages' delivery state in place.
    /// Blocks until the route is complete.
    fn route(
        &self,
        truck:       &mut Truck,
        package_ids: &[PackageId],
        store:       &PackageStore,
        geo:         &dyn DistanceOracle,
    ) -> RouteResult<RouteLog>;
}

// ── GreedyRouter ──────────────────────────────────────────────────────────────

/// Greedy nearest-feasible-neighbour dispatch.
///
/// Each step drives to the head of [`rank_candidates`][crate::rank_candidates]:
/// deadline-urgent stops first, then the nearest stop that still meets its
/// deadline, then the nearest stop overall.  Not optimal by construction.
#[derive(Debug, Clone)]
pub struct GreedyRouter {
    pub hub:           String,
    pub urgent_window: Duration,
}

impl GreedyRouter {
    pub fn new(hub: impl Into<String>, urgent_window: Duration) -> Self {
        Self { hub: hub.into(), urgent_window }
    }

    pub fn from_config(config: &FleetConfig) -> Self {
        Self::new(config.hub_address.clone(), config.urgent_window())
    }

    /// Candidates for the current step: pending packages available at the
    /// truck's clock, measured to their effective address at that clock.
    fn candidates(
        &self,
        truck:   &Truck,
        pending: &[PackageId],
        store:   &PackageStore,
        geo:     &dyn DistanceOracle,
    ) -> RouteResult<Vec<Candidate>> {
        let now = truck.clock;
        let mut out = Vec::with_capacity(pending.len());
        for &id in pending {
            let target = store
                .with(id, |p| {
                    p.is_available(now)
                        .then(|| (p.effective_street(now).to_owned(), p.deadline))
                })
                .flatten();
            let Some((street, deadline)) = target else {
                continue;
            };
            let miles = geo.distance(&truck.location, &street)?;
            let arrival = truck.arrival_after(miles)?;
            out.push(Candidate { package: id, miles, arrival, deadline });
        }
        Ok(out)
    }

    /// Earliest availability or correction event after the truck's clock
    /// among the pending packages.
    fn next_event(&self, truck: &Truck, pending: &[PackageId], store: &PackageStore) -> Option<SimTime> {
        pending
            .iter()
            .filter_map(|&id| store.with(id, |p| p.next_event_after(truck.clock)).flatten())
            .min()
    }

    /// Drive to `next`, stamp its delivery, and record the stop.
    fn deliver(
        &self,
        truck: &mut Truck,
        next:  &Candidate,
        store: &PackageStore,
        log:   &mut RouteLog,
    ) -> RouteResult<()> {
        let departed = truck.clock;
        let arrival = truck.arrival_after(next.miles)?;
        truck.miles += next.miles;
        truck.clock = arrival;

        let address = store.with_mut(next.package, |p| {
            if p.departure_time.is_none() {
                p.departure_time = Some(departed);
                p.status = PackageStatus::EnRoute;
            }
            p.delivery_time = Some(arrival);
            p.status = PackageStatus::Delivered;
            // A correction can land mid-transit.
            p.effective_street(arrival).to_owned()
        });

        match address {
            Some(address) => {
                truck.location = address.clone();
                log.stops.push(Stop {
                    package: next.package,
                    address,
                    miles: next.miles,
                    departed,
                    arrival,
                    late: next.deadline.is_missed_by(arrival),
                });
            }
            None => log.missing.push(next.package),
        }
        Ok(())
    }
}

impl Router for GreedyRouter {
    fn route(
        &self,
        truck:       &mut Truck,
        package_ids: &[PackageId],
        store:       &PackageStore,
        geo:         &dyn DistanceOracle,
    ) -> RouteResult<RouteLog> {
        // Reject a bad speed before touching any package.
        truck.travel_time(0.0)?;

        let (load, dropped) = package_ids.split_at(package_ids.len().min(truck.capacity));
        if !dropped.is_empty() {
            tracing::warn!(
                truck = %truck.id,
                capacity = truck.capacity,
                dropped = dropped.len(),
                "load exceeds capacity; excess packages left at the hub"
            );
        }

        truck.load = load.to_vec();
        truck.clock = truck.start_time;
        truck.location = self.hub.clone();

        let mut log = RouteLog::new(truck.id, truck.start_time);
        log.dropped = dropped.to_vec();

        // ── Load: assign every package, stamp those ready to leave ────────
        let mut pending: Vec<PackageId> = Vec::with_capacity(load.len());
        for &id in load {
            if pending.contains(&id) {
                tracing::warn!(truck = %truck.id, package = %id, "package loaded twice; ignoring repeat");
                continue;
            }
            let found = store.with_mut(id, |p| {
                p.truck_id = Some(truck.id);
                if p.is_available(truck.clock) {
                    p.departure_time = Some(truck.clock);
                    p.status = PackageStatus::EnRoute;
                }
            });
            match found {
                Some(()) => pending.push(id),
                None => {
                    tracing::warn!(truck = %truck.id, package = %id, "package not in store; skipped");
                    log.missing.push(id);
                }
            }
        }

        tracing::info!(truck = %truck.id, start = %truck.clock, packages = pending.len(), "truck departing");

        // ── Main loop ─────────────────────────────────────────────────────
        while !pending.is_empty() {
            let candidates = self.candidates(truck, &pending, store, geo)?;

            let Some(pick) = select_next(&candidates, self.urgent_window) else {
                // Starvation guard: jump to the next event or give up.
                match self.next_event(truck, &pending, store) {
                    Some(until) => {
                        tracing::debug!(truck = %truck.id, from = %truck.clock, %until, "nothing available; waiting");
                        log.waits.push(Wait { from: truck.clock, until });
                        truck.clock = until;
                        continue;
                    }
                    None => break,
                }
            };

            tracing::debug!(
                truck = %truck.id,
                package = %pick.candidate.package,
                tier = ?pick.tier,
                miles = pick.candidate.miles,
                "next stop"
            );
            let next = pick.candidate.clone();
            self.deliver(truck, &next, store, &mut log)?;
            pending.retain(|&id| id != next.package);
        }

        if !pending.is_empty() {
            tracing::warn!(truck = %truck.id, stranded = ?pending, "packages left undelivered");
            log.stranded = pending;
        }

        // ── Return to hub ─────────────────────────────────────────────────
        if truck.location != self.hub {
            let back = geo.distance(&truck.location, &self.hub)?;
            truck.clock = truck.arrival_after(back)?;
            truck.miles += back;
            truck.location = self.hub.clone();
            log.return_miles = back;
        }

        log.finish = truck.clock;
        tracing::info!(truck = %truck.id, finish = %truck.clock, miles = truck.miles, "truck back at hub");
        Ok(log)
    }
}
