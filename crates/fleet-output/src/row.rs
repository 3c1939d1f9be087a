//! Plain data rows written by output backends, and the functions that
//! build them from a store or a day report.

use fleet_core::{PackageId, SimTime, TruckId};
use fleet_route::Stop;
use fleet_sim::DayReport;
use fleet_store::{Deadline, Package, PackageStatus, PackageStore};

/// One package as it would have been observed at a query time.
///
/// Stamps later than the query time are hidden, so a table taken at 09:00
/// shows a package delivered at 10:15 as en route (or at the hub) with no
/// delivery time.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRow {
    pub id:             PackageId,
    /// Street in effect at the query time (a correction may not have
    /// landed yet).
    pub address:        String,
    pub city:           String,
    pub zip:            String,
    pub weight:         String,
    pub deadline:       Deadline,
    pub status:         PackageStatus,
    pub truck:          Option<TruckId>,
    pub departure_time: Option<SimTime>,
    pub delivery_time:  Option<SimTime>,
}

impl PackageRow {
    pub fn at(package: &Package, at: SimTime) -> Self {
        Self {
            id:             package.id,
            address:        package.effective_street(at).to_owned(),
            city:           package.city.clone(),
            zip:            package.zip.clone(),
            weight:         package.weight.clone(),
            deadline:       package.deadline,
            status:         package.status_at(at),
            truck:          package.truck_id,
            departure_time: package.departure_time.filter(|&t| t <= at),
            delivery_time:  package.delivery_time.filter(|&t| t <= at),
        }
    }
}

/// End-of-day totals for one truck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruckSummaryRow {
    pub truck:     TruckId,
    pub start:     SimTime,
    pub finish:    SimTime,
    pub miles:     f64,
    pub delivered: usize,
    pub late:      usize,
    pub stranded:  usize,
}

/// One delivery, as reported by the simulator's observer hook.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryRow {
    pub truck:    TruckId,
    pub package:  PackageId,
    pub address:  String,
    pub miles:    f64,
    pub departed: SimTime,
    pub arrival:  SimTime,
    pub late:     bool,
}

impl DeliveryRow {
    pub fn from_stop(truck: TruckId, stop: &Stop) -> Self {
        Self {
            truck,
            package:  stop.package,
            address:  stop.address.clone(),
            miles:    stop.miles,
            departed: stop.departed,
            arrival:  stop.arrival,
            late:     stop.late,
        }
    }
}

/// Every package in `store`, in ID order, as observed at `at`.
pub fn package_rows(store: &PackageStore, at: SimTime) -> Vec<PackageRow> {
    store.iter().map(|(_, p)| PackageRow::at(&p, at)).collect()
}

/// One summary row per truck, in ID order.  Idle trucks report zeros.
pub fn truck_rows(report: &DayReport) -> Vec<TruckSummaryRow> {
    report
        .trucks
        .iter()
        .map(|(&truck, result)| {
            let (delivered, late, stranded) = result.log.as_ref().map_or((0, 0, 0), |log| {
                (log.stops.len(), log.late().count(), log.stranded.len())
            });
            TruckSummaryRow {
                truck,
                start: result.start(),
                finish: result.finish(),
                miles: result.miles(),
                delivered,
                late,
                stranded,
            }
        })
        .collect()
}
