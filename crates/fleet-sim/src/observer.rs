//! Simulation observer trait for progress reporting and data collection.

use fleet_core::{SimTime, TruckId};
use fleet_route::{RouteLog, Stop, Truck};

use crate::DayReport;

/// Callbacks invoked by [`DaySimulator::simulate_day`][crate::DaySimulator::simulate_day].
///
/// Hooks run on the calling thread after each wave of routing completes,
/// in ascending truck-ID order, so observers see a deterministic sequence
/// even when the first wave was routed in parallel.
///
/// All methods have default no-op implementations.
///
/// # Example - delivery counter
///
/// ```rust,ignore
/// struct Counter(usize);
///
/// impl SimObserver for Counter {
///     fn on_delivery(&mut self, _truck: TruckId, _stop: &Stop) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// A truck with a load left the hub at `start`.
    fn on_truck_start(&mut self, _truck: TruckId, _start: SimTime) {}

    /// One package was delivered.
    fn on_delivery(&mut self, _truck: TruckId, _stop: &Stop) {}

    /// A truck finished its route and is back at the hub.
    fn on_truck_finish(&mut self, _truck: &Truck, _log: &RouteLog) {}

    /// Called once with the complete report.
    fn on_day_end(&mut self, _report: &DayReport) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
