//! `fleet-sim`: simulates one delivery day for the whole fleet.
//!
//! # Driver model
//!
//! ```text
//! trucks 1..=truck_count, all at the hub at day_start (or their hold time)
//!   ① First wave - trucks 1..=driver_count each get a driver and are
//!                 routed concurrently (`parallel` feature).
//!   ② Later trucks, in ID order, wait for the earliest free driver:
//!                 start = max(own start/hold, driver free time).
//!   ③ Report    - per-truck end state, route log, total miles.
//! ```
//!
//! With the defaults (3 trucks, 2 drivers) truck 3 leaves at
//! `max(hold_3, min(finish_1, finish_2))`.
//!
//! # Preconditions
//!
//! - Loads name disjoint package sets.  Overlaps are logged, not removed.
//! - The store has been reset since the previous simulated day
//!   ([`PackageStore::reset_all`][fleet_store::PackageStore::reset_all]).
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Routes the first wave on Rayon's thread pool (default).|
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let sim = DaySimulator::greedy(FleetConfig::default())?;
//! let report = sim.simulate_day(&store, &geo, &loads, &holds, &mut NoopObserver)?;
//! println!("total miles: {:.1}", report.total_miles);
//! ```

pub mod error;
pub mod observer;
pub mod report;
pub mod sim;

#[cfg(test)]
mod tests;

pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{DayReport, TruckResult};
pub use sim::{DaySimulator, Holds, Loads, simulate_day};
