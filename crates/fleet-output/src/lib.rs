//! `fleet-output`: reporting for the fleet delivery simulator.
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`row`]      | `PackageRow`, `TruckSummaryRow`, `DeliveryRow` and their builders |
//! | [`writer`]   | The `OutputWriter` trait                                        |
//! | [`csv`]      | `CsvWriter`: `packages.csv`, `trucks.csv`, `deliveries.csv`     |
//! | [`observer`] | `DeliveryLogObserver`: `SimObserver` → `OutputWriter` bridge    |
//!
//! # Usage
//!
//! ```rust,ignore
//! use fleet_output::{CsvWriter, DeliveryLogObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = DeliveryLogObserver::new(writer).with_package_table(&store, SimTime::hm(10, 0));
//! sim.simulate_day(&store, &geo, &loads, &holds, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::DeliveryLogObserver;
pub use row::{DeliveryRow, PackageRow, TruckSummaryRow, package_rows, truck_rows};
pub use writer::OutputWriter;
