//! `fleet-core`: foundational types for the fleet delivery simulator.
//!
//! This crate is a dependency of every other `fleet-*` crate.  It has no
//! `fleet-*` dependencies and only `thiserror` (plus optional `serde`) from
//! outside.
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `PackageId`, `TruckId`, `NodeId`                      |
//! | [`time`]    | `SimTime`, `travel_time`                              |
//! | [`config`]  | `FleetConfig`                                         |
//! | [`error`]   | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::FleetConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{NodeId, PackageId, TruckId};
pub use time::{SimTime, travel_time};
