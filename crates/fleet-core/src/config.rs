//! Fleet-wide configuration.
//!
//! Loaded from JSON by the application crate (with the `serde` feature) and
//! handed to the day simulator.  Missing JSON fields fall back to
//! [`FleetConfig::default`].

use std::time::Duration;

use crate::{CoreError, CoreResult, SimTime};

/// Top-level fleet configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FleetConfig {
    /// Depot address every truck starts from and returns to.
    pub hub_address: String,

    /// Default departure time for every truck.
    pub day_start: SimTime,

    /// Constant truck speed in miles per simulated hour.
    pub truck_speed_mph: f64,

    /// Maximum packages a truck carries per run.
    pub truck_capacity: usize,

    /// Trucks created per simulated day (numbered `1..=truck_count`).
    pub truck_count: u8,

    /// Drivers on shift; at most this many trucks are out at once.
    pub driver_count: u8,

    /// A deliverable candidate whose slack is at or below this many minutes
    /// is routed ahead of nearer stops.
    pub urgent_slack_minutes: u64,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            hub_address:          "4001 South 700 East".to_owned(),
            day_start:            SimTime::hm(8, 0),
            truck_speed_mph:      18.0,
            truck_capacity:       16,
            truck_count:          3,
            driver_count:         2,
            urgent_slack_minutes: 15,
        }
    }
}

impl FleetConfig {
    /// The urgent-slack threshold as a `Duration`.
    #[inline]
    pub fn urgent_window(&self) -> Duration {
        Duration::from_secs(self.urgent_slack_minutes * 60)
    }

    /// Reject configurations the simulator cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.truck_speed_mph.is_finite() || self.truck_speed_mph <= 0.0 {
            return Err(CoreError::InvalidSpeed(self.truck_speed_mph));
        }
        if self.hub_address.trim().is_empty() {
            return Err(CoreError::Config("hub_address is empty".into()));
        }
        if self.truck_count == 0 {
            return Err(CoreError::Config("truck_count must be at least 1".into()));
        }
        if self.driver_count == 0 {
            return Err(CoreError::Config("driver_count must be at least 1".into()));
        }
        if self.driver_count > self.truck_count {
            return Err(CoreError::Config(format!(
                "driver_count {} exceeds truck_count {}",
                self.driver_count, self.truck_count
            )));
        }
        Ok(())
    }
}
