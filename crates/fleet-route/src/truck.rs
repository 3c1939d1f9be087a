//! Per-run truck state.

use std::time::Duration;

use fleet_core::{CoreError, FleetConfig, PackageId, SimTime, TruckId, travel_time};

use crate::RouteResult;

/// One truck for one simulated day.
///
/// Created at the hub with `clock == start_time`; only the router mutates
/// it afterwards.  Discard and recreate for each new run.
#[derive(Debug, Clone, PartialEq)]
pub struct Truck {
    pub id:         TruckId,
    /// Miles per simulated hour.  Always finite and `> 0`.
    pub speed_mph:  f64,
    /// Maximum packages loaded per run.
    pub capacity:   usize,
    /// Earliest departure from the hub.
    pub start_time: SimTime,
    pub clock:      SimTime,
    pub miles:      f64,
    /// Current address.
    pub location:   String,
    /// Package IDs loaded for this run, in load order.
    pub load:       Vec<PackageId>,
}

impl Truck {
    /// A truck parked at `hub` with its clock at `start_time`.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidSpeed`] unless `speed_mph` is finite and `> 0`.
    pub fn new(
        id:         TruckId,
        hub:        impl Into<String>,
        start_time: SimTime,
        speed_mph:  f64,
        capacity:   usize,
    ) -> RouteResult<Self> {
        if !speed_mph.is_finite() || speed_mph <= 0.0 {
            return Err(CoreError::InvalidSpeed(speed_mph).into());
        }
        Ok(Self {
            id,
            speed_mph,
            capacity,
            start_time,
            clock: start_time,
            miles: 0.0,
            location: hub.into(),
            load: Vec::new(),
        })
    }

    /// A truck with the fleet-wide hub, day start, speed and capacity.
    pub fn from_config(id: TruckId, config: &FleetConfig) -> RouteResult<Self> {
        Self::new(
            id,
            config.hub_address.clone(),
            config.day_start,
            config.truck_speed_mph,
            config.truck_capacity,
        )
    }

    /// Hold the truck at the hub until `t` (e.g. waiting for a driver).
    pub fn hold_until(&mut self, t: SimTime) {
        self.start_time = t;
        self.clock = t;
    }

    /// Driving time for `miles` at this truck's speed.
    #[inline]
    pub fn travel_time(&self, miles: f64) -> RouteResult<Duration> {
        Ok(travel_time(miles, self.speed_mph)?)
    }

    /// Clock on arrival after driving `miles` from the current clock.
    pub fn arrival_after(&self, miles: f64) -> RouteResult<SimTime> {
        Ok(self.clock.advance(self.travel_time(miles)?)?)
    }
}
