//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use fleet_core::{SimTime, TruckId};

/// Simulate one WGUPS delivery day and report mileage and package status.
///
/// Without `--packages`, `--addresses` and `--distances` the built-in sample
/// day is used.
#[derive(Parser, Debug)]
#[command(name = "wgups-day")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Package manifest CSV (id,street,city,state,zip,deadline,weight,notes)
    #[arg(long, value_name = "PATH", requires_all = ["addresses", "distances", "loads"])]
    pub packages: Option<PathBuf>,

    /// Address table CSV (node,name,address)
    #[arg(long, value_name = "PATH", requires = "packages")]
    pub addresses: Option<PathBuf>,

    /// Lower-triangular distance table CSV, in miles
    #[arg(long, value_name = "PATH", requires = "packages")]
    pub distances: Option<PathBuf>,

    /// Override CSV (id,available_time,correction_time,corrected_street)
    #[arg(long, value_name = "PATH")]
    pub overrides: Option<PathBuf>,

    /// Truck loads CSV (truck_id,package_id), in load order
    #[arg(long, value_name = "PATH", requires = "packages")]
    pub loads: Option<PathBuf>,

    /// Fleet configuration JSON; missing fields take their defaults
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Hold a truck at the hub until a time, e.g. `2=9:05` (repeatable)
    #[arg(long = "hold", value_name = "TRUCK=TIME", value_parser = parse_hold)]
    pub holds: Vec<(TruckId, SimTime)>,

    /// Show package status as of this time (default: end of day)
    #[arg(long, value_name = "TIME")]
    pub status_at: Option<SimTime>,

    /// Write packages.csv, trucks.csv and deliveries.csv to this directory
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

/// Parse `TRUCK=TIME`.
pub fn parse_hold(s: &str) -> Result<(TruckId, SimTime), String> {
    let (truck, time) = s
        .split_once('=')
        .ok_or_else(|| format!("expected TRUCK=TIME, got {s:?}"))?;
    let truck = truck
        .trim()
        .parse::<TruckId>()
        .map_err(|e| format!("bad truck id {truck:?}: {e}"))?;
    let time = time
        .trim()
        .parse::<SimTime>()
        .map_err(|e| format!("bad time {time:?}: {e}"))?;
    Ok((truck, time))
}
