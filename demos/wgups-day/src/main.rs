//! wgups-day: simulate one delivery day for a small parcel fleet.
//!
//! Loads the address, distance and package tables (or the built-in sample
//! day), runs the day simulator, and prints per-truck mileage, any late or
//! undelivered packages, and the package status table at a chosen time.

mod cli;
mod sample;
mod telemetry;


use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use fleet_core::{FleetConfig, PackageId, SimTime, TruckId};
use fleet_geo::{GeoLookup, load_addresses_reader, load_distances_reader, load_geo_csv};
use fleet_output::{CsvWriter, DeliveryLogObserver, package_rows, truck_rows};
use fleet_sim::{DayReport, DaySimulator, Holds, Loads, NoopObserver};
use fleet_store::{
    PackageStore, apply_overrides, load_overrides_csv, load_overrides_reader, load_packages_csv,
    load_packages_reader,
};

use cli::Cli;

/// Package table time for `--output` when `--status-at` is not given.
const END_OF_DAY: SimTime = SimTime::hms(23, 59, 59);

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.log_level.as_deref());

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => FleetConfig::default(),
    };
    config.validate().context("invalid fleet configuration")?;

    let day = load_day(&cli, &config)?;
    println!("=== wgups-day ===");
    println!(
        "Packages: {}  |  Stops: {}  |  Trucks: {}  |  Drivers: {}",
        day.store.len(),
        day.geo.index().node_count(),
        config.truck_count,
        config.driver_count,
    );
    println!();

    let sim = DaySimulator::greedy(config.clone())?;
    let t0 = Instant::now();
    let report = match &cli.output {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            let writer = CsvWriter::new(dir)?;
            let status_at = cli.status_at.unwrap_or(END_OF_DAY);
            let mut obs = DeliveryLogObserver::new(writer).with_package_table(&day.store, status_at);
            let report = sim.simulate_day(&day.store, &day.geo, &day.loads, &day.holds, &mut obs)?;
            if let Some(e) = obs.take_error() {
                eprintln!("output error: {e}");
            }
            report
        }
        None => sim.simulate_day(&day.store, &day.geo, &day.loads, &day.holds, &mut NoopObserver)?,
    };
    let elapsed = t0.elapsed();
    tracing::debug!(elapsed_ms = elapsed.as_secs_f64() * 1e3, "simulation finished");

    println!("Simulation complete in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    println!();
    print_trucks(&report);
    print_exceptions(&report, &day.store);

    let status_at = cli.status_at.or(report.finish()).unwrap_or(config.day_start);
    print_packages(&day.store, status_at);

    if let Some(dir) = &cli.output {
        println!();
        println!("Output written to {}", dir.display());
    }
    Ok(())
}

// ── Loading ───────────────────────────────────────────────────────────────────

struct Day {
    store: PackageStore,
    geo:   GeoLookup,
    loads: Loads,
    holds: Holds,
}

fn load_config(path: &Path) -> Result<FleetConfig> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(file).with_context(|| format!("parsing {}", path.display()))
}

fn load_day(cli: &Cli, config: &FleetConfig) -> Result<Day> {
    let (store, geo, loads, mut holds) = match (&cli.packages, &cli.addresses, &cli.distances, &cli.loads) {
        (Some(packages), Some(addresses), Some(distances), Some(loads)) => {
            let store = load_packages_csv(packages, config.day_start)?;
            let geo = load_geo_csv(addresses, distances)?;
            let loads = load_loads(File::open(loads).with_context(|| format!("opening {}", loads.display()))?)?;
            (store, geo, loads, Holds::new())
        }
        _ => {
            println!("(no data paths given; running the built-in sample day)");
            let store = load_packages_reader(Cursor::new(sample::PACKAGES_CSV), config.day_start)?;
            let index = load_addresses_reader(Cursor::new(sample::ADDRESSES_CSV))?;
            let matrix = load_distances_reader(Cursor::new(sample::DISTANCES_CSV))?;
            let geo = GeoLookup::new(index, matrix)?;
            apply_overrides(&store, &load_overrides_reader(Cursor::new(sample::OVERRIDES_CSV))?)?;
            let loads = load_loads(Cursor::new(sample::LOADS_CSV))?;
            let holds = if cli.holds.is_empty() { sample::HOLDS.into_iter().collect() } else { Holds::new() };
            (store, geo, loads, holds)
        }
    };

    if let Some(path) = &cli.overrides {
        apply_overrides(&store, &load_overrides_csv(path)?)?;
    }
    holds.extend(cli.holds.iter().copied());

    tracing::info!(packages = store.len(), trucks = loads.len(), holds = holds.len(), "day loaded");

    Ok(Day { store, geo, loads, holds })
}

#[derive(Deserialize)]
struct LoadRecord {
    truck_id:   u8,
    package_id: u32,
}

/// Parse `truck_id,package_id` rows, keeping file order within each truck.
fn load_loads<R: Read>(reader: R) -> Result<Loads> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut loads = Loads::new();
    for result in rdr.deserialize::<LoadRecord>() {
        let row = result.context("parsing loads")?;
        loads
            .entry(TruckId(row.truck_id))
            .or_default()
            .push(PackageId(row.package_id));
    }
    Ok(loads)
}

// ── Printing ──────────────────────────────────────────────────────────────────

fn print_trucks(report: &DayReport) {
    println!("{:<6} {:>9} {:>9} {:>8} {:>10}", "Truck", "Start", "Finish", "Miles", "Delivered");
    println!("{}", "-".repeat(46));
    for row in truck_rows(report) {
        println!(
            "{:<6} {:>9} {:>9} {:>8.1} {:>10}",
            row.truck.to_string(),
            row.start.to_string(),
            row.finish.to_string(),
            row.miles,
            row.delivered,
        );
    }
    println!("{}", "-".repeat(46));
    println!("Total miles: {:.1}", report.total_miles);
    println!();
}

fn print_exceptions(report: &DayReport, store: &PackageStore) {
    let undelivered = report.undelivered(store);
    let late = report.late_deliveries(store);
    let missing = report.missing();

    if undelivered.is_empty() && late.is_empty() && missing.is_empty() {
        println!("All packages delivered on time.");
    }
    if !undelivered.is_empty() {
        println!("Undelivered: {}", join(&undelivered));
    }
    if !late.is_empty() {
        println!("Late:        {}", join(&late));
    }
    if !missing.is_empty() {
        println!("Not found:   {}", join(&missing));
    }
    println!();
}

fn print_packages(store: &PackageStore, at: SimTime) {
    println!("Package status at {at}");
    println!(
        "{:<4} {:<22} {:<10} {:<11} {:<6} {:>9}",
        "ID", "Address", "Deadline", "Status", "Truck", "Delivered"
    );
    println!("{}", "-".repeat(67));
    for row in package_rows(store, at) {
        println!(
            "{:<4} {:<22} {:<10} {:<11} {:<6} {:>9}",
            row.id.to_string(),
            row.address,
            row.deadline.to_string(),
            row.status.as_str(),
            row.truck.map(|t| t.to_string()).unwrap_or_default(),
            row.delivery_time.map(|t| t.to_string()).unwrap_or_default(),
        );
    }
}

fn join(ids: &[PackageId]) -> String {
    ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
