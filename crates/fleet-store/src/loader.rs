//! CSV loaders for the package manifest and the override table.
//!
//! # Manifest CSV
//!
//! One row per package, with a header row:
//!
//! ```csv
//! id,street,city,state,zip,deadline,weight,notes
//! 1,195 W Oakland Ave,Salt Lake City,UT,84115,10:30 AM,21,
//! 2,2530 S 500 E,Salt Lake City,UT,84106,EOD,44,
//! ```
//!
//! `deadline` is `EOD` or a time (`10:30 AM`, `9:00`).  Every package starts
//! at the hub, available from the configured day start unless an override
//! says otherwise.
//!
//! # Override CSV
//!
//! ```csv
//! id,available_time,correction_time,corrected_street
//! 6,9:05,,
//! 9,10:20,10:20,410 S State St
//! ```
//!
//! Blank cells mean "leave unchanged".

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use fleet_core::{PackageId, SimTime};

use crate::{Deadline, Package, PackageOverride, PackageStore, StoreError, StoreResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PackageRecord {
    id:       u32,
    street:   String,
    city:     String,
    state:    String,
    zip:      String,
    deadline: String,
    weight:   String,
    #[serde(default)]
    notes:    String,
}

#[derive(Deserialize)]
struct OverrideRecord {
    id:               u32,
    #[serde(default)]
    available_time:   String,
    #[serde(default)]
    correction_time:  String,
    #[serde(default)]
    corrected_street: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the package manifest from a CSV file.
///
/// `day_start` becomes every package's `available_time`.
pub fn load_packages_csv(path: &Path, day_start: SimTime) -> StoreResult<PackageStore> {
    let file = std::fs::File::open(path)?;
    load_packages_reader(file, day_start)
}

/// Like [`load_packages_csv`] but accepts any `Read` source.
pub fn load_packages_reader<R: Read>(reader: R, day_start: SimTime) -> StoreResult<PackageStore> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut store = PackageStore::new();

    for result in csv_reader.deserialize::<PackageRecord>() {
        let row = result.map_err(|e| StoreError::Parse(e.to_string()))?;
        let id = PackageId(row.id);
        let deadline = row.deadline.parse::<Deadline>().map_err(|e| {
            StoreError::Parse(format!("package {id}: invalid deadline: {e}"))
        })?;

        let mut package = Package::new(id, row.street)
            .with_deadline(deadline)
            .available_at(day_start);
        package.city = row.city;
        package.state = row.state;
        package.zip = row.zip;
        package.weight = row.weight;
        package.notes = row.notes;

        if store.insert(package).is_some() {
            return Err(StoreError::Parse(format!("duplicate package id {id}")));
        }
    }

    tracing::debug!(packages = store.len(), "loaded package manifest");
    Ok(store)
}

/// Load override rules from a CSV file.
pub fn load_overrides_csv(path: &Path) -> StoreResult<Vec<PackageOverride>> {
    let file = std::fs::File::open(path)?;
    load_overrides_reader(file)
}

/// Like [`load_overrides_csv`] but accepts any `Read` source.
pub fn load_overrides_reader<R: Read>(reader: R) -> StoreResult<Vec<PackageOverride>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    csv_reader
        .deserialize::<OverrideRecord>()
        .map(|result| {
            let row = result.map_err(|e| StoreError::Parse(e.to_string()))?;
            Ok(PackageOverride {
                id:               PackageId(row.id),
                available_time:   parse_optional_time(&row.available_time)?,
                correction_time:  parse_optional_time(&row.correction_time)?,
                corrected_street: Some(row.corrected_street).filter(|s| !s.is_empty()),
            })
        })
        .collect()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_optional_time(cell: &str) -> StoreResult<Option<SimTime>> {
    if cell.is_empty() {
        Ok(None)
    } else {
        Ok(Some(cell.parse()?))
    }
}
