//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `deliveries.csv`
//! - `trucks.csv`
//! - `packages.csv`
//!
//! Times are written as `HH:MM:SS`; absent times are empty cells.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use fleet_core::SimTime;

use crate::writer::OutputWriter;
use crate::{DeliveryRow, OutputResult, PackageRow, TruckSummaryRow};

/// Writes reports to three CSV files.
pub struct CsvWriter {
    deliveries: Writer<File>,
    trucks:     Writer<File>,
    packages:   Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create the three CSV files in `dir` (which must exist) and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut deliveries = Writer::from_path(dir.join("deliveries.csv"))?;
        deliveries.write_record(["truck_id", "package_id", "address", "leg_miles", "departed", "arrival", "late"])?;

        let mut trucks = Writer::from_path(dir.join("trucks.csv"))?;
        trucks.write_record(["truck_id", "start", "finish", "miles", "delivered", "late", "stranded"])?;

        let mut packages = Writer::from_path(dir.join("packages.csv"))?;
        packages.write_record([
            "package_id", "address", "city", "zip", "weight", "deadline",
            "status", "truck_id", "departure_time", "delivery_time",
        ])?;

        Ok(Self {
            deliveries,
            trucks,
            packages,
            finished: false,
        })
    }
}

fn time_cell(t: Option<SimTime>) -> String {
    t.map(|t| t.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()> {
        self.deliveries.write_record(&[
            row.truck.to_string(),
            row.package.to_string(),
            row.address.clone(),
            format!("{:.1}", row.miles),
            row.departed.to_string(),
            row.arrival.to_string(),
            (row.late as u8).to_string(),
        ])?;
        Ok(())
    }

    fn write_trucks(&mut self, rows: &[TruckSummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.trucks.write_record(&[
                row.truck.to_string(),
                row.start.to_string(),
                row.finish.to_string(),
                format!("{:.1}", row.miles),
                row.delivered.to_string(),
                row.late.to_string(),
                row.stranded.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_packages(&mut self, rows: &[PackageRow]) -> OutputResult<()> {
        for row in rows {
            self.packages.write_record(&[
                row.id.to_string(),
                row.address.clone(),
                row.city.clone(),
                row.zip.clone(),
                row.weight.clone(),
                row.deadline.to_string(),
                row.status.to_string(),
                row.truck.map(|t| t.to_string()).unwrap_or_default(),
                time_cell(row.departure_time),
                time_cell(row.delivery_time),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.deliveries.flush()?;
        self.trucks.flush()?;
        self.packages.flush()?;
        Ok(())
    }
}
