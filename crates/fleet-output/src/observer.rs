//! `DeliveryLogObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use fleet_core::{SimTime, TruckId};
use fleet_route::Stop;
use fleet_sim::{DayReport, SimObserver};
use fleet_store::PackageStore;

use crate::row::{DeliveryRow, package_rows, truck_rows};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes each delivery as it is reported, then the
/// truck summaries (and optionally the package table) at day end, and
/// finishes the writer.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `simulate_day` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct DeliveryLogObserver<'a, W: OutputWriter> {
    writer:        W,
    package_table: Option<(&'a PackageStore, SimTime)>,
    last_error:    Option<OutputError>,
}

impl<'a, W: OutputWriter> DeliveryLogObserver<'a, W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            package_table: None,
            last_error:    None,
        }
    }

    /// Also write `store` as observed at `at` when the day ends.
    pub fn with_package_table(mut self, store: &'a PackageStore, at: SimTime) -> Self {
        self.package_table = Some((store, at));
        self
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for DeliveryLogObserver<'_, W> {
    fn on_delivery(&mut self, truck: TruckId, stop: &Stop) {
        let result = self.writer.write_delivery(&DeliveryRow::from_stop(truck, stop));
        self.store_err(result);
    }

    fn on_day_end(&mut self, report: &DayReport) {
        let result = self.writer.write_trucks(&truck_rows(report));
        self.store_err(result);

        if let Some((store, at)) = self.package_table {
            let result = self.writer.write_packages(&package_rows(store, at));
            self.store_err(result);
        }

        let result = self.writer.finish();
        self.store_err(result);
    }
}
