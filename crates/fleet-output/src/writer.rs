//! The `OutputWriter` trait implemented by report backends.

use crate::{DeliveryRow, OutputResult, PackageRow, TruckSummaryRow};

/// A sink for report rows.
///
/// Errors surface through [`DeliveryLogObserver::take_error`][crate::DeliveryLogObserver::take_error]
/// when the writer is driven by the simulator.
pub trait OutputWriter {
    /// Write one delivery.
    fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()>;

    /// Write a batch of truck summaries.
    fn write_trucks(&mut self, rows: &[TruckSummaryRow]) -> OutputResult<()>;

    /// Write a batch of package rows.
    fn write_packages(&mut self, rows: &[PackageRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
