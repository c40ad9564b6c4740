//! The `OutputWriter` trait implemented by backend writers.

use crate::{ElevatorRow, JourneyRow, OutputResult, SummaryRow};

/// Trait a storage backend implements to receive simulation output.
///
/// Journeys stream in one at a time as dropoffs happen; the summary and
/// elevator rows arrive once, after the run.
pub trait OutputWriter {
    /// Write one completed journey.
    fn write_journey(&mut self, row: &JourneyRow) -> OutputResult<()>;

    /// Write the whole-run summary line.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Write the per-elevator totals of one run.
    fn write_elevators(&mut self, rows: &[ElevatorRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
