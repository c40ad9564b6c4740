//! `JourneyOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lift_core::{ElevatorId, SimTime};
use lift_sim::{Passenger, SimObserver, SimulationResult};

use crate::row::{ElevatorRow, JourneyRow, SummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that streams every completed journey to any
/// [`OutputWriter`] backend, then appends the run's summary rows.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, call
/// [`finish_run`][Self::finish_run] with the result record, then check for
/// errors with [`take_error`][Self::take_error].
pub struct JourneyOutputObserver<W: OutputWriter> {
    writer: W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> JourneyOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Write the summary and per-elevator rows for a finished run and flush
    /// the backend.
    pub fn finish_run(&mut self, result: &SimulationResult) {
        let summary = SummaryRow {
            algorithm: result.algorithm.to_string(),
            seed: result.seed,
            avg_wait: result.avg_wait,
            avg_trip: result.avg_trip,
            total_served: result.total_served,
            total_movement: result.total_movement,
        };
        let write = self.writer.write_summary(&summary);
        self.store_err(write);

        let rows: Vec<ElevatorRow> = result
            .per_elevator
            .iter()
            .map(|r| ElevatorRow {
                elevator_id: r.id.0,
                movement_time: r.total_movement_time,
                floors_traveled: r.floors_traveled,
            })
            .collect();
        let write = self.writer.write_elevators(&rows);
        self.store_err(write);

        let write = self.writer.finish();
        self.store_err(write);
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for JourneyOutputObserver<W> {
    fn on_dropoff(&mut self, _now: SimTime, elevator: ElevatorId, passenger: &Passenger) {
        // Both timestamps are set by the time a dropoff is reported; NaN
        // would mark a bookkeeping bug without losing the rest of the row.
        let row = JourneyRow {
            passenger_id: passenger.id.0,
            elevator_id: elevator.0,
            group_size: passenger.group_size,
            origin: passenger.origin.0,
            destination: passenger.destination.0,
            arrival_time: passenger.arrival_time.0,
            pickup_time: passenger.pickup_time.map_or(f64::NAN, |t| t.0),
            dropoff_time: passenger.dropoff_time.map_or(f64::NAN, |t| t.0),
        };
        let write = self.writer.write_journey(&row);
        self.store_err(write);
    }
}
