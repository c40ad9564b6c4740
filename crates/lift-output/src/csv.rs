//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `journeys.csv`
//! - `summary.csv`
//! - `elevators.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ElevatorRow, JourneyRow, OutputResult, SummaryRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    journeys:  Writer<File>,
    summaries: Writer<File>,
    elevators: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut journeys = Writer::from_path(dir.join("journeys.csv"))?;
        journeys.write_record([
            "passenger_id",
            "elevator_id",
            "group_size",
            "origin",
            "destination",
            "arrival_time",
            "pickup_time",
            "dropoff_time",
        ])?;

        let mut summaries = Writer::from_path(dir.join("summary.csv"))?;
        summaries.write_record([
            "algorithm",
            "seed",
            "avg_wait",
            "avg_trip",
            "total_served",
            "total_movement",
        ])?;

        let mut elevators = Writer::from_path(dir.join("elevators.csv"))?;
        elevators.write_record(["elevator_id", "movement_time", "floors_traveled"])?;

        Ok(Self {
            journeys,
            summaries,
            elevators,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_journey(&mut self, row: &JourneyRow) -> OutputResult<()> {
        self.journeys.write_record(&[
            row.passenger_id.to_string(),
            row.elevator_id.to_string(),
            row.group_size.to_string(),
            row.origin.to_string(),
            row.destination.to_string(),
            row.arrival_time.to_string(),
            row.pickup_time.to_string(),
            row.dropoff_time.to_string(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.algorithm.clone(),
            row.seed.to_string(),
            row.avg_wait.to_string(),
            row.avg_trip.to_string(),
            row.total_served.to_string(),
            row.total_movement.to_string(),
        ])?;
        Ok(())
    }

    fn write_elevators(&mut self, rows: &[ElevatorRow]) -> OutputResult<()> {
        for row in rows {
            self.elevators.write_record(&[
                row.elevator_id.to_string(),
                row.movement_time.to_string(),
                row.floors_traveled.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.journeys.flush()?;
        self.summaries.flush()?;
        self.elevators.flush()?;
        Ok(())
    }
}
