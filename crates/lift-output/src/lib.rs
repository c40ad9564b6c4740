//! `lift-output` — simulation output writers for `rust_lift`.
//!
//! The CSV backend creates three files in the output directory:
//!
//! | File            | Contents                                    |
//! |-----------------|---------------------------------------------|
//! | `journeys.csv`  | one row per completed journey               |
//! | `summary.csv`   | one row per run (averages, totals, seed)    |
//! | `elevators.csv` | per-elevator movement totals                |
//!
//! The backend implements [`OutputWriter`] and is driven by
//! [`JourneyOutputObserver`], which implements `lift_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, JourneyOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = JourneyOutputObserver::new(writer);
//! let result = sim.run(500.0, &mut obs)?;
//! obs.finish_run(&result);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::JourneyOutputObserver;
pub use row::{ElevatorRow, JourneyRow, SummaryRow};
pub use writer::OutputWriter;
