//! Simulation observer trait for progress reporting and data collection.

use lift_core::{ElevatorId, SimTime};

use crate::Passenger;

/// Callbacks invoked by [`BuildingSimulation::run`][crate::BuildingSimulation::run]
/// at the key lifecycle points of every journey.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Callbacks fire at the instant the event
/// is committed (e.g. `on_pickup` fires after the boarding door-dwell, when
/// `pickup_time` is recorded).
///
/// # Example — journey logger
///
/// ```rust,ignore
/// struct JourneyLog;
///
/// impl SimObserver for JourneyLog {
///     fn on_dropoff(&mut self, now: SimTime, car: ElevatorId, p: &Passenger) {
///         println!("{now}: {car} dropped {} ({} people)", p.id, p.group_size);
///     }
/// }
/// ```
pub trait SimObserver {
    /// A new call entered the system and was assigned to an elevator.
    fn on_call(&mut self, _now: SimTime, _passenger: &Passenger) {}

    /// `passenger` boarded `elevator`; `load_after` is the car's occupancy
    /// including the boarding group.
    fn on_pickup(
        &mut self,
        _now: SimTime,
        _elevator: ElevatorId,
        _passenger: &Passenger,
        _load_after: u32,
    ) {
    }

    /// `passenger` alighted at its destination; `dropoff_time` is set.
    fn on_dropoff(&mut self, _now: SimTime, _elevator: ElevatorId, _passenger: &Passenger) {}

    /// The clock reached the horizon and the run is over.
    fn on_sim_end(&mut self, _final_time: SimTime) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
