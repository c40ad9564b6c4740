//! Per-run measurement aggregation and the final result record.

use lift_core::ElevatorId;
use lift_dispatch::Algorithm;

use crate::Passenger;

// ── StatsCollector ────────────────────────────────────────────────────────────

/// Accumulates per-passenger measurements for one run.
///
/// Scoped to a single `BuildingSimulation` so parallel or repeated runs can
/// never contaminate each other's numbers.  Passengers still in flight when
/// the horizon is reached simply never report here — the accepted boundary
/// effect, not an error.
#[derive(Default)]
pub struct StatsCollector {
    wait_times: Vec<f64>,
    trip_times: Vec<f64>,
    total_served: u64,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a boarding.  `pickup_time` must already be set.
    pub fn record_pickup(&mut self, passenger: &Passenger) {
        if let Some(wait) = passenger.wait_time() {
            self.wait_times.push(wait);
        }
    }

    /// Record a completed journey.  `dropoff_time` must already be set.
    pub fn record_dropoff(&mut self, passenger: &Passenger) {
        if let Some(trip) = passenger.trip_time() {
            self.trip_times.push(trip);
        }
        self.total_served += passenger.group_size as u64;
    }

    /// People delivered so far (sum of group sizes over completed journeys).
    pub fn total_served(&self) -> u64 {
        self.total_served
    }

    pub fn wait_times(&self) -> &[f64] {
        &self.wait_times
    }

    pub fn trip_times(&self) -> &[f64] {
        &self.trip_times
    }

    pub fn avg_wait(&self) -> f64 {
        mean(&self.wait_times)
    }

    pub fn avg_trip(&self) -> f64 {
        mean(&self.trip_times)
    }
}

fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        0.0
    } else {
        xs.iter().sum::<f64>() / xs.len() as f64
    }
}

// ── Result record ─────────────────────────────────────────────────────────────

/// Movement statistics for one elevator over a whole run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorRecord {
    pub id: ElevatorId,
    /// Time spent moving between floors, charged at departure.
    pub total_movement_time: f64,
    pub floors_traveled: u64,
}

/// The plain result record a run produces, consumed by external reporting.
///
/// `PartialEq` is derived so determinism can be asserted by direct
/// comparison: identical `(algorithm, horizon, seed, config)` runs produce
/// identical records.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    pub algorithm: Algorithm,
    /// The seed actually used — echoed so a seedless run can be replayed.
    pub seed: u64,
    /// Mean wait (arrival → pickup) over all boarded groups.  0 if none.
    pub avg_wait: f64,
    /// Mean trip (pickup → dropoff) over all completed groups.  0 if none.
    pub avg_trip: f64,
    /// People delivered before the horizon.
    pub total_served: u64,
    /// Sum of every elevator's movement time.
    pub total_movement: f64,
    pub per_elevator: Vec<ElevatorRecord>,
}
