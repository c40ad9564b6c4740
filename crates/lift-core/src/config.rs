//! Simulation configuration.

use crate::{CoreError, CoreResult, Floor};

/// Top-level simulation configuration.
///
/// Typically loaded from a TOML/JSON file by the application crate and passed
/// to the simulation builder.  Invalid values are rejected once, at
/// construction time ([`validate`][Self::validate]); the simulation core
/// never re-checks them at runtime.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of elevator cars in the bank.  Must be ≥ 1.
    pub num_elevators: u32,

    /// Number of floors, numbered `0..num_floors`.  Must be ≥ 2 — a
    /// one-floor building has no possible journeys.
    pub num_floors: i32,

    /// Maximum number of people one car holds at any instant.  Must be ≥ 1.
    /// The call generator never creates a group larger than this.
    pub capacity: u32,

    /// Travel time between two adjacent floors, in time units.  Must be > 0.
    pub time_per_floor: f64,

    /// Door-dwell time charged once per alighting side and once per boarding
    /// side of a stopped cycle.  Must be ≥ 0.
    pub stop_time: f64,

    /// λ of the exponential inter-arrival distribution (mean inter-arrival
    /// time is `1/λ`).  Must be > 0.
    pub call_arrival_rate: f64,
}

impl Default for SimConfig {
    /// The reference building: 3 cars, 10 floors, capacity 8, 2.0 time units
    /// per floor, 1.0 door dwell, one call every 5 time units on average.
    fn default() -> Self {
        Self {
            num_elevators: 3,
            num_floors: 10,
            capacity: 8,
            time_per_floor: 2.0,
            stop_time: 1.0,
            call_arrival_rate: 0.2,
        }
    }
}

impl SimConfig {
    /// Reject invalid values with a [`CoreError::Config`].
    pub fn validate(&self) -> CoreResult<()> {
        if self.num_elevators < 1 {
            return Err(CoreError::Config("num_elevators must be >= 1".into()));
        }
        if self.num_floors < 2 {
            return Err(CoreError::Config("num_floors must be >= 2".into()));
        }
        if self.capacity < 1 {
            return Err(CoreError::Config("capacity must be >= 1".into()));
        }
        if !(self.time_per_floor.is_finite() && self.time_per_floor > 0.0) {
            return Err(CoreError::Config("time_per_floor must be > 0".into()));
        }
        if !(self.stop_time.is_finite() && self.stop_time >= 0.0) {
            return Err(CoreError::Config("stop_time must be >= 0".into()));
        }
        if !(self.call_arrival_rate.is_finite() && self.call_arrival_rate > 0.0) {
            return Err(CoreError::Config("call_arrival_rate must be > 0".into()));
        }
        Ok(())
    }

    /// The highest valid floor.
    #[inline]
    pub fn top_floor(&self) -> Floor {
        Floor(self.num_floors - 1)
    }

    /// Whether `floor` lies in this building.
    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        (0..self.num_floors).contains(&floor.0)
    }
}
