//! One call-to-dropoff journey, possibly for a group traveling together.

use lift_core::{Direction, Floor, PassengerId, SimTime};

/// A passenger (or group) moving from `origin` to `destination`.
///
/// Created by the call generator at arrival time; owned by the pending-call
/// registry until boarded, then exclusively by the boarding elevator; treated
/// as read-only once dropped off.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    pub id: PassengerId,
    pub origin: Floor,
    pub destination: Floor,
    /// `Up` or `Down`, derived from origin/destination — never `Idle`.
    pub direction: Direction,
    /// People traveling as one atomic unit.  Never exceeds the configured
    /// capacity; the generator enforces this at creation.
    pub group_size: u32,
    pub arrival_time: SimTime,
    /// Unset until the group boards a car.
    pub pickup_time: Option<SimTime>,
    /// Unset until the group alights at its destination.
    pub dropoff_time: Option<SimTime>,
}

impl Passenger {
    pub fn new(
        id: PassengerId,
        origin: Floor,
        destination: Floor,
        group_size: u32,
        arrival_time: SimTime,
    ) -> Self {
        debug_assert_ne!(origin, destination);
        Self {
            id,
            origin,
            destination,
            direction: origin.direction_to(destination),
            group_size,
            arrival_time,
            pickup_time: None,
            dropoff_time: None,
        }
    }

    /// Time spent waiting at the origin floor, once boarded.
    pub fn wait_time(&self) -> Option<f64> {
        self.pickup_time.map(|t| t.since(self.arrival_time))
    }

    /// Time spent riding, once dropped off.
    pub fn trip_time(&self) -> Option<f64> {
        match (self.pickup_time, self.dropoff_time) {
            (Some(pickup), Some(dropoff)) => Some(dropoff.since(pickup)),
            _ => None,
        }
    }
}
