//! Read-only snapshots handed to every dispatch policy.

use lift_core::{Direction, ElevatorId, Floor};

/// A newly arrived call, as a policy sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Call {
    /// Floor the call was made from.
    pub origin: Floor,
    /// Travel direction the caller wants (`Up` or `Down`, never `Idle`).
    pub direction: Direction,
    /// People traveling together as one atomic unit.
    pub group_size: u32,
}

/// One elevator car's dispatch-relevant state at the instant of the call.
///
/// `floor` is the car's last *reached* floor — a car in motion reports the
/// floor it departed from until it arrives, matching how the state machine
/// updates its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarState {
    pub id: ElevatorId,
    pub floor: Floor,
    pub direction: Direction,
    /// Total people currently aboard (sum of group sizes).
    pub load: u32,
}

impl CarState {
    /// Whether this car, on its current course, will naturally pass the
    /// call's floor without reversing: same direction, floor not yet passed.
    #[inline]
    pub fn on_route_to(&self, call: &Call) -> bool {
        self.direction == call.direction
            && match self.direction {
                Direction::Up => self.floor <= call.origin,
                Direction::Down => self.floor >= call.origin,
                Direction::Idle => false,
            }
    }
}
