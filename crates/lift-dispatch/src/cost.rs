//! Algorithm B — weighted cost minimisation.

use lift_core::{ElevatorId, SimConfig};

use crate::{Call, CarState, DispatchPolicy};

/// Tunable weights for the cost function.
///
/// Defaults reproduce the reference constants: a heavily loaded car is worth
/// avoiding, a wrong-way committed car more so, and a car that would overflow
/// is priced out entirely (but never hard-excluded — if every car overflows,
/// the cheapest overflowing one still wins).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostWeights {
    /// Cost per person already aboard.
    pub load_weight: f64,
    /// Flat penalty for a car committed to the opposite direction and not
    /// on-route to the call.
    pub direction_penalty: f64,
    /// Added when the call's group would not fit the car's remaining space.
    pub capacity_overflow: f64,
    /// Fraction of the travel cost refunded when the car is on-route.
    pub on_route_bonus: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            load_weight: 5.0,
            direction_penalty: 100.0,
            capacity_overflow: 5000.0,
            on_route_bonus: 0.5,
        }
    }
}

/// For every car compute
///
/// ```text
/// cost = distance·time_per_floor + load·load_weight + direction_penalty
///        − on_route_bonus·distance·time_per_floor + capacity_overflow
/// ```
///
/// (penalty, bonus, and overflow terms applying only when their conditions
/// hold) and select the cheapest car, first occurrence in id order on ties.
pub struct CostPolicy {
    time_per_floor: f64,
    capacity: u32,
    weights: CostWeights,
}

impl CostPolicy {
    pub fn new(config: &SimConfig) -> Self {
        Self::with_weights(config, CostWeights::default())
    }

    pub fn with_weights(config: &SimConfig, weights: CostWeights) -> Self {
        Self {
            time_per_floor: config.time_per_floor,
            capacity: config.capacity,
            weights,
        }
    }

    /// Assignment cost of `call` for one car.
    pub fn cost(&self, car: &CarState, call: &Call) -> f64 {
        let w = &self.weights;
        let travel = car.floor.distance(call.origin) as f64 * self.time_per_floor;
        let on_route = car.on_route_to(call);

        let bonus = if on_route { w.on_route_bonus * travel } else { 0.0 };
        let penalty = if car.direction.is_directed() && !on_route && car.direction != call.direction
        {
            w.direction_penalty
        } else {
            0.0
        };
        let overflow = if car.load + call.group_size > self.capacity {
            w.capacity_overflow
        } else {
            0.0
        };

        travel + car.load as f64 * w.load_weight + penalty - bonus + overflow
    }
}

impl DispatchPolicy for CostPolicy {
    fn select(&self, call: &Call, cars: &[CarState]) -> Option<ElevatorId> {
        let mut best: Option<(f64, ElevatorId)> = None;
        for car in cars {
            let c = self.cost(car, call);
            if best.is_none_or(|(bc, _)| c < bc) {
                best = Some((c, car.id));
            }
        }
        best.map(|(_, id)| id)
    }

    fn name(&self) -> &'static str {
        "cost-based"
    }
}
