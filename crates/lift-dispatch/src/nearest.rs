//! Algorithm A — nearest serviceable elevator.

use lift_core::ElevatorId;

use crate::{Call, CarState, DispatchPolicy};

/// Pick the closest car that can serve the call without reversing: one that
/// is idle, or already headed the call's way and not yet past the call floor.
/// If no car qualifies, fall back to the globally nearest car regardless of
/// state — a selection must always exist.
///
/// Distance ties go to the first qualifying car in id order.
pub struct NearestPolicy;

impl DispatchPolicy for NearestPolicy {
    fn select(&self, call: &Call, cars: &[CarState]) -> Option<ElevatorId> {
        nearest(cars.iter().filter(|c| can_serve(c, call)), call)
            .or_else(|| nearest(cars.iter(), call))
    }

    fn name(&self) -> &'static str {
        "nearest"
    }
}

fn can_serve(car: &CarState, call: &Call) -> bool {
    !car.direction.is_directed() || car.on_route_to(call)
}

/// Minimum-distance car, keeping the first occurrence on ties.
fn nearest<'a>(cars: impl Iterator<Item = &'a CarState>, call: &Call) -> Option<ElevatorId> {
    let mut best: Option<(u32, ElevatorId)> = None;
    for car in cars {
        let d = car.floor.distance(call.origin);
        if best.is_none_or(|(bd, _)| d < bd) {
            best = Some((d, car.id));
        }
    }
    best.map(|(_, id)| id)
}
