//! The building-wide registry of unserved calls, keyed by origin floor.

use std::collections::VecDeque;

use lift_core::{Floor, PassengerId};
use rustc_hash::FxHashMap;

use crate::Passenger;

/// Per-floor FIFO queues of waiting passengers.
///
/// Insertion order is arrival order and is the boarding tie-break.  A floor's
/// queue may be empty while the floor stays present in the map — elevators
/// use that distinction to recognise a stale external request (the floor was
/// called, but everyone there has since been picked up).
#[derive(Default)]
pub struct PendingCallRegistry {
    map: FxHashMap<Floor, VecDeque<Passenger>>,
}

impl PendingCallRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a newly arrived passenger under its origin floor.
    pub fn push(&mut self, passenger: Passenger) {
        self.map
            .entry(passenger.origin)
            .or_default()
            .push_back(passenger);
    }

    /// The waiting queue at `floor`, in arrival order.
    pub fn waiting(&self, floor: Floor) -> impl Iterator<Item = &Passenger> {
        self.map.get(&floor).into_iter().flatten()
    }

    /// Whether `floor` has ever been called this run (its queue may be empty).
    pub fn has_floor(&self, floor: Floor) -> bool {
        self.map.contains_key(&floor)
    }

    /// Whether nobody is currently waiting at `floor`.
    pub fn is_empty_at(&self, floor: Floor) -> bool {
        self.map.get(&floor).is_none_or(VecDeque::is_empty)
    }

    pub fn waiting_count(&self, floor: Floor) -> usize {
        self.map.get(&floor).map_or(0, VecDeque::len)
    }

    /// Total passengers waiting anywhere in the building.
    pub fn total_waiting(&self) -> usize {
        self.map.values().map(VecDeque::len).sum()
    }

    /// Remove and return the passenger `id` waiting at `floor`, preserving
    /// the order of everyone behind them.
    ///
    /// Returns `None` if the passenger is no longer there — another elevator
    /// may have claimed them between a boarding decision and its commit.
    pub fn claim(&mut self, floor: Floor, id: PassengerId) -> Option<Passenger> {
        let queue = self.map.get_mut(&floor)?;
        let idx = queue.iter().position(|p| p.id == id)?;
        queue.remove(idx)
    }
}
