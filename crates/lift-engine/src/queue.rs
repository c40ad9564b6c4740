//! Heap entries for the engine's pending-resumption queue.

use std::cmp::Ordering;

use lift_core::{ProcessId, SimTime};

/// One pending resumption: `process` wants to run again at `time`.
///
/// `seq` is assigned when the process suspends and never reused; it breaks
/// ties at equal resume times in first-suspended-first-resumed order.
#[derive(Debug, Clone, Copy)]
pub struct Resumption {
    pub time: SimTime,
    pub seq: u64,
    pub process: ProcessId,
}

impl PartialEq for Resumption {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time && self.seq == other.seq
    }
}

impl Eq for Resumption {}

impl PartialOrd for Resumption {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Resumption {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default).
        other
            .time
            .cmp(&self.time)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
