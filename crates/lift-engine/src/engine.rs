//! The `EventEngine` — virtual clock plus resumption scheduling.

use std::collections::BinaryHeap;

use lift_core::{ProcessId, SignalId, SimTime};
use rustc_hash::FxHashMap;

use crate::queue::Resumption;

/// How a process wants to be resumed after its current step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Suspend {
    /// Resume at `now + delay`.  `delay` must be finite and ≥ 0.
    Timed(f64),
    /// Park until [`EventEngine::signal`] fires for this signal.
    OnSignal(SignalId),
}

/// A process parked on a signal, remembering its suspension sequence number.
#[derive(Debug, Clone, Copy)]
struct Waiter {
    seq: u64,
    process: ProcessId,
}

/// Single-threaded cooperative discrete-event scheduler.
///
/// The engine owns the virtual clock and the set of pending resumptions; it
/// does not own the processes themselves.  The driving loop looks like:
///
/// ```rust,ignore
/// while let Some(pid) = engine.pop_next(horizon) {
///     let directive = step_process(pid, engine.now());
///     engine.suspend(pid, directive);
/// }
/// ```
///
/// A process parked on a signal consumes no queue slot until the signal
/// fires; firing moves it into the time queue at the current instant, keeping
/// the sequence number it was given when it suspended.
#[derive(Default)]
pub struct EventEngine {
    queue: BinaryHeap<Resumption>,
    waiters: FxHashMap<SignalId, Vec<Waiter>>,
    now: SimTime,
    next_seq: u64,
}

impl EventEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current virtual time.  Monotonically non-decreasing.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Record how `process` wants to be resumed after the step that just ran.
    pub fn suspend(&mut self, process: ProcessId, directive: Suspend) {
        match directive {
            Suspend::Timed(delay) => self.schedule_timed(process, delay),
            Suspend::OnSignal(signal) => self.schedule_on_signal(process, signal),
        }
    }

    /// Resume `process` at `now + delay`.
    pub fn schedule_timed(&mut self, process: ProcessId, delay: f64) {
        debug_assert!(delay.is_finite() && delay >= 0.0, "bad delay {delay}");
        let seq = self.take_seq();
        self.queue.push(Resumption {
            time: self.now.after(delay),
            seq,
            process,
        });
    }

    /// Park `process` until `signal` fires.
    pub fn schedule_on_signal(&mut self, process: ProcessId, signal: SignalId) {
        let seq = self.take_seq();
        self.waiters
            .entry(signal)
            .or_default()
            .push(Waiter { seq, process });
    }

    /// Fire `signal`: every process parked on it becomes runnable at the
    /// current instant, ordered among same-time resumptions by its original
    /// suspension sequence number.  Firing a signal nobody waits on is a
    /// no-op.  Returns the number of processes woken.
    pub fn signal(&mut self, signal: SignalId) -> usize {
        let Some(waiters) = self.waiters.remove(&signal) else {
            return 0;
        };
        let woken = waiters.len();
        for w in waiters {
            self.queue.push(Resumption {
                time: self.now,
                seq: w.seq,
                process: w.process,
            });
        }
        woken
    }

    /// Pop the next runnable process, advancing the clock to its resume time.
    ///
    /// Returns `None` — with the clock advanced to `horizon`, never rewound —
    /// when the queue is empty or the earliest resumption lies beyond the
    /// horizon.  Processes
    /// still parked on signals at that point are simply abandoned; any state
    /// they carry is left unrecorded, which is the accepted horizon boundary
    /// effect.
    pub fn pop_next(&mut self, horizon: SimTime) -> Option<ProcessId> {
        match self.queue.peek() {
            Some(r) if r.time <= horizon => {
                let resumption = *r;
                self.queue.pop();
                self.now = resumption.time;
                Some(resumption.process)
            }
            _ => {
                // A horizon already in the past leaves the clock untouched.
                self.now = self.now.max(horizon);
                None
            }
        }
    }

    /// Number of time-queued resumptions (excludes signal waiters).
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Number of processes parked on signals.
    pub fn parked(&self) -> usize {
        self.waiters.values().map(Vec::len).sum()
    }

    fn take_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}
