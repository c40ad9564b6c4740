//! The elevator car state machine.
//!
//! Each car is a logical process driven by the event engine through discrete
//! [`resume`][Elevator::resume] calls.  The continuation is persisted as an
//! explicit [`Phase`] value: a resume first completes whatever the car was
//! suspended in (arriving, doors dwelling for alight/board), then loops on
//! the decide step until it suspends again — on a travel delay, a door
//! dwell, or the car's private wake signal when it parks with no requests.

use std::collections::BTreeMap;
use std::mem;
use std::ops::Bound::{Excluded, Unbounded};

use lift_core::{Direction, ElevatorId, Floor, PassengerId, SignalId, SimConfig, SimTime};
use lift_dispatch::CarState;
use lift_engine::Suspend;

use crate::observer::SimObserver;
use crate::registry::PendingCallRegistry;
use crate::stats::StatsCollector;
use crate::Passenger;

// ── Request markers ───────────────────────────────────────────────────────────

/// Why a car intends to stop at a floor.
///
/// One marker per floor: an `Internal` destination always overrides an
/// `External` call record for the same floor and is never downgraded back —
/// the car must stop there regardless, and the boarding scan will pick up any
/// compatible waiting riders anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// An unserved call waiting at the floor, tagged with its travel direction.
    External(Direction),
    /// A boarded passenger's destination.
    Internal,
}

// ── Phase (persisted continuation) ────────────────────────────────────────────

/// Where the car's process is suspended.
#[derive(Debug)]
enum Phase {
    /// No requests: parked on the wake signal.
    Parked,
    /// About to run the decide step (also the initial state).
    Decide,
    /// In motion; on resume the car is at `target`.
    Travel { target: Floor },
    /// Door dwell before passengers alight.
    Alight,
    /// Door dwell before the snapshotted `boarders` step in.
    Board { boarders: Vec<PassengerId> },
}

// ── Step context ──────────────────────────────────────────────────────────────

/// Mutable simulation state a car touches during one step.  Exactly one
/// process runs between two virtual instants, so handing these out together
/// is race-free by construction.
pub(crate) struct StepCtx<'a> {
    pub now: SimTime,
    pub config: &'a SimConfig,
    pub registry: &'a mut PendingCallRegistry,
    pub stats: &'a mut StatsCollector,
    pub observer: &'a mut dyn SimObserver,
}

// ── Elevator ──────────────────────────────────────────────────────────────────

/// One elevator car.
///
/// Invariants:
/// - the sum of boarded group sizes never exceeds the configured capacity;
/// - `direction == Idle` whenever the car parks, and it only parks with an
///   empty request map.
pub struct Elevator {
    id: ElevatorId,
    wake_signal: SignalId,
    current_floor: Floor,
    direction: Direction,
    /// Boarded passengers in boarding order.
    passengers: Vec<Passenger>,
    /// Floors this car intends to stop at.  Sorted so the direction-following
    /// scan can range over it.
    requests: BTreeMap<Floor, RequestKind>,
    phase: Phase,

    // statistics
    total_movement_time: f64,
    floors_traveled: u64,
}

impl Elevator {
    pub(crate) fn new(id: ElevatorId, wake_signal: SignalId) -> Self {
        Self {
            id,
            wake_signal,
            current_floor: Floor(0),
            direction: Direction::Idle,
            passengers: Vec::new(),
            requests: BTreeMap::new(),
            phase: Phase::Decide,
            total_movement_time: 0.0,
            floors_traveled: 0,
        }
    }

    // ── Read-only accessors ───────────────────────────────────────────────

    pub fn id(&self) -> ElevatorId {
        self.id
    }

    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// People currently aboard.
    pub fn load(&self) -> u32 {
        self.passengers.iter().map(|p| p.group_size).sum()
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// The stop marker for `floor`, if any.
    pub fn request_at(&self, floor: Floor) -> Option<RequestKind> {
        self.requests.get(&floor).copied()
    }

    pub fn is_parked(&self) -> bool {
        matches!(self.phase, Phase::Parked)
    }

    pub fn total_movement_time(&self) -> f64 {
        self.total_movement_time
    }

    pub fn floors_traveled(&self) -> u64 {
        self.floors_traveled
    }

    /// Dispatch-relevant snapshot of this car.
    pub fn car_state(&self) -> CarState {
        CarState {
            id: self.id,
            floor: self.current_floor,
            direction: self.direction,
            load: self.load(),
        }
    }

    // ── Call intake ───────────────────────────────────────────────────────

    /// Record an external call at `origin` and report whether the caller must
    /// fire this car's wake signal (the car is idle with nobody aboard).
    pub(crate) fn add_call(&mut self, origin: Floor, direction: Direction) -> bool {
        match self.requests.get(&origin) {
            // A destination marker is never downgraded to an external call.
            Some(RequestKind::Internal) => {}
            _ => {
                self.requests.insert(origin, RequestKind::External(direction));
            }
        }
        self.direction == Direction::Idle && self.passengers.is_empty()
    }

    // ── Process step ──────────────────────────────────────────────────────

    /// Run the car until its next suspension point and return the directive.
    pub(crate) fn resume(&mut self, ctx: &mut StepCtx<'_>) -> Suspend {
        // Complete the phase the car was suspended in.
        match mem::replace(&mut self.phase, Phase::Decide) {
            Phase::Parked | Phase::Decide => {}
            Phase::Travel { target } => {
                self.current_floor = target;
                if let Some(s) = self.begin_stop(ctx) {
                    return s;
                }
            }
            Phase::Alight => {
                self.commit_alight(ctx);
                if let Some(s) = self.begin_boarding(ctx) {
                    return s;
                }
            }
            Phase::Board { boarders } => {
                self.commit_board(boarders, ctx);
                self.finish_stop(ctx);
            }
        }
        self.decide(ctx)
    }

    /// The decide loop: pick the next target, start traveling or service the
    /// current floor, until something suspends the process.  Terminates
    /// because every in-place iteration removes the current floor's request.
    fn decide(&mut self, ctx: &mut StepCtx<'_>) -> Suspend {
        loop {
            if self.requests.is_empty() {
                self.direction = Direction::Idle;
                self.phase = Phase::Parked;
                return Suspend::OnSignal(self.wake_signal);
            }
            let (target, new_dir) = self.next_destination();
            if target == self.current_floor {
                if let Some(s) = self.begin_stop(ctx) {
                    return s;
                }
                // Serviced in place without a door dwell; decide again.
            } else {
                if new_dir.is_directed() {
                    self.direction = new_dir;
                }
                let floors = self.current_floor.distance(target);
                let travel = floors as f64 * ctx.config.time_per_floor;
                // Movement is charged at departure, so a run cut off by the
                // horizon mid-travel still counts the committed motion.
                self.total_movement_time += travel;
                self.floors_traveled += floors as u64;
                self.phase = Phase::Travel { target };
                return Suspend::Timed(travel);
            }
        }
    }

    /// Direction-following scan over the request map.
    ///
    /// Moving cars prefer the nearest request strictly ahead; with nothing
    /// ahead they reverse onto the farthest request behind (nearest in the
    /// new direction of travel).  Undirected cars take the request at minimum
    /// absolute distance, lower floor first on ties.
    fn next_destination(&self) -> (Floor, Direction) {
        debug_assert!(!self.requests.is_empty());
        let here = self.current_floor;
        let above = self
            .requests
            .range((Excluded(here), Unbounded))
            .next()
            .map(|(&f, _)| f);
        let below = self.requests.range(..here).next_back().map(|(&f, _)| f);

        match self.direction {
            Direction::Up => {
                if let Some(f) = above {
                    return (f, Direction::Up);
                }
                if let Some(f) = below {
                    return (f, Direction::Down);
                }
            }
            Direction::Down => {
                if let Some(f) = below {
                    return (f, Direction::Down);
                }
                if let Some(f) = above {
                    return (f, Direction::Up);
                }
            }
            Direction::Idle => {}
        }

        // Undirected, or the only request is the current floor itself.
        let mut best = here;
        let mut best_distance = u32::MAX;
        for &floor in self.requests.keys() {
            let d = here.distance(floor);
            if d < best_distance {
                best = floor;
                best_distance = d;
            }
        }
        (best, here.direction_to(best))
    }

    // ── Stopped cycle ─────────────────────────────────────────────────────

    /// Start servicing the current floor: alight first.  Returns the
    /// suspension if a door dwell is needed, `None` if the whole stopped
    /// cycle completed without one.
    fn begin_stop(&mut self, ctx: &mut StepCtx<'_>) -> Option<Suspend> {
        let here = self.current_floor;
        if self.passengers.iter().any(|p| p.destination == here) {
            self.phase = Phase::Alight;
            return Some(Suspend::Timed(ctx.config.stop_time));
        }
        self.begin_boarding(ctx)
    }

    /// Disembark everyone destined here; the dwell has already elapsed.
    fn commit_alight(&mut self, ctx: &mut StepCtx<'_>) {
        let here = self.current_floor;
        let (out, stay): (Vec<_>, Vec<_>) = mem::take(&mut self.passengers)
            .into_iter()
            .partition(|p| p.destination == here);
        self.passengers = stay;
        for mut p in out {
            p.dropoff_time = Some(ctx.now);
            ctx.stats.record_dropoff(&p);
            ctx.observer.on_dropoff(ctx.now, self.id, &p);
        }
        // The destination marker is served.
        if self.requests.get(&here) == Some(&RequestKind::Internal) {
            self.requests.remove(&here);
        }
    }

    /// Decide who boards.  The decision is snapshotted *before* the door
    /// dwell: passengers arriving during the dwell wait for the next stop.
    fn begin_boarding(&mut self, ctx: &mut StepCtx<'_>) -> Option<Suspend> {
        let here = self.current_floor;
        // A called floor whose queue has emptied is a stale external request.
        if ctx.registry.has_floor(here) && ctx.registry.is_empty_at(here) {
            self.remove_external(here);
        }
        let boarders = self.plan_boarding(ctx);
        if !boarders.is_empty() {
            self.phase = Phase::Board { boarders };
            return Some(Suspend::Timed(ctx.config.stop_time));
        }
        self.finish_stop(ctx);
        None
    }

    /// FIFO scan of the floor's queue.  A wrong-way rider is skipped and the
    /// scan continues; the first rider that fails *capacity* stops the scan
    /// entirely — no skip-ahead to a smaller group behind them.  Accepted
    /// boarders count toward capacity for the rest of the scan.
    fn plan_boarding(&self, ctx: &StepCtx<'_>) -> Vec<PassengerId> {
        let mut boarders = Vec::new();
        let mut load = self.load();
        for p in ctx.registry.waiting(self.current_floor) {
            let direction_ok = !self.direction.is_directed() || p.direction == self.direction;
            if !direction_ok {
                continue;
            }
            if load + p.group_size > ctx.config.capacity {
                break;
            }
            load += p.group_size;
            boarders.push(p.id);
        }
        boarders
    }

    /// Board the snapshotted riders; the dwell has already elapsed.
    fn commit_board(&mut self, boarders: Vec<PassengerId>, ctx: &mut StepCtx<'_>) {
        let here = self.current_floor;
        for id in boarders {
            // Another car may have claimed the rider during the dwell.
            let Some(mut p) = ctx.registry.claim(here, id) else {
                continue;
            };
            p.pickup_time = Some(ctx.now);
            ctx.stats.record_pickup(&p);
            let load_after = self.load() + p.group_size;
            ctx.observer.on_pickup(ctx.now, self.id, &p, load_after);
            // An internal destination overrides any external marker there.
            self.requests.insert(p.destination, RequestKind::Internal);
            self.passengers.push(p);
        }
        debug_assert!(self.load() <= ctx.config.capacity);
    }

    /// Post-boarding cleanup of this floor's external claim.  The empty-scan
    /// test subsumes a direction-only check: a kept claim always has at
    /// least one boardable (hence direction-compatible) rider waiting.
    fn finish_stop(&mut self, ctx: &mut StepCtx<'_>) {
        let here = self.current_floor;
        if ctx.registry.is_empty_at(here) {
            // Nobody left waiting: the claim is fulfilled.
            self.remove_external(here);
        } else if self.plan_boarding(ctx).is_empty() {
            // Riders remain but none can board this cycle (wrong way, or
            // queued behind a group that does not fit).  Release the claim so
            // other cars are not blocked from answering it and this car does
            // not re-target its own floor without ever making progress.
            self.remove_external(here);
        }
    }

    fn remove_external(&mut self, floor: Floor) {
        if matches!(self.requests.get(&floor), Some(RequestKind::External(_))) {
            self.requests.remove(&floor);
        }
    }
}
