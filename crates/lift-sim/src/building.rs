//! The `BuildingSimulation` orchestrator and its event loop.

use lift_core::{ElevatorId, Floor, PassengerId, ProcessId, SignalId, SimConfig, SimTime};
use lift_dispatch::{Algorithm, Call, CarState, DispatchPolicy};
use lift_engine::{EventEngine, Suspend};

use crate::elevator::StepCtx;
use crate::stats::ElevatorRecord;
use crate::{
    CallGenerator, Elevator, Passenger, PendingCallRegistry, SimError, SimObserver, SimResult,
    SimulationResult, StatsCollector,
};

/// The building: elevator bank, pending-call registry, call generator, and
/// the dispatch policy wiring them together, all multiplexed on one
/// [`EventEngine`].
///
/// Construct via [`SimulationBuilder`][crate::SimulationBuilder], then call
/// [`run`][Self::run].  Scripted scenarios (builder's `scripted()` mode)
/// submit calls with [`submit_call`][Self::submit_call] before running.
pub struct BuildingSimulation {
    config: SimConfig,
    algorithm: Algorithm,
    seed: u64,
    engine: EventEngine,
    elevators: Vec<Elevator>,
    registry: PendingCallRegistry,
    generator: CallGenerator,
    policy: Box<dyn DispatchPolicy>,
    stats: StatsCollector,
    next_passenger_id: u32,
    generate_calls: bool,
    started: bool,
}

impl BuildingSimulation {
    const GENERATOR: ProcessId = ProcessId(0);

    fn elevator_process(idx: usize) -> ProcessId {
        ProcessId(idx as u32 + 1)
    }

    fn wake_signal(id: ElevatorId) -> SignalId {
        SignalId(id.0)
    }

    pub(crate) fn new(
        config: SimConfig,
        algorithm: Algorithm,
        seed: u64,
        generator: CallGenerator,
        policy: Box<dyn DispatchPolicy>,
        generate_calls: bool,
    ) -> Self {
        let elevators = (0..config.num_elevators)
            .map(|i| Elevator::new(ElevatorId(i), Self::wake_signal(ElevatorId(i))))
            .collect();
        Self {
            config,
            algorithm,
            seed,
            engine: EventEngine::new(),
            elevators,
            registry: PendingCallRegistry::new(),
            generator,
            policy,
            stats: StatsCollector::new(),
            next_passenger_id: 0,
            generate_calls,
            started: false,
        }
    }

    // ── Inspection ────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn pending_calls(&self) -> &PendingCallRegistry {
        &self.registry
    }

    pub fn stats(&self) -> &StatsCollector {
        &self.stats
    }

    /// Current virtual time.
    pub fn now(&self) -> SimTime {
        self.engine.now()
    }

    // ── Call intake ───────────────────────────────────────────────────────

    /// Submit a call directly, bypassing the stochastic generator — the seam
    /// scripted scenarios use.  Validated defensively: the generator can
    /// never produce these violations, so they are caller errors here.
    pub fn submit_call(
        &mut self,
        origin: Floor,
        destination: Floor,
        group_size: u32,
    ) -> SimResult<PassengerId> {
        for floor in [origin, destination] {
            if !self.config.contains(floor) {
                return Err(SimError::FloorOutOfRange {
                    floor,
                    num_floors: self.config.num_floors,
                });
            }
        }
        if origin == destination {
            return Err(SimError::InvalidCall(format!(
                "origin and destination are both {origin}"
            )));
        }
        if group_size == 0 || group_size > self.config.capacity {
            return Err(SimError::InvalidCall(format!(
                "group of {group_size} does not fit capacity {}",
                self.config.capacity
            )));
        }
        let passenger = Passenger::new(
            self.take_passenger_id(),
            origin,
            destination,
            group_size,
            self.engine.now(),
        );
        let id = passenger.id;
        self.dispatch(passenger)?;
        Ok(id)
    }

    /// Register a call, pick a car, and record the external request on it.
    ///
    /// Registry insertion precedes assignment deliberately: a car already
    /// parked at the call floor must see the rider on its very next decision
    /// step.
    fn dispatch(&mut self, passenger: Passenger) -> SimResult<()> {
        let call = Call {
            origin: passenger.origin,
            direction: passenger.direction,
            group_size: passenger.group_size,
        };
        self.registry.push(passenger);

        let cars: Vec<CarState> = self.elevators.iter().map(Elevator::car_state).collect();
        let chosen = self
            .policy
            .select(&call, &cars)
            .ok_or(SimError::DispatchInvariantViolation { origin: call.origin })?;
        let car = self
            .elevators
            .get_mut(chosen.index())
            .ok_or(SimError::DispatchInvariantViolation { origin: call.origin })?;

        if car.add_call(call.origin, call.direction) {
            self.engine.signal(Self::wake_signal(chosen));
        }
        Ok(())
    }

    fn take_passenger_id(&mut self) -> PassengerId {
        let id = PassengerId(self.next_passenger_id);
        self.next_passenger_id += 1;
        id
    }

    // ── The event loop ────────────────────────────────────────────────────

    /// Advance the simulation to `horizon` and return the result record.
    ///
    /// May be called again with a later horizon to continue the same run;
    /// passengers still in flight at the final horizon stay unrecorded.
    pub fn run<O: SimObserver>(
        &mut self,
        horizon: f64,
        observer: &mut O,
    ) -> SimResult<SimulationResult> {
        if !(horizon.is_finite() && horizon >= 0.0) {
            return Err(SimError::InvalidHorizon(horizon));
        }
        let horizon = SimTime(horizon);
        // A continued run may only extend the clock, never rewind it.
        if horizon < self.engine.now() {
            return Err(SimError::InvalidHorizon(horizon.0));
        }

        if !self.started {
            self.start(observer);
        }
        while let Some(pid) = self.engine.pop_next(horizon) {
            if pid == Self::GENERATOR {
                self.generator_step(observer)?;
            } else {
                self.elevator_step(pid, observer);
            }
        }
        observer.on_sim_end(self.engine.now());
        Ok(self.result())
    }

    /// Give every process its initial suspension, in creation order:
    /// elevators park first, then the generator arms its first arrival.
    /// This order is what makes the wake-signal handshake airtight — a call
    /// can never fire before its target elevator is parked.
    fn start<O: SimObserver>(&mut self, observer: &mut O) {
        self.started = true;
        for idx in 0..self.elevators.len() {
            let directive = self.resume_elevator(idx, observer);
            self.engine.suspend(Self::elevator_process(idx), directive);
        }
        if self.generate_calls {
            let delay = self.generator.sample_delay();
            self.engine.suspend(Self::GENERATOR, Suspend::Timed(delay));
        }
    }

    /// One generator step: create the arrival that is due now, register and
    /// dispatch it, then sleep until the next one.
    fn generator_step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.engine.now();
        let draw = self.generator.draw_call();
        let passenger = Passenger::new(
            self.take_passenger_id(),
            draw.origin,
            draw.destination,
            draw.group_size,
            now,
        );
        observer.on_call(now, &passenger);
        self.dispatch(passenger)?;

        let delay = self.generator.sample_delay();
        self.engine.suspend(Self::GENERATOR, Suspend::Timed(delay));
        Ok(())
    }

    fn elevator_step<O: SimObserver>(&mut self, pid: ProcessId, observer: &mut O) {
        let idx = pid.index() - 1;
        let directive = self.resume_elevator(idx, observer);
        self.engine.suspend(pid, directive);
    }

    fn resume_elevator<O: SimObserver>(&mut self, idx: usize, observer: &mut O) -> Suspend {
        let mut ctx = StepCtx {
            now: self.engine.now(),
            config: &self.config,
            registry: &mut self.registry,
            stats: &mut self.stats,
            observer,
        };
        self.elevators[idx].resume(&mut ctx)
    }

    // ── Result assembly ───────────────────────────────────────────────────

    fn result(&self) -> SimulationResult {
        let per_elevator: Vec<ElevatorRecord> = self
            .elevators
            .iter()
            .map(|e| ElevatorRecord {
                id: e.id(),
                total_movement_time: e.total_movement_time(),
                floors_traveled: e.floors_traveled(),
            })
            .collect();
        SimulationResult {
            algorithm: self.algorithm,
            seed: self.seed,
            avg_wait: self.stats.avg_wait(),
            avg_trip: self.stats.avg_trip(),
            total_served: self.stats.total_served(),
            total_movement: per_elevator.iter().map(|r| r.total_movement_time).sum(),
            per_elevator,
        }
    }
}
