//! `lift-sim` — the building simulation for `rust_lift`.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`passenger`] | `Passenger` — one call-to-dropoff journey                    |
//! | [`registry`]  | `PendingCallRegistry` — per-floor FIFO of waiting riders     |
//! | [`elevator`]  | `Elevator` state machine and `RequestKind` markers           |
//! | [`generator`] | `CallGenerator` — stochastic arrival stream                  |
//! | [`building`]  | `BuildingSimulation` orchestrator                            |
//! | [`builder`]   | `SimulationBuilder` fluent construction                      |
//! | [`stats`]     | `StatsCollector`, `SimulationResult`, `ElevatorRecord`       |
//! | [`observer`]  | `SimObserver` hooks, `NoopObserver`                          |
//! | [`runner`]    | `run_simulation` — the one-call entry point                  |
//! | [`error`]     | `SimError`, `SimResult<T>`                                   |
//!
//! # How a run works
//!
//! `BuildingSimulation` multiplexes the call generator and one state-machine
//! process per elevator on the [`lift_engine::EventEngine`].  A generated call
//! is inserted into the pending registry, handed to the configured
//! [`DispatchPolicy`][lift_dispatch::DispatchPolicy], and recorded as an
//! external request on the chosen car (waking it if parked).  Cars then scan,
//! travel, and service floors; pickups and dropoffs stream into the
//! `StatsCollector`, which the runner folds into the final result record.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimConfig;
//! use lift_dispatch::Algorithm;
//! use lift_sim::run_simulation;
//!
//! let result = run_simulation(Algorithm::CostBased, 500.0, Some(42), &SimConfig::default())?;
//! println!("avg wait {:.2}, served {}", result.avg_wait, result.total_served);
//! ```

pub mod builder;
pub mod building;
pub mod elevator;
pub mod error;
pub mod generator;
pub mod observer;
pub mod passenger;
pub mod registry;
pub mod runner;
pub mod stats;

#[cfg(test)]
mod tests;

pub use builder::SimulationBuilder;
pub use building::BuildingSimulation;
pub use elevator::{Elevator, RequestKind};
pub use error::{SimError, SimResult};
pub use generator::CallGenerator;
pub use observer::{NoopObserver, SimObserver};
pub use passenger::Passenger;
pub use registry::PendingCallRegistry;
pub use runner::run_simulation;
pub use stats::{ElevatorRecord, SimulationResult, StatsCollector};
