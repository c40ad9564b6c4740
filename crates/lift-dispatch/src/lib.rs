//! `lift-dispatch` — call-assignment strategies.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`context`] | `Call` and `CarState` — read-only snapshots policies see      |
//! | [`policy`]  | `DispatchPolicy` trait and the `Algorithm` selector           |
//! | [`nearest`] | Algorithm A — nearest serviceable elevator                    |
//! | [`cost`]    | Algorithm B — weighted cost minimisation                      |
//!
//! # Design notes
//!
//! Policies are pure: they see an immutable snapshot of every car's position,
//! direction, and load, and return the id of the car that should answer the
//! call.  They never mutate simulation state and hold no per-run state of
//! their own, so one policy value serves an entire run.
//!
//! `select` returns `Option<ElevatorId>` only to cover the empty-bank case;
//! with at least one car both policies always choose (the nearest policy has
//! an unconditional fallback, the cost policy prices rather than excludes).
//! The orchestrator treats `None` as an unrecoverable invariant violation.

pub mod context;
pub mod cost;
pub mod nearest;
pub mod policy;

#[cfg(test)]
mod tests;

pub use context::{Call, CarState};
pub use cost::{CostPolicy, CostWeights};
pub use nearest::NearestPolicy;
pub use policy::{Algorithm, DispatchPolicy, ParseAlgorithmError};
