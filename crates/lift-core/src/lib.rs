//! `lift-core` — foundational types for the `rust_lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`ids`]    | `ElevatorId`, `PassengerId`, `ProcessId`, `SignalId`  |
//! | [`floor`]  | `Floor` index and `Direction` of travel               |
//! | [`time`]   | `SimTime` — total-ordered virtual time                |
//! | [`rng`]    | `SimRng` — seeded simulation RNG                      |
//! | [`config`] | `SimConfig` and its construction-time validation      |
//! | [`error`]  | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use floor::{Direction, Floor};
pub use ids::{ElevatorId, PassengerId, ProcessId, SignalId};
pub use rng::SimRng;
pub use time::SimTime;
