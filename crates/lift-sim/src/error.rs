//! Error types for lift-sim.

use lift_core::{CoreError, Floor};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid configuration, rejected before the run starts.
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    /// The dispatch policy produced no elevator for a call.  The nearest
    /// policy's fallback makes this unreachable with a non-empty bank, so
    /// hitting it means a logic defect; the run aborts rather than silently
    /// dropping the call.
    #[error("dispatch yielded no elevator for call at {origin}")]
    DispatchInvariantViolation { origin: Floor },

    /// A floor index outside `0..num_floors`.  Cannot arise from the call
    /// generator by construction; only directly submitted calls can trip it.
    #[error("floor {floor} outside valid range 0..{num_floors}")]
    FloorOutOfRange { floor: Floor, num_floors: i32 },

    /// A directly submitted call that violates the passenger invariants
    /// (equal floors, zero or over-capacity group).
    #[error("invalid call: {0}")]
    InvalidCall(String),

    #[error("horizon must be finite and non-negative, got {0}")]
    InvalidHorizon(f64),
}

/// Shorthand result type for lift-sim operations.
pub type SimResult<T> = Result<T, SimError>;
