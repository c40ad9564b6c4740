//! The `DispatchPolicy` trait and the run-level `Algorithm` selector.

use std::fmt;
use std::str::FromStr;

use lift_core::{ElevatorId, SimConfig};
use thiserror::Error;

use crate::{Call, CarState, CostPolicy, NearestPolicy};

/// Pluggable call-assignment strategy.
///
/// Implementations are stateless with respect to the run: everything they
/// need arrives in the `call` and `cars` snapshots.  `cars` is always
/// presented in ascending id order, which fixes the first-occurrence
/// tie-break both built-in policies use.
pub trait DispatchPolicy {
    /// Pick the car that should answer `call`.
    ///
    /// Returns `None` only when `cars` is empty.  The simulation treats
    /// `None` as an unrecoverable invariant violation and aborts the run
    /// rather than dropping the call.
    fn select(&self, call: &Call, cars: &[CarState]) -> Option<ElevatorId>;

    /// Short human-readable name for logs and result records.
    fn name(&self) -> &'static str;
}

/// The two built-in strategies, selected once per simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Algorithm A — nearest elevator that can serve, global-nearest fallback.
    Nearest,
    /// Algorithm B — weighted cost minimisation over all elevators.
    CostBased,
}

impl Algorithm {
    /// Instantiate the boxed policy for this algorithm under `config`.
    pub fn build(self, config: &SimConfig) -> Box<dyn DispatchPolicy> {
        match self {
            Algorithm::Nearest => Box::new(NearestPolicy),
            Algorithm::CostBased => Box::new(CostPolicy::new(config)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Nearest => "A",
            Algorithm::CostBased => "B",
        })
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown algorithm {0:?} (expected \"A\"/\"nearest\" or \"B\"/\"cost\")")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" | "nearest" => Ok(Algorithm::Nearest),
            "b" | "cost" | "cost-based" => Ok(Algorithm::CostBased),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
