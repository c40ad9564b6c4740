//! The one-call entry point external reporting layers consume.

use lift_core::SimConfig;
use lift_dispatch::Algorithm;

use crate::{NoopObserver, SimResult, SimulationBuilder, SimulationResult};

/// Run one complete simulation to `horizon` virtual time units and return
/// the plain result record.
///
/// `seed: None` draws a seed from OS entropy; the seed actually used is
/// echoed in the result so any run can be replayed exactly.
pub fn run_simulation(
    algorithm: Algorithm,
    horizon: f64,
    seed: Option<u64>,
    config: &SimConfig,
) -> SimResult<SimulationResult> {
    let mut builder = SimulationBuilder::new(config.clone()).algorithm(algorithm);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    builder.build()?.run(horizon, &mut NoopObserver)
}
