//! Fluent builder for constructing a [`BuildingSimulation`].

use lift_core::{SimConfig, SimRng};
use lift_dispatch::{Algorithm, DispatchPolicy};

use crate::{BuildingSimulation, CallGenerator, SimResult};

/// Fluent builder for [`BuildingSimulation`].
///
/// # Required input
///
/// - [`SimConfig`] — building geometry, timings, arrival rate.
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                                       |
/// |----------------|-----------------------------------------------|
/// | `.algorithm(a)`| `Algorithm::Nearest`                          |
/// | `.seed(s)`     | drawn from OS entropy (echoed in the result)  |
/// | `.policy(p)`   | built from the chosen algorithm               |
/// | `.scripted()`  | off — stochastic arrivals enabled             |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimulationBuilder::new(SimConfig::default())
///     .algorithm(Algorithm::CostBased)
///     .seed(42)
///     .build()?;
/// let result = sim.run(500.0, &mut NoopObserver)?;
/// ```
pub struct SimulationBuilder {
    config: SimConfig,
    algorithm: Algorithm,
    seed: Option<u64>,
    policy: Option<Box<dyn DispatchPolicy>>,
    generate_calls: bool,
}

impl SimulationBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            algorithm: Algorithm::Nearest,
            seed: None,
            policy: None,
            generate_calls: true,
        }
    }

    /// Select one of the two built-in dispatch strategies.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Fix the run seed.  Unseeded runs draw one from OS entropy; either way
    /// the seed used ends up in the result record.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the dispatch policy with a custom implementation (e.g. a
    /// [`CostPolicy`][lift_dispatch::CostPolicy] with tuned weights).  The
    /// result record still carries the label set via [`algorithm`][Self::algorithm].
    pub fn policy(mut self, policy: Box<dyn DispatchPolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Disable the stochastic call generator.  Calls then come only from
    /// [`BuildingSimulation::submit_call`] — the mode scenario tests use.
    pub fn scripted(mut self) -> Self {
        self.generate_calls = false;
        self
    }

    /// Validate the configuration and assemble a ready-to-run simulation.
    pub fn build(self) -> SimResult<BuildingSimulation> {
        self.config.validate()?;
        let seed = self.seed.unwrap_or_else(rand::random);
        let generator = CallGenerator::new(&self.config, SimRng::new(seed))?;
        let policy = self
            .policy
            .unwrap_or_else(|| self.algorithm.build(&self.config));
        Ok(BuildingSimulation::new(
            self.config,
            self.algorithm,
            seed,
            generator,
            policy,
            self.generate_calls,
        ))
    }
}
