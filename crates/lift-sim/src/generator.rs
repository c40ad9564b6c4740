//! The stochastic call arrival stream.

use lift_core::{CoreError, CoreResult, Floor, SimConfig, SimRng};
use rand_distr::Exp;

/// The random draws making up one call, before it becomes a `Passenger`.
#[derive(Debug, Clone, Copy)]
pub struct CallDraw {
    pub origin: Floor,
    pub destination: Floor,
    pub group_size: u32,
}

/// Produces passenger arrivals as a Poisson process: exponential
/// inter-arrival times with rate λ, uniform origin, uniform destination
/// excluding the origin, uniform group size in `[1, capacity]`.
///
/// All randomness of a run flows through this one generator, so a fixed seed
/// fixes the entire arrival stream.
pub struct CallGenerator {
    rng: SimRng,
    inter_arrival: Exp<f64>,
    num_floors: i32,
    capacity: u32,
}

impl CallGenerator {
    pub(crate) fn new(config: &SimConfig, rng: SimRng) -> CoreResult<Self> {
        let inter_arrival = Exp::new(config.call_arrival_rate)
            .map_err(|e| CoreError::Config(format!("call_arrival_rate: {e}")))?;
        Ok(Self {
            rng,
            inter_arrival,
            num_floors: config.num_floors,
            capacity: config.capacity,
        })
    }

    /// Time until the next arrival.
    pub(crate) fn sample_delay(&mut self) -> f64 {
        self.rng.sample(&self.inter_arrival)
    }

    /// Draw the next call.  The destination is redrawn until it differs from
    /// the origin; the group size can never exceed capacity by construction.
    pub(crate) fn draw_call(&mut self) -> CallDraw {
        let origin = Floor(self.rng.gen_range(0..self.num_floors));
        let mut destination = origin;
        while destination == origin {
            destination = Floor(self.rng.gen_range(0..self.num_floors));
        }
        let group_size = self.rng.gen_range(1..=self.capacity);
        CallDraw {
            origin,
            destination,
            group_size,
        }
    }
}
