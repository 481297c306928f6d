//! Independent runs over a set of parameter cases.
//!
//! Every case gets its own [`CyclotronWorld`]; nothing is shared between runs.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    core::types::SimulationParameters,
    dynamics::integrator::{IntegratorConfig, IntegratorStatus},
    error::CyclotronResult,
    world::CyclotronWorld,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepCase {
    pub params: SimulationParameters,
    pub config: IntegratorConfig,
}

impl SweepCase {
    pub fn new(params: SimulationParameters) -> Self {
        Self {
            params,
            config: IntegratorConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepOutcome {
    pub params: SimulationParameters,
    pub ticks: usize,
    pub turns: usize,
    pub final_time: f64,
    pub final_radius: f64,
    /// Lorentz factor of the last recorded turn.
    pub final_gamma: Option<f64>,
    pub status: IntegratorStatus,
}

/// Runs one case from a fresh state for at most `max_ticks` ticks.
///
/// A run that halts outside the physical regime still yields an outcome with
/// a `Halted` status; only invalid parameters are reported as errors.
pub fn run_case(case: &SweepCase, max_ticks: usize) -> CyclotronResult<SweepOutcome> {
    let mut world = CyclotronWorld::with_config(case.params, case.config)?;
    world.start();

    let mut ticks = 0;
    while ticks < max_ticks && world.is_running() {
        ticks += 1;
        if let Err(err) = world.step(case.config.time_step) {
            if !err.is_terminal() {
                return Err(err);
            }
            break;
        }
    }

    let turns = world.turns();
    let state = world.state();
    Ok(SweepOutcome {
        params: case.params,
        ticks,
        turns: turns.len(),
        final_time: state.time,
        final_radius: state.radius(),
        final_gamma: turns.last().map(|event| event.gamma),
        status: world.status(),
    })
}

/// Runs every case; results come back in input order.
pub fn run_sweep(cases: &[SweepCase], max_ticks: usize) -> Vec<CyclotronResult<SweepOutcome>> {
    #[cfg(feature = "parallel")]
    {
        cases
            .par_iter()
            .map(|case| run_case(case, max_ticks))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        cases.iter().map(|case| run_case(case, max_ticks)).collect()
    }
}
