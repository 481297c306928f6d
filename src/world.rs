pub mod trail;

use log::{debug, info};

use crate::{
    core::{
        turn_log::{SharedTurnLog, TurnLog},
        types::{KinematicState, SimulationParameters, TurnEvent},
    },
    dynamics::{
        derivation::{derive_from, DerivedParameters},
        integrator::{IntegratorConfig, IntegratorStatus, StepIntegrator},
    },
    error::CyclotronResult,
    utils::logging::ScopedTimer,
};

pub use trail::Trail;

/// Values shown in the live readout panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readouts {
    /// Classical readouts, rounded for display.
    pub derived: DerivedParameters,
    pub kinetic_energy_kev: f64,
    pub half_turns: u32,
    /// Lorentz factor of the latest turn, `1.0` before the first one.
    pub lorentz_factor: f64,
    /// Current orbit radius in normalized units.
    pub orbit_radius: f64,
    pub elapsed: f64,
}

/// One simulation session: parameters, readouts, integrator, turn log, and trail.
pub struct CyclotronWorld {
    params: SimulationParameters,
    derived: DerivedParameters,
    integrator: StepIntegrator,
    turn_log: SharedTurnLog,
    trail: Trail,
}

impl CyclotronWorld {
    pub fn new(params: SimulationParameters) -> CyclotronResult<Self> {
        Self::with_config(params, IntegratorConfig::default())
    }

    pub fn with_config(
        params: SimulationParameters,
        config: IntegratorConfig,
    ) -> CyclotronResult<Self> {
        let derived = derive_from(&params)?;
        let integrator = StepIntegrator::with_config(params, config)?;
        let mut trail = Trail::default();
        trail.sample(integrator.state().position);
        Ok(Self {
            params,
            derived,
            integrator,
            turn_log: TurnLog::shared(),
            trail,
        })
    }

    /// Replaces the parameter set and recomputes readouts.
    ///
    /// A running particle keeps its state and continues with the new field.
    /// On error nothing changes.
    pub fn set_parameters(&mut self, params: SimulationParameters) -> CyclotronResult<()> {
        let derived = derive_from(&params)?;
        self.integrator.set_parameters(params)?;
        self.params = params;
        self.derived = derived;
        debug!(
            "parameters updated: {} at {:.3} T, f = {:.3} MHz",
            params.particle_type, params.magnetic_flux_density, derived.frequency_mhz
        );
        Ok(())
    }

    /// Returns the particle to the centre and clears the log and trail.
    pub fn reset(&mut self) {
        self.integrator.reset();
        self.turn_log.write().clear();
        self.trail.clear();
        self.trail.sample(self.integrator.state().position);
    }

    /// Restores default parameters and resets the run.
    pub fn reset_to_defaults(&mut self) -> CyclotronResult<()> {
        self.set_parameters(SimulationParameters::default())?;
        self.reset();
        Ok(())
    }

    pub fn start(&mut self) {
        self.integrator.start();
    }

    pub fn pause(&mut self) {
        self.integrator.pause();
    }

    /// Start/stop button behaviour.
    pub fn toggle(&mut self) {
        if self.integrator.is_running() {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Advances one frame. `real_dt` is the wall-clock frame delta.
    pub fn step(&mut self, real_dt: f64) -> CyclotronResult<Option<TurnEvent>> {
        let _timer = ScopedTimer::new("world::step");
        let was_running = self.integrator.is_running();
        let event = self.integrator.tick(real_dt)?;

        if let Some(event) = event {
            self.turn_log.write().push(event);
        }
        if was_running && self.integrator.is_running() {
            self.trail.sample(self.integrator.state().position);
        }
        Ok(event)
    }

    /// Steps until the run stops or `max_frames` frames have passed.
    /// Returns the number of frames stepped.
    ///
    /// A run that halts outside the physical regime ends normally; read
    /// [`Self::status`] for the reason.
    pub fn run(&mut self, max_frames: usize) -> CyclotronResult<usize> {
        let mut frames = 0;
        while frames < max_frames && self.integrator.is_running() {
            frames += 1;
            if let Err(err) = self.step(self.integrator.config().time_step) {
                if !err.is_terminal() {
                    return Err(err);
                }
                break;
            }
        }
        if self.integrator.status().is_terminal() {
            info!(
                "run finished after {frames} frames with {} turns recorded",
                self.turn_log.read().len()
            );
        }
        Ok(frames)
    }

    pub fn readouts(&self) -> Readouts {
        let log = self.turn_log.read();
        let state = self.integrator.state();
        Readouts {
            derived: self.derived.rounded(),
            kinetic_energy_kev: self.params.kinetic_energy_kev,
            half_turns: state.half_turns,
            lorentz_factor: log.latest().map_or(1.0, |event| event.gamma),
            orbit_radius: state.radius(),
            elapsed: state.time,
        }
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.params
    }

    /// Unrounded classical readouts.
    pub fn derived(&self) -> &DerivedParameters {
        &self.derived
    }

    pub fn state(&self) -> &KinematicState {
        self.integrator.state()
    }

    pub fn status(&self) -> IntegratorStatus {
        self.integrator.status()
    }

    pub fn is_running(&self) -> bool {
        self.integrator.is_running()
    }

    pub fn integrator(&self) -> &StepIntegrator {
        &self.integrator
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Handle to the turn log for collaborators on other threads.
    pub fn turn_log(&self) -> SharedTurnLog {
        SharedTurnLog::clone(&self.turn_log)
    }

    /// Copy of the recorded turns.
    pub fn turns(&self) -> Vec<TurnEvent> {
        self.turn_log.read().as_slice().to_vec()
    }

    pub fn export_csv<W: std::io::Write>(&self, writer: W) -> CyclotronResult<()> {
        crate::export::write_csv(writer, &self.turn_log.read())
    }
}
