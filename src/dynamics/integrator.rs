use glam::DVec2;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::{
    config::{
        DEFAULT_EXIT_RADIUS, DEFAULT_LAUNCH_VELOCITY, DEFAULT_OMEGA_COUPLING, DEFAULT_TIME_STEP,
    },
    core::{
        constants::HZ_PER_MHZ,
        species::SpeciesProperties,
        types::{KinematicState, SimulationParameters, TurnEvent},
    },
    dynamics::{
        derivation::{check_positive, checked_properties, cyclotron_frequency},
        relativity::TurnQuantities,
    },
    error::{CyclotronError, CyclotronResult},
};

/// Tunables of the fixed-step integrator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegratorConfig {
    /// Physics step applied per tick, independent of the wall-clock delta.
    pub time_step: f64,
    /// Angular rate per MHz of cyclotron frequency.
    pub omega_coupling: f64,
    /// Radius at which the particle is considered to have left the device.
    pub exit_radius: f64,
    pub launch_velocity: DVec2,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            omega_coupling: DEFAULT_OMEGA_COUPLING,
            exit_radius: DEFAULT_EXIT_RADIUS,
            launch_velocity: DVec2::from_array(DEFAULT_LAUNCH_VELOCITY),
        }
    }
}

/// Why a run stopped outside the valid physical regime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum HaltReason {
    Superluminal { speed: f64 },
    NonFinite { quantity: &'static str },
}

impl HaltReason {
    fn from_error(err: &CyclotronError) -> Option<Self> {
        match err {
            CyclotronError::Superluminal { speed, .. } => {
                Some(HaltReason::Superluminal { speed: *speed })
            }
            CyclotronError::NonFinite { quantity } => Some(HaltReason::NonFinite {
                quantity: *quantity,
            }),
            _ => None,
        }
    }
}

/// Lifecycle of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum IntegratorStatus {
    Idle,
    Running,
    Paused,
    /// The particle reached the exit radius; frozen until reset.
    Exited,
    /// A turn could not be evaluated; frozen until reset.
    Halted(HaltReason),
}

impl IntegratorStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, IntegratorStatus::Exited | IntegratorStatus::Halted(_))
    }
}

/// Fixed-step integrator owning the particle state of one run.
///
/// Each tick rotates the velocity by an explicit Euler step at angular rate
/// `frequency_mhz * omega_coupling`, which slowly inflates the speed and makes
/// the orbit spiral outwards. A gap crossing is recorded whenever the polar
/// angle passes zero from below.
#[derive(Debug, Clone)]
pub struct StepIntegrator {
    config: IntegratorConfig,
    params: SimulationParameters,
    props: SpeciesProperties,
    frequency_mhz: f64,
    state: KinematicState,
    status: IntegratorStatus,
}

impl StepIntegrator {
    pub fn new(params: SimulationParameters) -> CyclotronResult<Self> {
        Self::with_config(params, IntegratorConfig::default())
    }

    pub fn with_config(
        params: SimulationParameters,
        config: IntegratorConfig,
    ) -> CyclotronResult<Self> {
        check_positive("time_step", config.time_step)?;
        let (props, frequency_mhz) = Self::coupling(&params)?;
        Ok(Self {
            config,
            params,
            props,
            frequency_mhz,
            state: KinematicState::launch(config.launch_velocity),
            status: IntegratorStatus::Idle,
        })
    }

    /// Swaps in a new parameter set without touching the particle state.
    pub fn set_parameters(&mut self, params: SimulationParameters) -> CyclotronResult<()> {
        let (props, frequency_mhz) = Self::coupling(&params)?;
        self.params = params;
        self.props = props;
        self.frequency_mhz = frequency_mhz;
        Ok(())
    }

    fn coupling(params: &SimulationParameters) -> CyclotronResult<(SpeciesProperties, f64)> {
        let props = checked_properties(params.particle_type)?;
        let flux_density = check_positive("magnetic_flux_density", params.magnetic_flux_density)?;
        let frequency_mhz = cyclotron_frequency(&props, flux_density) / HZ_PER_MHZ;
        Ok((props, frequency_mhz))
    }

    pub fn reset(&mut self) {
        self.state = KinematicState::launch(self.config.launch_velocity);
        self.status = IntegratorStatus::Idle;
        debug!("integrator reset");
    }

    pub fn start(&mut self) {
        match self.status {
            IntegratorStatus::Idle | IntegratorStatus::Paused => {
                self.status = IntegratorStatus::Running;
                debug!("integrator running");
            }
            status => debug!("start ignored while {status:?}"),
        }
    }

    pub fn pause(&mut self) {
        if self.status == IntegratorStatus::Running {
            self.status = IntegratorStatus::Paused;
            debug!("integrator paused at t = {:.3}", self.state.time);
        }
    }

    /// Advances the run by one fixed step.
    ///
    /// `_real_dt` is the wall-clock time since the previous frame; it is
    /// accepted for drivers but never enters the physics, so a run is
    /// determined by its tick count alone. Returns the turn event emitted by
    /// this step, if any. Outside `Running` nothing happens.
    pub fn tick(&mut self, _real_dt: f64) -> CyclotronResult<Option<TurnEvent>> {
        if self.status != IntegratorStatus::Running {
            return Ok(None);
        }

        if self.state.radius() >= self.config.exit_radius {
            self.status = IntegratorStatus::Exited;
            info!(
                "particle exited at r = {:.4} after {} half-turns",
                self.state.radius(),
                self.state.half_turns
            );
            return Ok(None);
        }

        match self.advance() {
            Ok((next, event)) => {
                self.state = next;
                Ok(event)
            }
            Err(err) => {
                if let Some(reason) = HaltReason::from_error(&err) {
                    self.status = IntegratorStatus::Halted(reason);
                    info!("integrator halted: {err}");
                }
                Err(err)
            }
        }
    }

    fn advance(&self) -> CyclotronResult<(KinematicState, Option<TurnEvent>)> {
        let dt = self.config.time_step;
        let omega = self.omega();
        let mut next = self.state;

        let acceleration = DVec2::new(-omega * next.velocity.y, omega * next.velocity.x);
        next.velocity += acceleration * dt;
        next.position += next.velocity * dt;
        next.time += dt;

        if !next.is_finite() {
            return Err(CyclotronError::NonFinite {
                quantity: "kinematic state",
            });
        }

        let angle = next.angle();
        let crossed = self.state.last_angle < 0.0 && angle >= 0.0;
        next.last_angle = angle;

        if !crossed {
            return Ok((next, None));
        }

        let quantities =
            TurnQuantities::compute(&self.props, self.params.magnetic_flux_density, next.speed())?;
        next.half_turns += 1;
        let event = TurnEvent {
            turn: next.half_turns,
            time: next.time,
            gamma: quantities.gamma,
            momentum: quantities.momentum,
            kinetic_energy: quantities.kinetic_energy,
            total_energy: quantities.total_energy,
            period: quantities.period,
        };
        trace!("turn {} at t = {:.3}, gamma = {}", event.turn, event.time, event.gamma);
        Ok((next, Some(event)))
    }

    /// Angular rate used by the step.
    pub fn omega(&self) -> f64 {
        self.frequency_mhz * self.config.omega_coupling
    }

    pub fn frequency_mhz(&self) -> f64 {
        self.frequency_mhz
    }

    pub fn state(&self) -> &KinematicState {
        &self.state
    }

    pub fn status(&self) -> IntegratorStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == IntegratorStatus::Running
    }

    pub fn half_turns(&self) -> u32 {
        self.state.half_turns
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn config(&self) -> &IntegratorConfig {
        &self.config
    }
}
