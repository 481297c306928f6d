use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::{
    config::{
        DEFAULT_FLUX_DENSITY, DEFAULT_KINETIC_ENERGY_KEV, DEFAULT_LAUNCH_VELOCITY,
        DEFAULT_VOLTAGE, FLUX_DENSITY_RANGE, VOLTAGE_RANGE,
    },
    core::species::ParticleSpecies,
};

/// Formula set a presentation layer wants to display.
///
/// The integrator always evaluates relativistic turn quantities; the mode is
/// carried through untouched for consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Classic,
    Relativistic,
}

/// User-facing inputs of a simulation run.
///
/// Replaced wholesale on every edit. Derived readouts are computed from these
/// fields by [`crate::dynamics::derivation::derive`] and never stored here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    pub mode: Mode,
    /// Gap voltage in volts. Informational only.
    pub acceleration_voltage: f64,
    /// Magnetic flux density in tesla.
    pub magnetic_flux_density: f64,
    pub particle_type: ParticleSpecies,
    /// Injection kinetic energy in keV.
    pub kinetic_energy_kev: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            mode: Mode::Classic,
            acceleration_voltage: DEFAULT_VOLTAGE,
            magnetic_flux_density: DEFAULT_FLUX_DENSITY,
            particle_type: ParticleSpecies::Proton,
            kinetic_energy_kev: DEFAULT_KINETIC_ENERGY_KEV,
        }
    }
}

impl SimulationParameters {
    pub fn new(particle_type: ParticleSpecies, magnetic_flux_density: f64) -> Self {
        Self {
            particle_type,
            magnetic_flux_density,
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_kinetic_energy(mut self, kinetic_energy_kev: f64) -> Self {
        self.kinetic_energy_kev = kinetic_energy_kev;
        self
    }

    pub fn with_voltage(mut self, acceleration_voltage: f64) -> Self {
        self.acceleration_voltage = acceleration_voltage;
        self
    }

    /// Copy with flux density and voltage clamped to the slider ranges.
    ///
    /// The core never calls this; it is offered to presentation layers.
    pub fn clamped(mut self) -> Self {
        self.magnetic_flux_density = self
            .magnetic_flux_density
            .clamp(FLUX_DENSITY_RANGE.0, FLUX_DENSITY_RANGE.1);
        self.acceleration_voltage = self
            .acceleration_voltage
            .clamp(VOLTAGE_RANGE.0, VOLTAGE_RANGE.1);
        self
    }
}

/// Live particle state in normalized units, owned by the step integrator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicState {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Elapsed simulated time.
    pub time: f64,
    /// Polar angle observed on the previous tick.
    pub last_angle: f64,
    pub half_turns: u32,
}

impl Default for KinematicState {
    fn default() -> Self {
        Self::launch(DVec2::from_array(DEFAULT_LAUNCH_VELOCITY))
    }
}

impl KinematicState {
    /// State at the centre of the dees with the given launch velocity.
    pub fn launch(velocity: DVec2) -> Self {
        Self {
            position: DVec2::ZERO,
            velocity,
            time: 0.0,
            last_angle: 0.0,
            half_turns: 0,
        }
    }

    pub fn radius(&self) -> f64 {
        self.position.length()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Polar angle in `(-π, π]`.
    pub fn angle(&self) -> f64 {
        self.position.y.atan2(self.position.x)
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite() && self.time.is_finite()
    }
}

/// Record emitted once per detected gap crossing. Never mutated after emission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnEvent {
    /// 1-based crossing index.
    pub turn: u32,
    /// Elapsed time (s).
    pub time: f64,
    /// Lorentz factor.
    pub gamma: f64,
    /// Relativistic momentum magnitude (kg·m/s).
    pub momentum: f64,
    /// Kinetic energy (J).
    pub kinetic_energy: f64,
    /// Total energy (J).
    pub total_energy: f64,
    /// Cyclotron period at the current flux density (s).
    pub period: f64,
}
