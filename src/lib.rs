//! Cyclotron Simulator – charged-particle core for Rust.
//!
//! A charged particle is injected at the centre of a cyclotron and spirals
//! outwards under a uniform magnetic field. The crate provides the classical
//! readout derivation, a fixed-step integrator with gap-crossing detection and
//! relativistic turn diagnostics, and the session, export, and sweep plumbing a
//! presentation layer drives.

pub mod config;
pub mod core;
pub mod driver;
pub mod dynamics;
pub mod error;
pub mod export;
pub mod sweep;
pub mod utils;
pub mod world;

pub use glam::DVec2;

pub use crate::core::{
    constants,
    species::{ParticleSpecies, SpeciesProperties},
    turn_log::{SharedTurnLog, TurnLog, TurnPreview},
    types::{KinematicState, Mode, SimulationParameters, TurnEvent},
};
pub use driver::{FixedClock, FrameClock, FrameDriver, FrameReport, WallClock};
pub use dynamics::{
    derivation::{derive, derive_from, DerivedParameters},
    integrator::{HaltReason, IntegratorConfig, IntegratorStatus, StepIntegrator},
    relativity::{lorentz_factor, TurnQuantities},
};
pub use error::{CyclotronError, CyclotronResult};
pub use export::{to_csv_string, write_csv, AutoExport};
pub use sweep::{run_case, run_sweep, SweepCase, SweepOutcome};
pub use world::{CyclotronWorld, Readouts, Trail};
