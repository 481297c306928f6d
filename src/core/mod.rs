//! Core types describing the particle, its parameters, and shared physical data.

pub mod constants;
pub mod species;
pub mod turn_log;
pub mod types;

pub use species::{ParticleSpecies, SpeciesProperties};
pub use turn_log::{SharedTurnLog, TurnLog, TurnPreview};
pub use types::{KinematicState, Mode, SimulationParameters, TurnEvent};
