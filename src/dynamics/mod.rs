//! Simulation dynamics: readout derivation, relativistic turn quantities, and the step integrator.

pub mod derivation;
pub mod integrator;
pub mod relativity;

pub use derivation::{derive, derive_from, DerivedParameters};
pub use integrator::{HaltReason, IntegratorConfig, IntegratorStatus, StepIntegrator};
pub use relativity::{lorentz_factor, TurnQuantities};
