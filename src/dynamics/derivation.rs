//! Steady-state classical readouts derived from species, field, and energy.
//!
//! Everything here is pure: identical inputs give bit-identical outputs, and
//! the functions are safe to call from any number of threads.

use serde::{Deserialize, Serialize};

use crate::{
    config::{COARSE_DISPLAY_DECIMALS, FINE_DISPLAY_DECIMALS},
    core::{
        constants::{C, HZ_PER_MHZ, KEV_TO_JOULE, MM_PER_M, NS_PER_S, TWO_PI},
        species::{ParticleSpecies, SpeciesProperties},
        types::SimulationParameters,
    },
    error::{CyclotronError, CyclotronResult},
    utils::math::round_to,
};

/// Reference values shown next to the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedParameters {
    pub frequency_mhz: f64,
    pub radius_mm: f64,
    pub speed_percent_c: f64,
    pub period_ns: f64,
}

impl DerivedParameters {
    /// Copy rounded to display precision. Apply once, at the display boundary.
    pub fn rounded(&self) -> Self {
        Self {
            frequency_mhz: round_to(self.frequency_mhz, FINE_DISPLAY_DECIMALS),
            radius_mm: round_to(self.radius_mm, FINE_DISPLAY_DECIMALS),
            speed_percent_c: round_to(self.speed_percent_c, COARSE_DISPLAY_DECIMALS),
            period_ns: round_to(self.period_ns, COARSE_DISPLAY_DECIMALS),
        }
    }
}

/// Computes the classical readouts for `species` at flux density `flux_density`
/// (T) and kinetic energy `kinetic_energy_kev` (keV).
///
/// The speed is the non-relativistic `sqrt(2K/m)` and is not clamped below
/// `c`; very large energies on light species report more than 100 % of `c`.
pub fn derive(
    species: ParticleSpecies,
    flux_density: f64,
    kinetic_energy_kev: f64,
) -> CyclotronResult<DerivedParameters> {
    let props = checked_properties(species)?;
    check_positive("magnetic_flux_density", flux_density)?;
    if !kinetic_energy_kev.is_finite() || kinetic_energy_kev < 0.0 {
        return Err(CyclotronError::InvalidParameter {
            name: "kinetic_energy_kev",
            value: kinetic_energy_kev,
        });
    }

    let speed = classical_speed(&props, kinetic_energy_kev);
    let radius = props.mass * speed / (props.charge * flux_density);

    Ok(DerivedParameters {
        frequency_mhz: cyclotron_frequency(&props, flux_density) / HZ_PER_MHZ,
        radius_mm: radius * MM_PER_M,
        speed_percent_c: speed / C * 100.0,
        period_ns: cyclotron_period(&props, flux_density) * NS_PER_S,
    })
}

/// [`derive`] over a full parameter set.
pub fn derive_from(params: &SimulationParameters) -> CyclotronResult<DerivedParameters> {
    derive(
        params.particle_type,
        params.magnetic_flux_density,
        params.kinetic_energy_kev,
    )
}

/// Classical cyclotron frequency `qB / 2πm` (Hz).
pub fn cyclotron_frequency(props: &SpeciesProperties, flux_density: f64) -> f64 {
    props.charge * flux_density / (TWO_PI * props.mass)
}

/// Cyclotron period `2πm / qB` (s).
pub fn cyclotron_period(props: &SpeciesProperties, flux_density: f64) -> f64 {
    TWO_PI * props.mass / (props.charge * flux_density)
}

/// Non-relativistic speed `sqrt(2K/m)` (m/s) for a kinetic energy in keV.
pub fn classical_speed(props: &SpeciesProperties, kinetic_energy_kev: f64) -> f64 {
    let kinetic_energy = kinetic_energy_kev * KEV_TO_JOULE;
    (2.0 * kinetic_energy / props.mass).sqrt()
}

pub(crate) fn checked_properties(species: ParticleSpecies) -> CyclotronResult<SpeciesProperties> {
    let props = species.properties();
    check_positive("mass", props.mass)?;
    check_positive("charge", props.charge)?;
    Ok(props)
}

pub(crate) fn check_positive(name: &'static str, value: f64) -> CyclotronResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CyclotronError::InvalidParameter { name, value })
    }
}
