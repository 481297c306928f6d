use crate::{
    core::{constants::C, species::SpeciesProperties},
    dynamics::derivation::cyclotron_period,
    error::{CyclotronError, CyclotronResult},
};

/// Lorentz factor `1 / sqrt(1 - (v/c)²)`.
///
/// Fails instead of producing `NaN`/`∞` when `speed` is not finite or not
/// below the speed of light.
pub fn lorentz_factor(speed: f64) -> CyclotronResult<f64> {
    if !speed.is_finite() {
        return Err(CyclotronError::NonFinite { quantity: "speed" });
    }
    if speed.abs() >= C {
        return Err(CyclotronError::Superluminal { speed, c: C });
    }
    let beta = speed / C;
    Ok(1.0 / (1.0 - beta * beta).sqrt())
}

/// Relativistic quantities of a particle moving at a given instantaneous speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnQuantities {
    pub gamma: f64,
    pub momentum: f64,
    pub rest_energy: f64,
    pub total_energy: f64,
    pub kinetic_energy: f64,
    pub period: f64,
}

impl TurnQuantities {
    /// The period is field-derived and does not depend on `speed`.
    pub fn compute(
        props: &SpeciesProperties,
        flux_density: f64,
        speed: f64,
    ) -> CyclotronResult<Self> {
        let gamma = lorentz_factor(speed)?;
        let rest_energy = props.rest_energy();
        let quantities = Self {
            gamma,
            momentum: gamma * props.mass * speed,
            rest_energy,
            total_energy: gamma * rest_energy,
            kinetic_energy: (gamma - 1.0) * rest_energy,
            period: cyclotron_period(props, flux_density),
        };

        let values = [
            quantities.momentum,
            quantities.total_energy,
            quantities.kinetic_energy,
            quantities.period,
        ];
        if values.iter().all(|value| value.is_finite()) {
            Ok(quantities)
        } else {
            Err(CyclotronError::NonFinite {
                quantity: "turn quantities",
            })
        }
    }
}
