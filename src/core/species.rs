use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    core::constants::{C, ELEMENTARY_CHARGE},
    error::CyclotronError,
};

/// Particle species selectable for injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ParticleSpecies {
    #[default]
    Proton,
    Deuteron,
    Alpha,
    Electron,
}

/// Rest mass (kg) and charge magnitude (C) of a species.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeciesProperties {
    pub mass: f64,
    pub charge: f64,
}

impl SpeciesProperties {
    /// Rest energy `m c²` in joules.
    pub fn rest_energy(&self) -> f64 {
        self.mass * C * C
    }
}

/// Single lookup table used by every consumer of species data.
const SPECIES_TABLE: [(ParticleSpecies, SpeciesProperties); 4] = [
    (
        ParticleSpecies::Proton,
        SpeciesProperties {
            mass: 1.6726e-27,
            charge: ELEMENTARY_CHARGE,
        },
    ),
    (
        ParticleSpecies::Deuteron,
        SpeciesProperties {
            mass: 3.3435e-27,
            charge: ELEMENTARY_CHARGE,
        },
    ),
    (
        ParticleSpecies::Alpha,
        SpeciesProperties {
            mass: 6.6447e-27,
            charge: 2.0 * ELEMENTARY_CHARGE,
        },
    ),
    (
        ParticleSpecies::Electron,
        SpeciesProperties {
            mass: 9.1094e-31,
            charge: ELEMENTARY_CHARGE,
        },
    ),
];

impl ParticleSpecies {
    pub const ALL: [ParticleSpecies; 4] = [
        ParticleSpecies::Proton,
        ParticleSpecies::Deuteron,
        ParticleSpecies::Alpha,
        ParticleSpecies::Electron,
    ];

    pub fn properties(self) -> SpeciesProperties {
        SPECIES_TABLE[self.index()].1
    }

    pub fn mass(self) -> f64 {
        self.properties().mass
    }

    pub fn charge(self) -> f64 {
        self.properties().charge
    }

    pub fn name(self) -> &'static str {
        match self {
            ParticleSpecies::Proton => "Proton",
            ParticleSpecies::Deuteron => "Deuteron",
            ParticleSpecies::Alpha => "Alpha",
            ParticleSpecies::Electron => "Electron",
        }
    }

    fn index(self) -> usize {
        match self {
            ParticleSpecies::Proton => 0,
            ParticleSpecies::Deuteron => 1,
            ParticleSpecies::Alpha => 2,
            ParticleSpecies::Electron => 3,
        }
    }
}

impl fmt::Display for ParticleSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParticleSpecies {
    type Err = CyclotronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParticleSpecies::ALL
            .into_iter()
            .find(|species| species.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CyclotronError::UnknownSpecies(s.to_string()))
    }
}
