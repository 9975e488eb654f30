//! Environmental drivers of a single leaf solve.

use leafgx_core::component::FloatValue;
use leafgx_core::errors::LeafResult;
use serde::{Deserialize, Serialize};

/// Micro-environment seen by a leaf at one instant.
///
/// Immutable for the duration of a solve. Omitted keys take the defaults
/// listed below when loading from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeafEnvironment {
    /// Photosynthetically active photon flux density incident on the leaf
    /// unit: micromol / m^2 / s
    /// default: 1500.0
    pub incident_ppfd: FloatValue,

    /// Shortwave radiation absorbed by the leaf
    /// unit: W / m^2
    /// default: 300.0
    pub absorbed_shortwave: FloatValue,

    /// Air temperature
    /// unit: degrees C
    /// default: 25.0
    pub air_temperature: FloatValue,

    /// Relative humidity, must lie in [0, 1]
    /// unit: dimensionless
    /// default: 0.7
    pub relative_humidity: FloatValue,

    /// Wind speed above the canopy
    /// unit: m / s
    /// default: 2.0
    pub wind_speed: FloatValue,

    /// Height at which the wind speed was measured
    /// unit: m
    /// default: 5.0
    pub wind_speed_height: FloatValue,

    /// Height of the canopy
    /// unit: m
    /// default: 1.0
    pub canopy_height: FloatValue,

    /// Ambient CO2 mole fraction. Non-positive values are replaced by 1e-4.
    /// unit: micromol / mol
    /// default: 400.0
    pub atmospheric_co2: FloatValue,

    /// Atmospheric pressure
    /// unit: Pa
    /// default: 101325.0
    pub atmospheric_pressure: FloatValue,

    /// Ambient O2 mole fraction
    /// unit: mmol / mol
    /// default: 210.0
    pub atmospheric_o2: FloatValue,

    /// Specific heat of air at constant pressure
    /// unit: J / kg / K
    /// default: 1010.0
    pub specific_heat_of_air: FloatValue,
}

impl Default for LeafEnvironment {
    fn default() -> Self {
        Self {
            incident_ppfd: 1500.0,
            absorbed_shortwave: 300.0,
            air_temperature: 25.0,
            relative_humidity: 0.7,
            wind_speed: 2.0,
            wind_speed_height: 5.0,
            canopy_height: 1.0,
            atmospheric_co2: 400.0,
            atmospheric_pressure: 101_325.0,
            atmospheric_o2: 210.0,
            specific_heat_of_air: 1010.0,
        }
    }
}

impl LeafEnvironment {
    /// Load an environment from a TOML document. Missing keys use defaults.
    pub fn from_toml_str(document: &str) -> LeafResult<Self> {
        Ok(toml::from_str(document)?)
    }

    /// Ambient CO2 with the physical floor applied.
    ///
    /// unit: micromol / mol
    pub fn ambient_co2(&self) -> FloatValue {
        if self.atmospheric_co2 <= 0.0 {
            1e-4
        } else {
            self.atmospheric_co2
        }
    }

    /// Ambient CO2 partial pressure, using the floored mole fraction.
    ///
    /// unit: Pa
    pub fn ambient_co2_partial_pressure(&self) -> FloatValue {
        self.ambient_co2() * 1e-6 * self.atmospheric_pressure
    }
}
