//! Physical constants and unit conversions shared by the leaf components.

use leafgx_core::component::FloatValue;

/// Universal gas constant
/// unit: J / K / mol
pub const IDEAL_GAS_CONSTANT: FloatValue = 8.314_459_8;

/// unit: kg / mol
pub const MOLAR_MASS_OF_WATER: FloatValue = 18.015_28e-3;

/// unit: kg / mol
pub const MOLAR_MASS_OF_DRY_AIR: FloatValue = 28.96e-3;

/// unit: W / m^2 / K^4
pub const STEFAN_BOLTZMANN: FloatValue = 5.670_374e-8;

/// Offset between degrees C and kelvin
pub const CELSIUS_TO_KELVIN: FloatValue = 273.15;

/// Volume of one mole of air at roughly 20 degrees C and 100 kPa.
/// Converts molar conductances (mol / m^2 / s) into velocity-like ones (m / s).
/// unit: m^3 / mol
pub const VOLUME_OF_ONE_MOLE_OF_AIR: FloatValue = 24.39e-3;

/// Ratio of the diffusivities of water vapour and CO2 in air
pub const WATER_TO_CO2_DIFFUSIVITY_RATIO: FloatValue = 1.6;

/// Arrhenius-type temperature scaling `exp(c - dH / (R T))`.
///
/// # Arguments
///
/// * `scaling` - Dimensionless scaling constant `c`
/// * `enthalpy` - Activation enthalpy (J / mol)
/// * `temperature_k` - Temperature (K)
pub fn arrhenius_exponential(
    scaling: FloatValue,
    enthalpy: FloatValue,
    temperature_k: FloatValue,
) -> FloatValue {
    (scaling - enthalpy / (IDEAL_GAS_CONSTANT * temperature_k)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrhenius_is_one_when_exponent_vanishes() {
        let t = 298.15;
        let enthalpy = 50e3;
        let c = enthalpy / (IDEAL_GAS_CONSTANT * t);
        assert!((arrhenius_exponential(c, enthalpy, t) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_arrhenius_increases_with_temperature() {
        let cold = arrhenius_exponential(26.35, 65.33e3, 288.15);
        let warm = arrhenius_exponential(26.35, 65.33e3, 308.15);
        assert!(warm > cold);
    }
}
