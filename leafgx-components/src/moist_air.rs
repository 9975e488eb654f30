//! Psychrometric properties of moist air
//!
//! Empirical fits to the tabulated values in Table 14.3 of Thornley and Johnson
//! (1990) plus the Arden Buck saturation vapour pressure equation. All functions
//! take the air temperature in degrees C unless stated otherwise.
//!
//! The fits are only intended for the physiological temperature range
//! (roughly -10 to 50 degrees C). No bounds checking is performed; values outside
//! this range are extrapolated.
//!
//! # References
//!
//! - Thornley, J.H.M. and Johnson, I.R. (1990) Plant and Crop Modelling. A
//!   Mathematical Approach to Plant and Crop Physiology.
//! - Buck, A.L. (1981) New equations for computing vapor pressure and enhancement
//!   factor. Journal of Applied Meteorology, 20, 1527-1532.

use crate::constants::{
    CELSIUS_TO_KELVIN, IDEAL_GAS_CONSTANT, MOLAR_MASS_OF_DRY_AIR, MOLAR_MASS_OF_WATER,
};
use leafgx_core::component::FloatValue;

/// Density of dry air from a linear fit to Thornley and Johnson's table.
///
/// unit: kg / m^3
pub fn dry_air_density(air_temperature: FloatValue) -> FloatValue {
    1.295_163_636 - 0.004_258_182 * air_temperature
}

/// Density of dry air from the ideal gas law.
///
/// # Arguments
///
/// * `air_temperature_k` - Air temperature (K)
/// * `air_pressure` - Air pressure (Pa)
///
/// # Returns
///
/// Density in kg / m^3
pub fn dry_air_density_from_ideal_gas(
    air_temperature_k: FloatValue,
    air_pressure: FloatValue,
) -> FloatValue {
    let r_specific = IDEAL_GAS_CONSTANT / MOLAR_MASS_OF_DRY_AIR; // J / kg / K
    air_pressure / r_specific / air_temperature_k
}

/// Latent heat of vaporization of water.
///
/// unit: J / kg
pub fn latent_heat_of_vaporization(temperature: FloatValue) -> FloatValue {
    2_501_000.0 - 2_372.727 * temperature
}

/// Slope of the saturation water vapour curve, from a quadratic fit.
///
/// unit: kg / m^3 / K
pub fn saturation_vapor_pressure_slope(air_temperature: FloatValue) -> FloatValue {
    (0.338_376_068 + 0.011_435_897 * air_temperature + 0.001_111_111 * air_temperature.powi(2))
        * 1e-3
}

/// Saturation water vapour pressure over liquid water (Arden Buck).
///
/// $$e_s = 611.21 \exp\left(\frac{(18.678 - T/234.5) T}{257.14 + T}\right)$$
///
/// unit: Pa
pub fn saturation_vapor_pressure(air_temperature: FloatValue) -> FloatValue {
    let a = (18.678 - air_temperature / 234.5) * air_temperature;
    let b = 257.14 + air_temperature;
    611.21 * (a / b).exp()
}

/// Saturation water vapour density, converted from the saturation vapour
/// pressure with the ideal gas law.
///
/// unit: kg / m^3
pub fn saturation_vapor_density(air_temperature: FloatValue) -> FloatValue {
    saturation_vapor_pressure(air_temperature) / IDEAL_GAS_CONSTANT
        / (air_temperature + CELSIUS_TO_KELVIN)
        * MOLAR_MASS_OF_WATER
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dry_air_density_matches_table() {
        // Thornley and Johnson Table 14.3
        assert_relative_eq!(dry_air_density(0.0), 1.29, epsilon = 0.01);
        assert_relative_eq!(dry_air_density(20.0), 1.20, epsilon = 0.015);
        assert_relative_eq!(dry_air_density(40.0), 1.13, epsilon = 0.01);
    }

    #[test]
    fn test_ideal_gas_density_is_close_to_the_fit() {
        let density = dry_air_density_from_ideal_gas(293.15, 101_325.0);
        assert_relative_eq!(density, 1.204, epsilon = 0.005);
        assert_relative_eq!(density, dry_air_density(20.0), epsilon = 0.02);
    }

    #[test]
    fn test_latent_heat_matches_table() {
        assert_relative_eq!(latent_heat_of_vaporization(0.0), 2.50e6, epsilon = 0.01e6);
        assert_relative_eq!(latent_heat_of_vaporization(25.0), 2.44e6, epsilon = 0.01e6);
    }

    #[test]
    fn test_slope_matches_table() {
        assert_relative_eq!(saturation_vapor_pressure_slope(0.0), 0.33e-3, epsilon = 0.02e-3);
        assert_relative_eq!(saturation_vapor_pressure_slope(25.0), 1.30e-3, epsilon = 0.03e-3);
        assert_relative_eq!(saturation_vapor_pressure_slope(40.0), 2.57e-3, epsilon = 0.03e-3);
    }

    #[test]
    fn test_saturation_vapor_pressure_reference_points() {
        assert_relative_eq!(saturation_vapor_pressure(0.0), 611.21, epsilon = 1e-9);
        // ~3169 Pa at 25 degrees C
        assert_relative_eq!(saturation_vapor_pressure(25.0), 3169.0, epsilon = 5.0);
    }

    #[test]
    fn test_saturation_vapor_pressure_is_monotonic() {
        let mut previous = saturation_vapor_pressure(-20.0);
        for i in 1..=140 {
            let t = -20.0 + 0.5 * FloatValue::from(i);
            let current = saturation_vapor_pressure(t);
            assert!(current > previous, "SVP not increasing at {t} degC");
            previous = current;
        }
    }

    #[test]
    fn test_saturation_vapor_density_is_positive() {
        let density = saturation_vapor_density(25.0);
        assert_relative_eq!(density, 0.0230, epsilon = 0.0005);
    }
}
