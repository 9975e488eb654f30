//! Leaf energy balance
//!
//! Solves for the leaf-air temperature difference and the resulting
//! transpiration rates given a stomatal conductance. Most equations follow
//! Chapter 14 of Thornley and Johnson (1990).
//!
//! # References
//!
//! - Thornley, J.H.M. and Johnson, I.R. (1990) Plant and Crop Modelling.
//! - Campbell, G.S. and Norman, J.M. (1998) An Introduction to Environmental
//!   Biophysics, Chapter 14.

use crate::boundary_layer::leaf_boundary_layer_conductance;
use crate::constants::{CELSIUS_TO_KELVIN, STEFAN_BOLTZMANN, VOLUME_OF_ONE_MOLE_OF_AIR};
use crate::moist_air::{
    dry_air_density, latent_heat_of_vaporization, saturation_vapor_density,
    saturation_vapor_pressure_slope,
};
use crate::parameters::{LeafEnvironment, LeafParameters, SolverOptions};
use leafgx_core::component::FloatValue;
use leafgx_core::errors::{LeafError, LeafResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Magnitude limit of the leaf-air temperature difference
///
/// unit: degrees C
pub const MAXIMUM_TEMPERATURE_OFFSET: FloatValue = 5.0;

/// Temperature difference used to start the iteration
const INITIAL_TEMPERATURE_OFFSET: FloatValue = 0.01;

/// Ratio of Priestley-Taylor to equilibrium evaporation
const PRIESTLEY_TAYLOR_COEFFICIENT: FloatValue = 1.26;

/// Result of the energy balance.
///
/// Transpiration rates are mass fluxes of water.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyBalance {
    /// Leaf temperature minus air temperature
    /// unit: degrees C
    pub temperature_offset: FloatValue,
    /// Net radiation available for evaporation, floored at zero
    /// unit: W / m^2
    pub net_radiation: FloatValue,
    /// Penman-Monteith transpiration
    /// unit: kg / m^2 / s
    pub transpiration: FloatValue,
    /// Penman potential evaporation
    /// unit: kg / m^2 / s
    pub penman: FloatValue,
    /// Priestley-Taylor evaporation
    /// unit: kg / m^2 / s
    pub priestley_taylor: FloatValue,
    /// unit: mol / m^2 / s
    pub boundary_layer_conductance: FloatValue,
    /// Number of temperature updates performed
    pub iterations: usize,
}

/// Solve the leaf energy balance for a given stomatal conductance.
///
/// # Arguments
///
/// * `environment` - Environmental conditions around the leaf
/// * `leaf` - Leaf parameters, for the minimum boundary layer conductance
/// * `stomatal_conductance` - Stomatal conductance to water vapour (mol / m^2 / s)
/// * `options` - Iteration cap and tolerance of the temperature loop
///
/// # Errors
///
/// Fails when the stomatal conductance is not positive, the relative humidity
/// exceeds 1, the saturation vapour density is negative or the boundary layer
/// conductance is negative.
pub fn solve_energy_balance(
    environment: &LeafEnvironment,
    leaf: &LeafParameters,
    stomatal_conductance: FloatValue,
    options: &SolverOptions,
) -> LeafResult<EnergyBalance> {
    let air_temperature = environment.air_temperature;
    let relative_humidity = environment.relative_humidity;

    let dry_air = dry_air_density(air_temperature); // kg / m^3
    let latent_heat = latent_heat_of_vaporization(air_temperature); // J / kg
    let slope = saturation_vapor_pressure_slope(air_temperature); // kg / m^3 / K

    let minimum_ga = leaf.minimum_boundary_layer_conductance * VOLUME_OF_ONE_MOLE_OF_AIR; // m / s

    if stomatal_conductance <= 0.0 {
        return Err(LeafError::NonPositiveStomatalConductance(stomatal_conductance));
    }
    let gc = stomatal_conductance * VOLUME_OF_ONE_MOLE_OF_AIR; // m / s

    if relative_humidity > 1.0 {
        return Err(LeafError::RelativeHumidityOutOfRange(relative_humidity));
    }

    let saturation_density = saturation_vapor_density(air_temperature); // kg / m^3
    if saturation_density < 0.0 {
        return Err(LeafError::NegativeVaporDensity(saturation_density));
    }

    // Thornley and Johnson Eq. 14.4g and 14.4d
    let psychrometric = dry_air * environment.specific_heat_of_air / latent_heat; // kg / m^3 / K
    let vapor_density_deficit = saturation_density * (1.0 - relative_humidity); // kg / m^3

    let ga = leaf_boundary_layer_conductance(
        environment.canopy_height,
        environment.wind_speed,
        minimum_ga,
        environment.wind_speed_height,
    );
    if ga < 0.0 {
        return Err(LeafError::NegativeBoundaryLayerConductance(ga));
    }

    let longwave_coefficient =
        4.0 * STEFAN_BOLTZMANN * (air_temperature + CELSIUS_TO_KELVIN).powi(3); // W / m^2 / K

    let mut offset = INITIAL_TEMPERATURE_OFFSET;
    let mut net_radiation = environment.absorbed_shortwave - longwave_coefficient * offset;
    let mut iterations = 0;
    let mut change = FloatValue::INFINITY;

    while change > options.leaf_temperature_tolerance
        && iterations < options.energy_balance_max_iterations
    {
        let previous = offset;
        net_radiation = environment.absorbed_shortwave - longwave_coefficient * offset;

        // Thornley and Johnson Eq. 14.11e
        let top = net_radiation * (1.0 / ga + 1.0 / gc) - latent_heat * vapor_density_deficit;
        let bottom = latent_heat * (slope + psychrometric * (1.0 + ga / gc));
        offset = (top / bottom).clamp(-MAXIMUM_TEMPERATURE_OFFSET, MAXIMUM_TEMPERATURE_OFFSET);

        change = (previous - offset).abs();
        iterations += 1;
        trace!(iteration = iterations, offset, net_radiation, "energy balance");
    }

    if change > options.leaf_temperature_tolerance {
        warn!(
            iterations,
            offset,
            change,
            "Leaf temperature did not converge in the energy balance"
        );
    }

    let net_radiation = net_radiation.max(0.0);

    let evaporation_numerator =
        slope * net_radiation + latent_heat * psychrometric * ga * vapor_density_deficit;
    let transpiration =
        evaporation_numerator / (latent_heat * (slope + psychrometric * (1.0 + ga / gc)));
    let penman = evaporation_numerator / (latent_heat * (slope + psychrometric));
    let priestley_taylor = PRIESTLEY_TAYLOR_COEFFICIENT * slope * net_radiation
        / (latent_heat * (slope + psychrometric));

    debug!(
        temperature_offset = offset,
        boundary_layer_conductance = ga,
        transpiration,
        iterations,
        "Solved leaf energy balance"
    );

    Ok(EnergyBalance {
        temperature_offset: offset,
        net_radiation,
        transpiration,
        penman,
        priestley_taylor,
        boundary_layer_conductance: ga / VOLUME_OF_ONE_MOLE_OF_AIR,
        iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn solve(environment: &LeafEnvironment, gs: FloatValue) -> LeafResult<EnergyBalance> {
        solve_energy_balance(environment, &LeafParameters::default(), gs, &SolverOptions::default())
    }

    #[test]
    fn test_warm_sunny_leaf() {
        let result = solve(&LeafEnvironment::default(), 0.3).unwrap();

        assert!(result.temperature_offset.abs() <= MAXIMUM_TEMPERATURE_OFFSET);
        assert!(result.iterations <= SolverOptions::default().energy_balance_max_iterations);
        assert!(result.transpiration > 0.0);
        assert!(result.net_radiation >= 0.0);
        // Stomata add resistance in series, so potential evaporation exceeds actual
        assert!(result.penman > result.transpiration);
        assert_relative_eq!(
            result.boundary_layer_conductance,
            leaf_boundary_layer_conductance(1.0, 2.0, 0.08 * VOLUME_OF_ONE_MOLE_OF_AIR, 5.0)
                / VOLUME_OF_ONE_MOLE_OF_AIR
        );
    }

    #[test]
    fn test_offset_is_clamped() {
        let environment = LeafEnvironment {
            absorbed_shortwave: 5000.0,
            wind_speed: 0.0,
            ..LeafEnvironment::default()
        };
        let result = solve(&environment, 1e-4).unwrap();
        assert_eq!(result.temperature_offset, MAXIMUM_TEMPERATURE_OFFSET);

        let environment = LeafEnvironment {
            absorbed_shortwave: 0.0,
            relative_humidity: 0.0,
            ..LeafEnvironment::default()
        };
        let result = solve(&environment, 2.0).unwrap();
        assert!(result.temperature_offset < 0.0);
        assert!(result.temperature_offset >= -MAXIMUM_TEMPERATURE_OFFSET);
    }

    #[test]
    fn test_net_radiation_is_floored() {
        // In the dark and in saturated air the leaf only loses longwave radiation
        let environment = LeafEnvironment {
            absorbed_shortwave: 0.0,
            relative_humidity: 1.0,
            ..LeafEnvironment::default()
        };
        let result = solve(&environment, 0.2).unwrap();
        assert_eq!(result.net_radiation, 0.0);
        assert_eq!(result.priestley_taylor, 0.0);
        assert_eq!(result.transpiration, 0.0);
    }

    #[test]
    fn test_rejects_non_positive_conductance() {
        let err = solve(&LeafEnvironment::default(), 0.0).unwrap_err();
        assert!(matches!(err, LeafError::NonPositiveStomatalConductance(_)));
    }

    #[test]
    fn test_rejects_supersaturated_air() {
        let environment = LeafEnvironment {
            relative_humidity: 1.05,
            ..LeafEnvironment::default()
        };
        let err = solve(&environment, 0.2).unwrap_err();
        assert!(matches!(err, LeafError::RelativeHumidityOutOfRange(rh) if rh == 1.05));
    }

    #[test]
    fn test_saturated_air_has_no_vapour_deficit_term() {
        let environment = LeafEnvironment {
            relative_humidity: 1.0,
            ..LeafEnvironment::default()
        };
        let result = solve(&environment, 0.2).unwrap();
        let ratio = result.priestley_taylor / result.penman;
        assert_relative_eq!(ratio, PRIESTLEY_TAYLOR_COEFFICIENT, max_relative = 1e-9);
    }
}
