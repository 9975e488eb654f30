//! Reference leaves and helpers for building component inputs

use leafgx_components::parameters::{LeafEnvironment, LeafParameters};
use leafgx_core::component::{FloatValue, InputState};
use leafgx_core::standard_variables::*;

/// A sunlit C3 leaf at 25 degrees C and 400 ppm CO2.
pub fn reference_scenario() -> (LeafEnvironment, LeafParameters) {
    let environment = LeafEnvironment {
        incident_ppfd: 1500.0,
        air_temperature: 25.0,
        relative_humidity: 0.7,
        atmospheric_co2: 400.0,
        atmospheric_pressure: 101325.0,
        atmospheric_o2: 210.0,
        ..LeafEnvironment::default()
    };
    let leaf = LeafParameters {
        vcmax: 100.0,
        jmax: 180.0,
        dark_respiration: 1.2,
        ball_berry_intercept: 0.008,
        ball_berry_slope: 10.0,
        theta: 0.7,
        water_stress_factor: 1.0,
        ..LeafParameters::default()
    };
    (environment, leaf)
}

/// The named inputs of the gas exchange component for a leaf.
pub fn input_state_for(environment: &LeafEnvironment, leaf: &LeafParameters) -> InputState {
    let values: [(&str, FloatValue); 24] = [
        (VAR_INCIDENT_PPFD.name, environment.incident_ppfd),
        (VAR_ABSORBED_SHORTWAVE.name, environment.absorbed_shortwave),
        (VAR_AIR_TEMPERATURE.name, environment.air_temperature),
        (VAR_RELATIVE_HUMIDITY.name, environment.relative_humidity),
        (VAR_ATMOSPHERIC_CO2.name, environment.atmospheric_co2),
        (VAR_ATMOSPHERIC_O2.name, environment.atmospheric_o2),
        (VAR_ATMOSPHERIC_PRESSURE.name, environment.atmospheric_pressure),
        (VAR_WIND_SPEED.name, environment.wind_speed),
        (VAR_WIND_SPEED_HEIGHT.name, environment.wind_speed_height),
        (VAR_CANOPY_HEIGHT.name, environment.canopy_height),
        (VAR_SPECIFIC_HEAT_OF_AIR.name, environment.specific_heat_of_air),
        (VAR_VCMAX.name, leaf.vcmax),
        (VAR_JMAX.name, leaf.jmax),
        (VAR_TPU_RATE_MAX.name, leaf.tpu_rate_max),
        (VAR_DARK_RESPIRATION.name, leaf.dark_respiration),
        (VAR_CURVATURE.name, leaf.theta),
        (VAR_ELECTRONS_PER_CARBOXYLATION.name, leaf.electrons_per_carboxylation),
        (VAR_ELECTRONS_PER_OXYGENATION.name, leaf.electrons_per_oxygenation),
        (VAR_BALL_BERRY_INTERCEPT.name, leaf.ball_berry_intercept),
        (VAR_BALL_BERRY_SLOPE.name, leaf.ball_berry_slope),
        (VAR_MINIMUM_STOMATAL_CONDUCTANCE.name, leaf.minimum_stomatal_conductance),
        (VAR_WATER_STRESS_FACTOR.name, leaf.water_stress_factor),
        (VAR_WATER_STRESS_APPROACH.name, leaf.water_stress_approach.into()),
        (
            VAR_MINIMUM_BOUNDARY_LAYER_CONDUCTANCE.name,
            leaf.minimum_boundary_layer_conductance,
        ),
    ];
    values
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}
