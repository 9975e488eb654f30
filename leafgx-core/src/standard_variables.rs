//! Standard variable definitions for leaf gas exchange.
//!
//! Variable names use `|` as a hierarchical separator, e.g. `Assimilation|Net`.
//! The canopy integrator that drives the leaf solver exchanges values using
//! exactly these names and units.
//!
//! # Usage
//!
//! ```rust
//! use leafgx_core::standard_variables::{VAR_AIR_TEMPERATURE, LEAF_INPUTS};
//!
//! assert_eq!(VAR_AIR_TEMPERATURE.name, "Air Temperature");
//! assert!(LEAF_INPUTS.iter().any(|v| v.name == "Air Temperature"));
//! ```

use crate::define_static_variable;
use crate::variable::StaticVariableDefinition;

// ============================================================================
// Environmental drivers
// ============================================================================

define_static_variable!(
    VAR_INCIDENT_PPFD,
    name = "Radiation|PPFD|Incident",
    unit = "micromol / m^2 / s",
    description = "Photosynthetically active photon flux density incident on the leaf",
);

define_static_variable!(
    VAR_ABSORBED_SHORTWAVE,
    name = "Radiation|Shortwave|Absorbed",
    unit = "W / m^2",
    description = "Shortwave radiation absorbed by the leaf",
);

define_static_variable!(
    VAR_AIR_TEMPERATURE,
    name = "Air Temperature",
    unit = "degC",
    description = "Air temperature outside the leaf boundary layer",
);

define_static_variable!(
    VAR_RELATIVE_HUMIDITY,
    name = "Relative Humidity",
    unit = "dimensionless",
    description = "Relative humidity of the air as a fraction between 0 and 1",
);

define_static_variable!(
    VAR_ATMOSPHERIC_CO2,
    name = "Atmospheric Concentration|CO2",
    unit = "micromol / mol",
    description = "Ambient CO2 mole fraction outside the leaf boundary layer",
);

define_static_variable!(
    VAR_ATMOSPHERIC_O2,
    name = "Atmospheric Concentration|O2",
    unit = "mmol / mol",
    description = "Ambient O2 mole fraction",
);

define_static_variable!(
    VAR_ATMOSPHERIC_PRESSURE,
    name = "Atmospheric Pressure",
    unit = "Pa",
    description = "Atmospheric pressure",
);

define_static_variable!(
    VAR_WIND_SPEED,
    name = "Wind Speed",
    unit = "m / s",
    description = "Wind speed above the canopy",
);

define_static_variable!(
    VAR_WIND_SPEED_HEIGHT,
    name = "Wind Speed|Measurement Height",
    unit = "m",
    description = "Height at which the wind speed was measured",
);

define_static_variable!(
    VAR_CANOPY_HEIGHT,
    name = "Canopy Height",
    unit = "m",
    description = "Height of the canopy above the ground",
);

define_static_variable!(
    VAR_SPECIFIC_HEAT_OF_AIR,
    name = "Specific Heat of Air",
    unit = "J / kg / K",
    description = "Specific heat capacity of air at constant pressure",
);

// ============================================================================
// Leaf biochemistry and stomata
// ============================================================================

define_static_variable!(
    VAR_VCMAX,
    name = "Leaf|Vcmax",
    unit = "micromol / m^2 / s",
    description = "Maximum Rubisco carboxylation rate at 25 degrees C",
);

define_static_variable!(
    VAR_JMAX,
    name = "Leaf|Jmax",
    unit = "micromol / m^2 / s",
    description = "Maximum electron transport rate at 25 degrees C",
);

define_static_variable!(
    VAR_TPU_RATE_MAX,
    name = "Leaf|TPU Rate Max",
    unit = "micromol / m^2 / s",
    description = "Maximum triose phosphate utilization rate at 25 degrees C",
);

define_static_variable!(
    VAR_DARK_RESPIRATION,
    name = "Leaf|Dark Respiration",
    unit = "micromol / m^2 / s",
    description = "Mitochondrial respiration rate at 25 degrees C",
);

define_static_variable!(
    VAR_CURVATURE,
    name = "Leaf|Electron Transport Curvature",
    unit = "dimensionless",
    description = "Curvature factor of the light response of electron transport",
);

define_static_variable!(
    VAR_ELECTRONS_PER_CARBOXYLATION,
    name = "Leaf|Electrons per Carboxylation",
    unit = "electron / carboxylation",
    description = "Electrons required per Rubisco carboxylation",
);

define_static_variable!(
    VAR_ELECTRONS_PER_OXYGENATION,
    name = "Leaf|Electrons per Oxygenation",
    unit = "electron / oxygenation",
    description = "Electrons required per Rubisco oxygenation",
);

define_static_variable!(
    VAR_BALL_BERRY_INTERCEPT,
    name = "Stomata|Ball-Berry Intercept",
    unit = "mol / m^2 / s",
    description = "Intercept of the Ball-Berry stomatal conductance model",
);

define_static_variable!(
    VAR_BALL_BERRY_SLOPE,
    name = "Stomata|Ball-Berry Slope",
    unit = "dimensionless",
    description = "Slope of the Ball-Berry stomatal conductance model",
);

define_static_variable!(
    VAR_MINIMUM_STOMATAL_CONDUCTANCE,
    name = "Stomata|Minimum Conductance",
    unit = "mol / m^2 / s",
    description = "Stomatal conductance reached under full water stress",
);

define_static_variable!(
    VAR_WATER_STRESS_FACTOR,
    name = "Stomata|Water Stress Factor",
    unit = "dimensionless",
    description = "Water stress factor between 0 (fully stressed) and 1 (unstressed)",
);

define_static_variable!(
    VAR_WATER_STRESS_APPROACH,
    name = "Stomata|Water Stress Approach",
    unit = "dimensionless",
    description = "0 scales assimilation, 1 interpolates stomatal conductance",
);

define_static_variable!(
    VAR_MINIMUM_BOUNDARY_LAYER_CONDUCTANCE,
    name = "Boundary Layer|Minimum Conductance",
    unit = "mol / m^2 / s",
    description = "Lower bound applied to the boundary layer conductance",
);

// ============================================================================
// Outputs
// ============================================================================

define_static_variable!(
    VAR_NET_ASSIMILATION,
    name = "Assimilation|Net",
    unit = "micromol / m^2 / s",
    description = "Net CO2 assimilation rate of the leaf",
);

define_static_variable!(
    VAR_GROSS_ASSIMILATION,
    name = "Assimilation|Gross",
    unit = "micromol / m^2 / s",
    description = "Gross CO2 assimilation rate (net plus respiration)",
);

define_static_variable!(
    VAR_INTERNAL_CO2,
    name = "Internal Concentration|CO2",
    unit = "micromol / mol",
    description = "Sub-stomatal CO2 mole fraction",
);

define_static_variable!(
    VAR_STOMATAL_CONDUCTANCE,
    name = "Stomata|Conductance",
    unit = "mmol / m^2 / s",
    description = "Stomatal conductance to water vapour",
);

define_static_variable!(
    VAR_TRANSPIRATION,
    name = "Transpiration|Penman-Monteith",
    unit = "mmol / m^2 / s",
    description = "Leaf transpiration rate from the Penman-Monteith equation",
);

define_static_variable!(
    VAR_TRANSPIRATION_PENMAN,
    name = "Transpiration|Penman",
    unit = "mmol / m^2 / s",
    description = "Reference evaporation rate ignoring stomatal resistance",
);

define_static_variable!(
    VAR_TRANSPIRATION_PRIESTLEY_TAYLOR,
    name = "Transpiration|Priestley-Taylor",
    unit = "mmol / m^2 / s",
    description = "Priestley-Taylor evaporation estimate",
);

define_static_variable!(
    VAR_LEAF_TEMPERATURE,
    name = "Leaf Temperature",
    unit = "degC",
    description = "Leaf temperature after the energy balance correction",
);

define_static_variable!(
    VAR_BOUNDARY_LAYER_CONDUCTANCE,
    name = "Boundary Layer|Conductance",
    unit = "mol / m^2 / s",
    description = "Leaf boundary layer conductance to water vapour",
);

define_static_variable!(
    VAR_SOLVER_ITERATIONS,
    name = "Solver|Iterations",
    unit = "count",
    description = "Passes taken by the assimilation-conductance fixed point loop",
);

/// Every input read by the leaf gas exchange solver.
pub static LEAF_INPUTS: [&StaticVariableDefinition; 24] = [
    &VAR_INCIDENT_PPFD,
    &VAR_ABSORBED_SHORTWAVE,
    &VAR_AIR_TEMPERATURE,
    &VAR_RELATIVE_HUMIDITY,
    &VAR_ATMOSPHERIC_CO2,
    &VAR_ATMOSPHERIC_O2,
    &VAR_ATMOSPHERIC_PRESSURE,
    &VAR_WIND_SPEED,
    &VAR_WIND_SPEED_HEIGHT,
    &VAR_CANOPY_HEIGHT,
    &VAR_SPECIFIC_HEAT_OF_AIR,
    &VAR_VCMAX,
    &VAR_JMAX,
    &VAR_TPU_RATE_MAX,
    &VAR_DARK_RESPIRATION,
    &VAR_CURVATURE,
    &VAR_ELECTRONS_PER_CARBOXYLATION,
    &VAR_ELECTRONS_PER_OXYGENATION,
    &VAR_BALL_BERRY_INTERCEPT,
    &VAR_BALL_BERRY_SLOPE,
    &VAR_MINIMUM_STOMATAL_CONDUCTANCE,
    &VAR_WATER_STRESS_FACTOR,
    &VAR_WATER_STRESS_APPROACH,
    &VAR_MINIMUM_BOUNDARY_LAYER_CONDUCTANCE,
];

/// Every output written by the leaf gas exchange solver.
pub static LEAF_OUTPUTS: [&StaticVariableDefinition; 10] = [
    &VAR_NET_ASSIMILATION,
    &VAR_GROSS_ASSIMILATION,
    &VAR_INTERNAL_CO2,
    &VAR_STOMATAL_CONDUCTANCE,
    &VAR_TRANSPIRATION,
    &VAR_TRANSPIRATION_PENMAN,
    &VAR_TRANSPIRATION_PRIESTLEY_TAYLOR,
    &VAR_LEAF_TEMPERATURE,
    &VAR_BOUNDARY_LAYER_CONDUCTANCE,
    &VAR_SOLVER_ITERATIONS,
];
