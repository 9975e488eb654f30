//! Ball-Berry stomatal conductance
//!
//! Empirical response of stomatal conductance to net assimilation, relative
//! humidity and ambient CO2 (Ball, Woodrow and Berry 1987), optionally blended
//! with a water stress factor.

use crate::parameters::{LeafParameters, WaterStressApproach};
use leafgx_core::component::FloatValue;

/// Lower bound applied to stomatal conductance
/// unit: mol / m^2 / s
pub const MINIMUM_STOMATAL_CONDUCTANCE: FloatValue = 1e-8;

/// Ball-Berry stomatal conductance to water vapour.
///
/// $$g_s = b_0 + b_1 \frac{A \cdot h}{C_a}$$
///
/// Conductance falls back to the intercept when assimilation is not positive.
///
/// # Arguments
///
/// * `assimilation` - Net assimilation rate (mol / m^2 / s)
/// * `ambient_co2` - Ambient CO2 mole fraction (mol / mol)
/// * `relative_humidity` - Relative humidity (dimensionless)
/// * `intercept` - b0 (mol / m^2 / s)
/// * `slope` - b1 (dimensionless)
///
/// # Returns
///
/// Stomatal conductance in mol / m^2 / s
pub fn ball_berry(
    assimilation: FloatValue,
    ambient_co2: FloatValue,
    relative_humidity: FloatValue,
    intercept: FloatValue,
    slope: FloatValue,
) -> FloatValue {
    if assimilation > 0.0 {
        intercept + slope * assimilation * relative_humidity / ambient_co2
    } else {
        intercept
    }
}

/// Stomatal conductance of a leaf including water stress and the physical floor.
///
/// # Arguments
///
/// * `net_assimilation` - Net assimilation rate (micromol / m^2 / s)
/// * `ambient_co2` - Floored ambient CO2 mole fraction (micromol / mol)
/// * `relative_humidity` - Relative humidity (dimensionless)
/// * `leaf` - Leaf parameters
///
/// # Returns
///
/// Stomatal conductance in mol / m^2 / s, never below [`MINIMUM_STOMATAL_CONDUCTANCE`]
pub fn stomatal_conductance(
    net_assimilation: FloatValue,
    ambient_co2: FloatValue,
    relative_humidity: FloatValue,
    leaf: &LeafParameters,
) -> FloatValue {
    let mut gs = ball_berry(
        net_assimilation * 1e-6,
        ambient_co2 * 1e-6,
        relative_humidity,
        leaf.ball_berry_intercept,
        leaf.ball_berry_slope,
    );

    if leaf.water_stress_approach == WaterStressApproach::InterpolateConductance {
        let gs_min = leaf.minimum_stomatal_conductance;
        gs = gs_min + leaf.water_stress_factor * (gs - gs_min);
    }

    if gs <= 0.0 {
        gs = MINIMUM_STOMATAL_CONDUCTANCE;
    }
    gs
}
