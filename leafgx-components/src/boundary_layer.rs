//! Leaf boundary layer conductance
//!
//! Conductance for water vapour between the leaf surface and the free air due to
//! wind-driven eddies, following Equation 14.9 of Thornley and Johnson (1990).
//!
//! The model has two singularities, at `CanopyHeight = WindSpeedHeight / (dCoef - ZetaCoef)`
//! and `CanopyHeight = WindSpeedHeight / (dCoef - ZetaMCoef)`. As the canopy height
//! approaches the wind measurement height the conductance becomes unbounded, so the
//! canopy height is limited to `0.98 * WindSpeedHeight` before evaluating the model.

use leafgx_core::component::FloatValue;

/// von Karman's constant
const KAPPA: FloatValue = 0.41;
/// Eq. 14.9o
const ZETA_COEF: FloatValue = 0.026;
/// Eq. 14.9o
const ZETA_M_COEF: FloatValue = 0.13;
/// Eq. 14.9o. Reported as 0.64 in the 1990 text; corrected to 0.77 in the
/// errata of the 2000 reprint.
const D_COEF: FloatValue = 0.77;
/// Fraction of the wind measurement height the canopy height is limited to
const CANOPY_HEIGHT_LIMIT: FloatValue = 0.98;

/// Boundary layer conductance from Thornley and Johnson (1990), Eq. 14.9n.
///
/// $$g_a = \frac{\kappa^2 u}{\ln\left(\frac{H + \zeta - d}{\zeta}\right)\ln\left(\frac{H + \zeta_m - d}{\zeta_m}\right)}$$
///
/// # Arguments
///
/// * `canopy_height` - Height of the canopy (m)
/// * `wind_speed` - Wind speed measured above the canopy (m / s)
/// * `minimum_conductance` - Lowest conductance that may be returned (m / s)
/// * `wind_speed_height` - Height at which the wind speed was measured (m)
///
/// # Returns
///
/// Boundary layer conductance in m / s
pub fn leaf_boundary_layer_conductance(
    canopy_height: FloatValue,
    wind_speed: FloatValue,
    minimum_conductance: FloatValue,
    wind_speed_height: FloatValue,
) -> FloatValue {
    let canopy_height = canopy_height.min(CANOPY_HEIGHT_LIMIT * wind_speed_height);

    let zeta = ZETA_COEF * canopy_height;
    let zeta_m = ZETA_M_COEF * canopy_height;
    let d = D_COEF * canopy_height;

    let ga0 = KAPPA.powi(2) * wind_speed;
    let ga1 = ((wind_speed_height + zeta - d) / zeta).ln();
    let ga2 = ((wind_speed_height + zeta_m - d) / zeta_m).ln();
    let conductance = ga0 / (ga1 * ga2);

    conductance.max(minimum_conductance)
}
