//! Closed-form C3 photosynthesis (Farquhar, von Caemmerer and Berry)
//!
//! Net assimilation is limited by the slowest of three carboxylation rates:
//! Rubisco (`Wc`), RuBP regeneration by electron transport (`Wj`) and triose
//! phosphate utilization (`Wp`).
//!
//! # References
//!
//! - Bernacchi et al. (2001) Plant, Cell and Environment, 24(2), 253-259.
//! - Bernacchi et al. (2003) Plant, Cell and Environment, 26(9), 1419-1430.
//! - Yang et al. (2016) Planta, 243, 687-698 (TPU temperature response).
//! - Long (1991) Plant, Cell and Environment, 14, 729-739 (O2 solubility).
//! - von Caemmerer (2000) Biochemical models of leaf photosynthesis.
//! - Gu et al. (2010) "Avoiding pitfalls when using the FvCB model".

use crate::constants::{arrhenius_exponential, CELSIUS_TO_KELVIN, IDEAL_GAS_CONSTANT};
use crate::parameters::LeafParameters;
use leafgx_core::component::FloatValue;

/// Fraction of incident light reflected by the leaf
const LEAF_REFLECTANCE: FloatValue = 0.2;

/// Value of the Yang et al. TPU expression at 25 degrees C, used to normalise it
const TPU_REFERENCE_RATE: FloatValue = 306.742;

/// Mitochondrial respiration scaled to leaf temperature.
///
/// unit: micromol / m^2 / s
pub fn respiration_at_temperature(
    reference_respiration: FloatValue,
    leaf_temperature: FloatValue,
) -> FloatValue {
    reference_respiration
        * arrhenius_exponential(18.72, 46.39e3, leaf_temperature + CELSIUS_TO_KELVIN)
}

/// Solubility of O2 in water relative to its value at 25 degrees C.
///
/// Polynomial fit to tabulated solubilities, normalised at 25 degrees C (Long 1991).
pub fn relative_o2_solubility(leaf_temperature: FloatValue) -> FloatValue {
    let t = leaf_temperature;
    (0.047 - 0.001_308_7 * t + 2.5603e-05 * t.powi(2) - 2.1441e-07 * t.powi(3)) / 0.026_934
}

/// TPU rate relative to its value at 25 degrees C (Yang et al. 2016, Figure 7).
pub fn tpu_rate_multiplier(leaf_temperature: FloatValue) -> FloatValue {
    let tleaf_k = leaf_temperature + CELSIUS_TO_KELVIN;

    let tpu_c = 25.5; // dimensionless, fitted
    let ha = 62.99e3; // J / mol, enthalpy of activation
    let s = 0.588e3; // J / K / mol, entropy
    let hd = 182.14e3; // J / mol, enthalpy of deactivation

    let top = tleaf_k * arrhenius_exponential(tpu_c, ha, tleaf_k);
    let bot = 1.0 + arrhenius_exponential(s / IDEAL_GAS_CONSTANT, hd, tleaf_k);
    (top / bot) / TPU_REFERENCE_RATE
}

/// Kinetic constants of a C3 leaf evaluated at one leaf temperature.
///
/// Everything here depends only on temperature, light and the leaf parameters,
/// so it is evaluated once per solve and reused for every internal CO2 value.
#[derive(Debug, Clone, PartialEq)]
pub struct C3Kinetics {
    /// Michaelis constant for CO2 (micromol / mol)
    pub kc: FloatValue,
    /// Michaelis constant for O2 (mmol / mol)
    pub ko: FloatValue,
    /// CO2 compensation point in the absence of respiration (micromol / mol)
    pub gamma_star: FloatValue,
    /// Maximum carboxylation rate (micromol / m^2 / s)
    pub vcmax: FloatValue,
    /// Maximum electron transport rate (micromol / m^2 / s)
    pub jmax: FloatValue,
    /// Respiration (micromol / m^2 / s)
    pub respiration: FloatValue,
    /// Temperature corrected curvature factor
    pub theta: FloatValue,
    /// Electron transport rate (micromol / m^2 / s)
    pub electron_transport: FloatValue,
    /// O2 concentration corrected for solubility (mmol / mol)
    pub oxygen: FloatValue,
    /// TPU rate (micromol / m^2 / s)
    pub tpu: FloatValue,
    pub alpha_tpu: FloatValue,
    pub electrons_per_carboxylation: FloatValue,
    pub electrons_per_oxygenation: FloatValue,
}

/// Rates limiting carboxylation at one internal CO2 value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarboxylationRates {
    /// Rubisco-limited (micromol / m^2 / s)
    pub rubisco: FloatValue,
    /// RuBP-regeneration-limited (micromol / m^2 / s)
    pub electron_transport: FloatValue,
    /// TPU-limited, infinite at or below the TPU asymptote (micromol / m^2 / s)
    pub tpu: FloatValue,
}

impl CarboxylationRates {
    pub fn limiting(&self) -> FloatValue {
        self.rubisco.min(self.electron_transport.min(self.tpu))
    }
}

impl C3Kinetics {
    /// Evaluate the temperature and light dependent constants.
    ///
    /// # Arguments
    ///
    /// * `leaf_temperature` - Leaf temperature (degrees C)
    /// * `incident_ppfd` - Incident photon flux density (micromol / m^2 / s)
    /// * `atmospheric_o2` - O2 mole fraction (mmol / mol)
    /// * `leaf` - Leaf parameters
    pub fn new(
        leaf_temperature: FloatValue,
        incident_ppfd: FloatValue,
        atmospheric_o2: FloatValue,
        leaf: &LeafParameters,
    ) -> Self {
        let t = leaf_temperature;
        let tleaf_k = t + CELSIUS_TO_KELVIN;

        // Note: values in Dubois and Bernacchi are incorrect
        let kc = arrhenius_exponential(38.05, 79.43e3, tleaf_k);
        let ko = arrhenius_exponential(20.30, 36.38e3, tleaf_k);
        let gamma_star = arrhenius_exponential(19.02, 37.83e3, tleaf_k);
        let vcmax = leaf.vcmax * arrhenius_exponential(26.35, 65.33e3, tleaf_k);
        let jmax = leaf.jmax * arrhenius_exponential(17.57, 43.54e3, tleaf_k);
        let respiration = respiration_at_temperature(leaf.dark_respiration, t);

        let theta = leaf.theta + 0.018 * t - 3.7e-4 * t.powi(2);

        // Dark adapted PSII efficiency, Bernacchi et al. (2003)
        let dark_adapted_phi_psii = 0.352 + 0.022 * t - 3.4 * t.powi(2) / 1e4;
        let i2 = incident_ppfd * dark_adapted_phi_psii * (1.0 - LEAF_REFLECTANCE) / 2.0;

        Self {
            kc,
            ko,
            gamma_star,
            vcmax,
            jmax,
            respiration,
            theta,
            electron_transport: electron_transport_rate(jmax, i2, theta),
            oxygen: atmospheric_o2 * relative_o2_solubility(t),
            tpu: leaf.tpu_rate_max * tpu_rate_multiplier(t),
            alpha_tpu: leaf.alpha_tpu,
            electrons_per_carboxylation: leaf.electrons_per_carboxylation,
            electrons_per_oxygenation: leaf.electrons_per_oxygenation,
        }
    }

    /// Internal CO2 at which the TPU-limited rate is singular
    ///
    /// unit: micromol / mol
    pub fn tpu_asymptote(&self) -> FloatValue {
        self.gamma_star * (1.0 + 3.0 * self.alpha_tpu)
    }

    /// The three carboxylation rates at an internal CO2 mole fraction (micromol / mol).
    pub fn carboxylation_rates(&self, ci: FloatValue) -> CarboxylationRates {
        let rubisco = self.vcmax * ci / (ci + self.kc * (1.0 + self.oxygen / self.ko));

        let electron_transport = self.electron_transport * ci
            / (self.electrons_per_carboxylation * ci
                + 2.0 * self.electrons_per_oxygenation * self.gamma_star);

        // TPU cannot limit below the asymptote; treat it as infinite there so it
        // is never selected.
        let asymptote = self.tpu_asymptote();
        let tpu = if ci > asymptote {
            3.0 * self.tpu * ci / (ci - asymptote)
        } else {
            FloatValue::INFINITY
        };

        CarboxylationRates {
            rubisco,
            electron_transport,
            tpu,
        }
    }

    /// RuBP-saturated net assimilation at zero internal CO2.
    pub fn rubisco_limited_at_zero_ci(&self) -> FloatValue {
        -self.gamma_star * self.vcmax / (self.kc * (1.0 + self.oxygen / self.ko)) - self.respiration
    }

    /// RuBP-regeneration-limited net assimilation at zero internal CO2.
    pub fn electron_transport_limited_at_zero_ci(&self) -> FloatValue {
        -self.electron_transport / (2.0 * self.electrons_per_oxygenation) - self.respiration
    }

    /// Net assimilation before any water stress is applied.
    ///
    /// At `ci == 0` the photorespiration term `gamma_star / ci` is singular, so the
    /// limiting forms at zero CO2 are used directly.
    ///
    /// unit: micromol / m^2 / s
    pub fn net_assimilation(&self, ci: FloatValue) -> FloatValue {
        if ci == 0.0 {
            self.rubisco_limited_at_zero_ci()
                .max(self.electron_transport_limited_at_zero_ci())
        } else {
            let vc = self.carboxylation_rates(ci).limiting();
            (1.0 - self.gamma_star / ci) * vc - self.respiration
        }
    }
}

/// Electron transport rate from the non-rectangular hyperbola
/// `theta J^2 - (Jmax + I2) J + I2 Jmax = 0`, taking the smaller root.
///
/// unit: micromol / m^2 / s
pub fn electron_transport_rate(jmax: FloatValue, i2: FloatValue, theta: FloatValue) -> FloatValue {
    let sum = jmax + i2;
    (sum - (sum.powi(2) - 4.0 * theta * i2 * jmax).sqrt()) / (2.0 * theta)
}
