//! Leaf Parameters
//!
//! Biochemical and stomatal parameters of a C3 leaf. Reference rates are given
//! at 25 degrees C and scaled to leaf temperature by the photosynthesis model.
//!
//! # Reference
//!
//! Temperature responses follow Bernacchi et al. (2001, 2003). Defaults are
//! typical of a well-watered soybean leaf.

use leafgx_core::component::FloatValue;
use leafgx_core::errors::{LeafError, LeafResult};
use serde::{Deserialize, Serialize};

/// How the water stress factor is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WaterStressApproach {
    /// Multiply net assimilation by the stress factor (switch value 0)
    #[default]
    ScaleAssimilation,
    /// Interpolate stomatal conductance between its minimum and unstressed
    /// value using the stress factor (switch value 1)
    InterpolateConductance,
}

impl TryFrom<FloatValue> for WaterStressApproach {
    type Error = LeafError;

    /// Decode the numeric switch used by canopy integrators.
    fn try_from(value: FloatValue) -> LeafResult<Self> {
        if value == 0.0 {
            Ok(Self::ScaleAssimilation)
        } else if value == 1.0 {
            Ok(Self::InterpolateConductance)
        } else {
            Err(LeafError::InvalidWaterStressApproach(value))
        }
    }
}

impl From<WaterStressApproach> for FloatValue {
    fn from(value: WaterStressApproach) -> Self {
        match value {
            WaterStressApproach::ScaleAssimilation => 0.0,
            WaterStressApproach::InterpolateConductance => 1.0,
        }
    }
}

/// Parameters describing the leaf being solved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeafParameters {
    /// Maximum Rubisco carboxylation rate at 25 degrees C
    /// unit: micromol / m^2 / s
    /// default: 100.0
    pub vcmax: FloatValue,

    /// Maximum electron transport rate at 25 degrees C
    /// unit: micromol / m^2 / s
    /// default: 180.0
    pub jmax: FloatValue,

    /// Maximum triose phosphate utilization rate at 25 degrees C
    /// unit: micromol / m^2 / s
    /// default: 23.0
    pub tpu_rate_max: FloatValue,

    /// Mitochondrial respiration at 25 degrees C
    /// unit: micromol / m^2 / s
    /// default: 1.1
    pub dark_respiration: FloatValue,

    /// Ball-Berry intercept
    /// unit: mol / m^2 / s
    /// default: 0.008
    pub ball_berry_intercept: FloatValue,

    /// Ball-Berry slope
    /// unit: dimensionless
    /// default: 10.6
    pub ball_berry_slope: FloatValue,

    /// Stomatal conductance under full water stress
    /// unit: mol / m^2 / s
    /// default: 0.001
    pub minimum_stomatal_conductance: FloatValue,

    /// Lower bound on the boundary layer conductance
    /// unit: mol / m^2 / s
    /// default: 0.08
    pub minimum_boundary_layer_conductance: FloatValue,

    /// Water stress factor, 1 is unstressed
    /// unit: dimensionless
    /// default: 1.0
    pub water_stress_factor: FloatValue,

    /// How the water stress factor is applied
    /// default: ScaleAssimilation
    pub water_stress_approach: WaterStressApproach,

    /// unit: electron / carboxylation
    /// default: 4.5
    pub electrons_per_carboxylation: FloatValue,

    /// unit: electron / oxygenation
    /// default: 5.25
    pub electrons_per_oxygenation: FloatValue,

    /// Curvature of the electron transport light response at 0 degrees C
    /// unit: dimensionless
    /// default: 0.7
    pub theta: FloatValue,

    /// Fraction of glycolate carbon not returned to the chloroplast, used in the
    /// TPU-limited rate (von Caemmerer 2000, Eq. 2.26)
    /// unit: dimensionless
    /// default: 0.0
    pub alpha_tpu: FloatValue,
}

impl Default for LeafParameters {
    fn default() -> Self {
        Self {
            vcmax: 100.0,
            jmax: 180.0,
            tpu_rate_max: 23.0,
            dark_respiration: 1.1,
            ball_berry_intercept: 0.008,
            ball_berry_slope: 10.6,
            minimum_stomatal_conductance: 1e-3,
            minimum_boundary_layer_conductance: 0.08,
            water_stress_factor: 1.0,
            water_stress_approach: WaterStressApproach::ScaleAssimilation,
            electrons_per_carboxylation: 4.5,
            electrons_per_oxygenation: 5.25,
            theta: 0.7,
            alpha_tpu: 0.0,
        }
    }
}

impl LeafParameters {
    /// Load leaf parameters from a TOML document. Missing keys use defaults.
    pub fn from_toml_str(document: &str) -> LeafResult<Self> {
        Ok(toml::from_str(document)?)
    }
}
