//! Biochemical assimilation models
//!
//! The coupler evaluates net assimilation at a fixed leaf temperature for many
//! internal CO2 values. [`NetAssimilationModel`] is that seam; the closed-form
//! FvCB model and the external delegate both implement it.

pub mod external;
pub mod fvcb;

use crate::parameters::{LeafParameters, WaterStressApproach};
use leafgx_core::component::FloatValue;
use leafgx_core::errors::LeafResult;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub use external::{ExternalAssimilation, MAXIMUM_EXTERNAL_NET_ASSIMILATION};
pub use fvcb::{C3Kinetics, CarboxylationRates};

/// Biochemical model used to converge assimilation at leaf temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BiochemistryVariant {
    /// Closed-form Farquhar, von Caemmerer and Berry model
    #[default]
    C3ClosedForm,
    /// Gross assimilation supplied by an attached [`GrossAssimilation`] delegate
    C3External,
    /// Placeholder for a C4 model. Selecting it is an error.
    C4,
}

impl BiochemistryVariant {
    pub fn name(&self) -> &'static str {
        match self {
            BiochemistryVariant::C3ClosedForm => "C3ClosedForm",
            BiochemistryVariant::C3External => "C3External",
            BiochemistryVariant::C4 => "C4",
        }
    }
}

/// Query sent to an external assimilation model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssimilationRequest {
    /// unit: degrees C
    pub leaf_temperature: FloatValue,
    /// unit: micromol / mol
    pub internal_co2: FloatValue,
    /// unit: micromol / m^2 / s
    pub ppfd: FloatValue,
}

/// A model outside this crate that returns gross CO2 assimilation.
///
/// Implementations are shared between threads by batch solves, and must report
/// failures as [`leafgx_core::errors::LeafError::ExternalModel`].
pub trait GrossAssimilation: Debug + Send + Sync {
    /// Gross assimilation for the request
    ///
    /// unit: micromol / m^2 / s
    fn compute_gross_assimilation(&self, request: &AssimilationRequest) -> LeafResult<FloatValue>;
}

/// Net assimilation at a fixed leaf temperature as a function of internal CO2.
pub trait NetAssimilationModel {
    /// Net assimilation after water stress, in micromol / m^2 / s
    ///
    /// `internal_co2` is a mole fraction in micromol / mol.
    fn net_assimilation(&self, internal_co2: FloatValue) -> LeafResult<FloatValue>;

    /// Respiration at leaf temperature, in micromol / m^2 / s
    fn respiration(&self) -> FloatValue;
}

/// Multiplier applied to net assimilation by the water stress approach.
pub fn assimilation_stress_factor(leaf: &LeafParameters) -> FloatValue {
    match leaf.water_stress_approach {
        WaterStressApproach::ScaleAssimilation => leaf.water_stress_factor,
        WaterStressApproach::InterpolateConductance => 1.0,
    }
}

/// The closed-form model with water stress applied.
#[derive(Debug, Clone)]
pub struct ClosedFormAssimilation {
    kinetics: C3Kinetics,
    stress_factor: FloatValue,
}

impl ClosedFormAssimilation {
    pub fn new(
        leaf_temperature: FloatValue,
        incident_ppfd: FloatValue,
        atmospheric_o2: FloatValue,
        leaf: &LeafParameters,
    ) -> Self {
        Self {
            kinetics: C3Kinetics::new(leaf_temperature, incident_ppfd, atmospheric_o2, leaf),
            stress_factor: assimilation_stress_factor(leaf),
        }
    }

    pub fn kinetics(&self) -> &C3Kinetics {
        &self.kinetics
    }
}

impl NetAssimilationModel for ClosedFormAssimilation {
    fn net_assimilation(&self, internal_co2: FloatValue) -> LeafResult<FloatValue> {
        Ok(self.kinetics.net_assimilation(internal_co2) * self.stress_factor)
    }

    fn respiration(&self) -> FloatValue {
        self.kinetics.respiration
    }
}
