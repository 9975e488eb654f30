//! Solver options for the gas exchange coupler.

use leafgx_core::component::FloatValue;
use leafgx_core::errors::LeafResult;
use serde::{Deserialize, Serialize};

/// Iteration caps, tolerances and initial guesses of the fixed point loops.
///
/// The closed-form and external caps differ by two orders of magnitude because
/// each external evaluation is expensive; both are kept configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverOptions {
    /// Iteration cap of the assimilation-conductance loop for the closed-form model
    /// default: 1000
    pub max_iterations_closed_form: usize,

    /// Iteration cap of the assimilation-conductance loop for the external model
    /// default: 10
    pub max_iterations_external: usize,

    /// Convergence tolerance on successive net assimilation rates
    /// unit: micromol / m^2 / s
    /// default: 0.01
    pub assimilation_tolerance: FloatValue,

    /// Initial internal CO2 partial pressure for the closed-form model
    /// unit: Pa
    /// default: 0.0
    pub initial_ci_closed_form: FloatValue,

    /// Initial internal CO2 partial pressure for the external model
    /// unit: Pa
    /// default: 30.0
    pub initial_ci_external: FloatValue,

    /// Iteration cap of the leaf temperature loop in the energy balance
    /// default: 10
    pub energy_balance_max_iterations: usize,

    /// Convergence tolerance on successive leaf-air temperature offsets
    /// unit: degrees C
    /// default: 0.5
    pub leaf_temperature_tolerance: FloatValue,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            max_iterations_closed_form: 1000,
            max_iterations_external: 10,
            assimilation_tolerance: 0.01,
            initial_ci_closed_form: 0.0,
            initial_ci_external: 30.0,
            energy_balance_max_iterations: 10,
            leaf_temperature_tolerance: 0.5,
        }
    }
}

impl SolverOptions {
    /// Load solver options from a TOML document. Missing keys use defaults.
    pub fn from_toml_str(document: &str) -> LeafResult<Self> {
        Ok(toml::from_str(document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leafgx_core::errors::LeafError;

    #[test]
    fn test_loads_partial_toml() {
        let options = SolverOptions::from_toml_str(
            r#"
            max_iterations_external = 25
            initial_ci_external = 20.0
            "#,
        )
        .unwrap();
        assert_eq!(options.max_iterations_external, 25);
        assert_eq!(options.initial_ci_external, 20.0);
        assert_eq!(options.max_iterations_closed_form, 1000);
        assert_eq!(options.assimilation_tolerance, 0.01);
    }

    #[test]
    fn test_negative_cap_is_a_config_error() {
        let err = SolverOptions::from_toml_str("max_iterations_closed_form = -3").unwrap_err();
        assert!(matches!(err, LeafError::Config(_)));
    }
}
