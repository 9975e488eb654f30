//! Coupled leaf gas exchange
//!
//! Re-exports the core framework and the leaf components, and provides
//! [`LeafConfig`] for describing a complete leaf solve in a single TOML document.
//!
//! ```rust
//! use leafgx::LeafConfig;
//!
//! let config = LeafConfig::from_toml_str(
//!     r#"
//!     [environment]
//!     air_temperature = 22.0
//!
//!     [leaf]
//!     vcmax = 90.0
//!     "#,
//! )
//! .unwrap();
//! let result = config.solve().unwrap();
//! assert!(result.net_assimilation > 0.0);
//! ```

pub use leafgx_components;
pub use leafgx_core;

use leafgx_components::parameters::{LeafEnvironment, LeafParameters};
use leafgx_components::{LeafGasExchange, LeafGasExchangeResult};
use leafgx_core::errors::LeafResult;
use serde::{Deserialize, Serialize};

/// Solver configuration together with the leaf and its environment.
///
/// Every section is optional and falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeafConfig {
    pub solver: LeafGasExchange,
    pub environment: LeafEnvironment,
    pub leaf: LeafParameters,
}

impl LeafConfig {
    pub fn from_toml_str(document: &str) -> LeafResult<Self> {
        Ok(toml::from_str(document)?)
    }

    pub fn solve(&self) -> LeafResult<LeafGasExchangeResult> {
        self.solver.solve_leaf(&self.environment, &self.leaf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use leafgx_components::photosynthesis::BiochemistryVariant;
    use leafgx_core::errors::LeafError;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = LeafConfig::from_toml_str("").unwrap();
        assert_eq!(config.environment, LeafEnvironment::default());
        assert_eq!(config.leaf, LeafParameters::default());
        assert_eq!(config.solver.variant, BiochemistryVariant::C3ClosedForm);
    }

    #[test]
    fn test_reads_all_sections() {
        let config = LeafConfig::from_toml_str(
            r#"
            [solver]
            variant = "C4"

            [solver.options]
            max_iterations_closed_form = 50

            [environment]
            relative_humidity = 0.4

            [leaf]
            ball_berry_slope = 9.0
            "#,
        )
        .unwrap();

        assert_eq!(config.solver.variant, BiochemistryVariant::C4);
        assert_eq!(config.solver.options.max_iterations_closed_form, 50);
        assert_eq!(config.solver.options.max_iterations_external, 10);
        assert_relative_eq!(config.environment.relative_humidity, 0.4);
        assert_relative_eq!(config.leaf.ball_berry_slope, 9.0);

        assert!(matches!(config.solve(), Err(LeafError::NotImplemented(_))));
    }

    #[test]
    fn test_solves_default_leaf() {
        let result = LeafConfig::default().solve().unwrap();
        assert!(result.converged);
    }
}
