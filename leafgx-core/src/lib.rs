//! Core traits and types for leaf gas-exchange models.
//!
//! Provides the [`component::Component`] abstraction, the error taxonomy shared by all
//! leaf components and the standard variable definitions used to exchange values
//! with a canopy integrator.

pub mod component;
pub mod errors;
pub mod standard_variables;
pub mod variable;
