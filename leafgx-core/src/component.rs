//! The `Component` abstraction shared by every leaf process.
//!
//! A component declares the variables it reads and writes through
//! [`Component::definitions`] and maps an [`InputState`] to an [`OutputState`]
//! in [`Component::solve`]. Components are stateless: every call is fully
//! determined by the input state passed to it.

use crate::errors::{LeafError, LeafResult};
use crate::variable::StaticVariableDefinition;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use tracing::warn;

/// Floating point type used for every physical quantity.
pub type FloatValue = f64;

/// Named outputs of a single component solve.
pub type OutputState = HashMap<String, FloatValue>;

#[derive(Debug, Eq, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum RequirementType {
    Input,
    Output,
}

/// A variable read or written by a component, together with its unit.
#[derive(Debug, Eq, PartialEq, Clone, Serialize, Deserialize)]
pub struct RequirementDefinition {
    pub name: String,
    pub unit: String,
    pub requirement_type: RequirementType,
}

impl RequirementDefinition {
    pub fn new(name: &str, unit: &str, requirement_type: RequirementType) -> Self {
        Self {
            name: name.to_string(),
            unit: unit.to_string(),
            requirement_type,
        }
    }

    pub fn scalar_input(name: &str, unit: &str) -> Self {
        Self::new(name, unit, RequirementType::Input)
    }

    pub fn scalar_output(name: &str, unit: &str) -> Self {
        Self::new(name, unit, RequirementType::Output)
    }

    /// Input requirement built from a standard variable definition.
    pub fn input(variable: &StaticVariableDefinition) -> Self {
        Self::scalar_input(variable.name, variable.unit)
    }

    /// Output requirement built from a standard variable definition.
    pub fn output(variable: &StaticVariableDefinition) -> Self {
        Self::scalar_output(variable.name, variable.unit)
    }
}

/// Input state for a component
///
/// A flat collection of named scalar values valid at the instant being solved.
/// This is very similar to a Hashmap, but lookups of missing variables are
/// reported as errors rather than panics.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    state: HashMap<String, FloatValue>,
}

impl InputState {
    pub fn build(values: HashMap<String, FloatValue>) -> Self {
        Self { state: values }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Insert or replace a value
    pub fn insert(&mut self, name: impl Into<String>, value: FloatValue) {
        self.state.insert(name.into(), value);
    }

    /// Get the value of a variable
    ///
    /// # Errors
    /// Returns [`LeafError::MissingInput`] if the variable is not present.
    pub fn get(&self, name: &str) -> LeafResult<FloatValue> {
        let value = *self
            .state
            .get(name)
            .ok_or_else(|| LeafError::MissingInput(name.to_string()))?;

        if !value.is_finite() {
            warn!(variable = %name, value, "Non-finite value in input state");
        }
        Ok(value)
    }

    /// Converts the state into an equivalent hashmap
    pub fn to_hashmap(self) -> HashMap<String, FloatValue> {
        self.state
    }
}

impl FromIterator<(String, FloatValue)> for InputState {
    fn from_iter<T: IntoIterator<Item = (String, FloatValue)>>(iter: T) -> Self {
        Self {
            state: iter.into_iter().collect(),
        }
    }
}

/// Component of a leaf model
///
/// Each component encapsulates one self-contained process that turns a set of
/// named inputs into a set of named outputs.
#[typetag::serde(tag = "type")]
pub trait Component: Debug + Send + Sync {
    /// Variables required and produced by the component
    fn definitions(&self) -> Vec<RequirementDefinition>;

    /// Variables that are required to solve this component
    fn inputs(&self) -> Vec<RequirementDefinition> {
        self.definitions()
            .into_iter()
            .filter(|d| d.requirement_type == RequirementType::Input)
            .collect()
    }

    fn input_names(&self) -> Vec<String> {
        self.inputs().into_iter().map(|d| d.name).collect()
    }

    /// Variables that are solved by this component
    fn outputs(&self) -> Vec<RequirementDefinition> {
        self.definitions()
            .into_iter()
            .filter(|d| d.requirement_type == RequirementType::Output)
            .collect()
    }

    fn output_names(&self) -> Vec<String> {
        self.outputs().into_iter().map(|d| d.name).collect()
    }

    /// Solve the component for a single instant
    fn solve(&self, input_state: &InputState) -> LeafResult<OutputState>;
}
