//! Variable definitions for leaf components.
//!
//! Every quantity exchanged between a leaf component and its caller is described by a
//! [`StaticVariableDefinition`]: a name, a canonical unit and a short description.
//! Definitions are declared at compile time with [`define_static_variable!`] so that
//! they can be used in const contexts and shared between components.
//!
//! # Example
//!
//! ```rust
//! use leafgx_core::variable::StaticVariableDefinition;
//!
//! let ppfd = StaticVariableDefinition::new(
//!     "Radiation|PPFD|Incident",
//!     "micromol / m^2 / s",
//!     "Photosynthetic photon flux density incident on the leaf",
//! );
//!
//! assert_eq!(ppfd.unit, "micromol / m^2 / s");
//! ```

use serde::Serialize;

/// Static variable definition holder for compile-time declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StaticVariableDefinition {
    /// Variable name
    pub name: &'static str,
    /// Canonical unit
    pub unit: &'static str,
    /// Description
    pub description: &'static str,
}

impl StaticVariableDefinition {
    pub const fn new(name: &'static str, unit: &'static str, description: &'static str) -> Self {
        Self {
            name,
            unit,
            description,
        }
    }
}

impl std::fmt::Display for StaticVariableDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.name, self.unit)
    }
}

/// Declare a static variable definition.
///
/// ```rust,ignore
/// define_static_variable!(
///     VAR_AIR_TEMPERATURE,
///     name = "Air Temperature",
///     unit = "degC",
///     description = "Air temperature outside the leaf boundary layer",
/// );
/// ```
#[macro_export]
macro_rules! define_static_variable {
    (
        $var_name:ident,
        name = $name:expr,
        unit = $unit:expr,
        description = $desc:expr $(,)?
    ) => {
        #[doc = concat!("Static variable definition for ", $name)]
        pub static $var_name: $crate::variable::StaticVariableDefinition =
            $crate::variable::StaticVariableDefinition::new($name, $unit, $desc);
    };
}

pub use crate::define_static_variable;
