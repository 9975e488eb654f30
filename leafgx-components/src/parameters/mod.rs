//! Leaf component parameters
//!
//! This module contains the immutable input records of a leaf solve and the
//! options of the coupled solver. Each struct provides defaults and can be
//! loaded from a partial TOML document.

mod environment;
mod leaf;
mod solver;

pub use environment::LeafEnvironment;
pub use leaf::{LeafParameters, WaterStressApproach};
pub use solver::SolverOptions;
