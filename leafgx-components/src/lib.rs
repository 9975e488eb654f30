//! Leaf gas exchange components
//!
//! This crate couples C3 photosynthesis, Ball-Berry stomatal conductance and a
//! leaf energy balance into a single solve for one leaf at one instant.
//!
//! # Module Organisation
//!
//! - `moist_air`: psychrometric properties of air and water vapour
//! - `boundary_layer`: leaf boundary layer conductance
//! - `photosynthesis`: biochemical assimilation models (closed-form FvCB and an
//!   external delegate)
//! - `stomata`: stomatal conductance
//! - `energy_balance`: leaf temperature and transpiration
//! - `gas_exchange`: the coupled solver, also exposed as a [`leafgx_core::component::Component`]
//!
//! # Parameters
//!
//! Inputs are grouped into structs in the `parameters` module with defaults
//! typical of a well-watered soybean leaf in full sun.

pub mod boundary_layer;
pub mod constants;
pub mod energy_balance;
pub mod gas_exchange;
pub mod moist_air;
pub mod parameters;
pub mod photosynthesis;
pub mod stomata;

pub use gas_exchange::{LeafGasExchange, LeafGasExchangeResult};
