//! Common utilities for integration tests

pub mod mock_models;
pub mod scenarios;

pub use mock_models::{ConstantGross, FailingModel, LinearGross, RecordingGross};
pub use scenarios::{input_state_for, reference_scenario};
