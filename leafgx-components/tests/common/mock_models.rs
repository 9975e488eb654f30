//! Stand-ins for an external gross assimilation model

use leafgx_components::photosynthesis::{AssimilationRequest, GrossAssimilation};
use leafgx_core::component::FloatValue;
use leafgx_core::errors::{LeafError, LeafResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Returns the same gross assimilation for every request and counts calls.
#[derive(Debug, Default)]
pub struct ConstantGross {
    pub gross: FloatValue,
    calls: AtomicUsize,
}

impl ConstantGross {
    pub fn new(gross: FloatValue) -> Self {
        Self {
            gross,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl GrossAssimilation for ConstantGross {
    fn compute_gross_assimilation(&self, _request: &AssimilationRequest) -> LeafResult<FloatValue> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.gross)
    }
}

/// Gross assimilation proportional to internal CO2.
#[derive(Debug)]
pub struct LinearGross {
    /// unit: micromol / m^2 / s per micromol / mol
    pub slope: FloatValue,
}

impl GrossAssimilation for LinearGross {
    fn compute_gross_assimilation(&self, request: &AssimilationRequest) -> LeafResult<FloatValue> {
        Ok(self.slope * request.internal_co2)
    }
}

/// Fails every request, like an unreachable remote solver.
#[derive(Debug)]
pub struct FailingModel;

impl GrossAssimilation for FailingModel {
    fn compute_gross_assimilation(&self, _request: &AssimilationRequest) -> LeafResult<FloatValue> {
        Err(LeafError::ExternalModel("connection reset by peer".to_string()))
    }
}

/// Gross assimilation proportional to internal CO2 that keeps every request.
#[derive(Debug, Default)]
pub struct RecordingGross {
    pub slope: FloatValue,
    requests: Mutex<Vec<AssimilationRequest>>,
}

impl RecordingGross {
    pub fn new(slope: FloatValue) -> Self {
        Self {
            slope,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<AssimilationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl GrossAssimilation for RecordingGross {
    fn compute_gross_assimilation(&self, request: &AssimilationRequest) -> LeafResult<FloatValue> {
        self.requests.lock().unwrap().push(*request);
        Ok(self.slope * request.internal_co2)
    }
}
