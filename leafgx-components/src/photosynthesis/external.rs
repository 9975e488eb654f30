//! Net assimilation from an external gross assimilation model
//!
//! The delegate reports gross assimilation only. Respiration, water stress and
//! the upper bound on net assimilation are applied here.

use super::{
    assimilation_stress_factor, fvcb::respiration_at_temperature, AssimilationRequest,
    GrossAssimilation, NetAssimilationModel,
};
use crate::parameters::LeafParameters;
use leafgx_core::component::FloatValue;
use leafgx_core::errors::LeafResult;
use tracing::trace;

/// Upper bound on net assimilation reported from an external model
///
/// unit: micromol / m^2 / s
pub const MAXIMUM_EXTERNAL_NET_ASSIMILATION: FloatValue = 60.0;

/// An external model bound to one leaf temperature and light level.
#[derive(Debug)]
pub struct ExternalAssimilation<'a> {
    delegate: &'a dyn GrossAssimilation,
    leaf_temperature: FloatValue,
    ppfd: FloatValue,
    respiration: FloatValue,
    stress_factor: FloatValue,
}

impl<'a> ExternalAssimilation<'a> {
    pub fn new(
        delegate: &'a dyn GrossAssimilation,
        leaf_temperature: FloatValue,
        ppfd: FloatValue,
        leaf: &LeafParameters,
    ) -> Self {
        Self {
            delegate,
            leaf_temperature,
            ppfd,
            respiration: respiration_at_temperature(leaf.dark_respiration, leaf_temperature),
            stress_factor: assimilation_stress_factor(leaf),
        }
    }
}

impl NetAssimilationModel for ExternalAssimilation<'_> {
    fn net_assimilation(&self, internal_co2: FloatValue) -> LeafResult<FloatValue> {
        let request = AssimilationRequest {
            leaf_temperature: self.leaf_temperature,
            internal_co2,
            ppfd: self.ppfd,
        };
        let gross = self.delegate.compute_gross_assimilation(&request)?.max(0.0);
        trace!(internal_co2, gross, "external gross assimilation");

        let net = (gross - self.respiration) * self.stress_factor;
        Ok(net.min(MAXIMUM_EXTERNAL_NET_ASSIMILATION))
    }

    fn respiration(&self) -> FloatValue {
        self.respiration
    }
}
