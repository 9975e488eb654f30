//! Coupled leaf gas exchange
//!
//! Assimilation, stomatal conductance and leaf temperature depend on each
//! other. The solve proceeds in three phases:
//!
//! 1. Seed: converge the closed-form model at air temperature to estimate
//!    stomatal conductance.
//! 2. Temperature correction: solve the energy balance with that conductance
//!    to obtain leaf temperature.
//! 3. Converge: iterate assimilation, stomatal conductance and internal CO2 at
//!    leaf temperature with the selected biochemical model.
//!
//! The loops stop when successive net assimilation rates agree to within a
//! tolerance or when their iteration cap is reached. Hitting the cap is not an
//! error; the last iterate is returned with `converged == false`.

use crate::constants::{MOLAR_MASS_OF_WATER, WATER_TO_CO2_DIFFUSIVITY_RATIO};
use crate::energy_balance::{solve_energy_balance, EnergyBalance};
use crate::parameters::{LeafEnvironment, LeafParameters, SolverOptions, WaterStressApproach};
use crate::photosynthesis::{
    BiochemistryVariant, ClosedFormAssimilation, ExternalAssimilation, GrossAssimilation,
    NetAssimilationModel,
};
use crate::stomata::stomatal_conductance;
use leafgx_core::component::{
    Component, FloatValue, InputState, OutputState, RequirementDefinition,
};
use leafgx_core::errors::{LeafError, LeafResult};
use leafgx_core::standard_variables::*;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Internal CO2 partial pressure used when the update would make it negative
///
/// unit: Pa
pub const MINIMUM_INTERNAL_CO2_PARTIAL_PRESSURE: FloatValue = 1e-5;

/// Converts a mass flux of water in kg / m^2 / s to mmol / m^2 / s
const WATER_KG_TO_MMOL: FloatValue = 1e3 / MOLAR_MASS_OF_WATER;

/// Outputs of a leaf gas exchange solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafGasExchangeResult {
    /// unit: micromol / m^2 / s
    pub net_assimilation: FloatValue,
    /// Net assimilation plus respiration at leaf temperature
    /// unit: micromol / m^2 / s
    pub gross_assimilation: FloatValue,
    /// Internal CO2 mole fraction of the final pass
    /// unit: micromol / mol
    pub internal_co2: FloatValue,
    /// unit: mmol / m^2 / s
    pub stomatal_conductance: FloatValue,
    /// Penman-Monteith transpiration
    /// unit: mmol / m^2 / s
    pub transpiration: FloatValue,
    /// unit: mmol / m^2 / s
    pub transpiration_penman: FloatValue,
    /// unit: mmol / m^2 / s
    pub transpiration_priestley_taylor: FloatValue,
    /// unit: degrees C
    pub leaf_temperature: FloatValue,
    /// unit: mol / m^2 / s
    pub boundary_layer_conductance: FloatValue,
    /// Passes of the final assimilation-conductance loop
    pub iterations: usize,
    /// Whether the final loop met its tolerance before the cap
    pub converged: bool,
}

/// State of the assimilation-conductance loop after it stops.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Convergence {
    net_assimilation: FloatValue,
    internal_co2: FloatValue,
    /// mol / m^2 / s
    stomatal_conductance: FloatValue,
    iterations: usize,
    converged: bool,
}

/// Coupled solver for leaf photosynthesis, stomatal conductance and energy balance.
///
/// The external model is attached at runtime and is not serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeafGasExchange {
    pub options: SolverOptions,
    pub variant: BiochemistryVariant,
    #[serde(skip)]
    external: Option<Arc<dyn GrossAssimilation>>,
}

impl LeafGasExchange {
    pub fn new(options: SolverOptions, variant: BiochemistryVariant) -> Self {
        Self {
            options,
            variant,
            external: None,
        }
    }

    /// Attach an external gross assimilation model and select the external variant.
    pub fn with_external_model(mut self, model: Arc<dyn GrossAssimilation>) -> Self {
        self.variant = BiochemistryVariant::C3External;
        self.external = Some(model);
        self
    }

    /// Solve gas exchange for a single leaf.
    ///
    /// # Errors
    ///
    /// * [`LeafError::NotImplemented`] for the C4 variant
    /// * [`LeafError::MissingExternalModel`] for the external variant without a model
    /// * [`LeafError::RelativeHumidityOutOfRange`] when relative humidity is outside [0, 1]
    /// * errors from the energy balance and from the external model
    pub fn solve_leaf(
        &self,
        environment: &LeafEnvironment,
        leaf: &LeafParameters,
    ) -> LeafResult<LeafGasExchangeResult> {
        let external = match self.variant {
            BiochemistryVariant::C4 => {
                return Err(LeafError::NotImplemented(self.variant.name().to_string()))
            }
            BiochemistryVariant::C3External => Some(
                self.external
                    .as_deref()
                    .ok_or(LeafError::MissingExternalModel)?,
            ),
            BiochemistryVariant::C3ClosedForm => None,
        };

        let relative_humidity = environment.relative_humidity;
        if !(0.0..=1.0).contains(&relative_humidity) {
            return Err(LeafError::RelativeHumidityOutOfRange(relative_humidity));
        }

        // Seed with the closed-form model with the leaf at air temperature
        let seed_model = ClosedFormAssimilation::new(
            environment.air_temperature,
            environment.incident_ppfd,
            environment.atmospheric_o2,
            leaf,
        );
        let seed = self.converge(
            &seed_model,
            environment,
            leaf,
            self.options.initial_ci_closed_form,
            self.options.max_iterations_closed_form,
        )?;
        debug!(
            net_assimilation = seed.net_assimilation,
            stomatal_conductance = seed.stomatal_conductance,
            iterations = seed.iterations,
            "Seeded stomatal conductance at air temperature"
        );

        let energy: EnergyBalance =
            solve_energy_balance(environment, leaf, seed.stomatal_conductance, &self.options)?;
        let leaf_temperature = environment.air_temperature + energy.temperature_offset;

        let (state, respiration) = match external {
            Some(delegate) => {
                let model = ExternalAssimilation::new(
                    delegate,
                    leaf_temperature,
                    environment.incident_ppfd,
                    leaf,
                );
                let state = self.converge(
                    &model,
                    environment,
                    leaf,
                    self.options.initial_ci_external,
                    self.options.max_iterations_external,
                )?;
                (state, model.respiration())
            }
            None => {
                let model = ClosedFormAssimilation::new(
                    leaf_temperature,
                    environment.incident_ppfd,
                    environment.atmospheric_o2,
                    leaf,
                );
                let state = self.converge(
                    &model,
                    environment,
                    leaf,
                    self.options.initial_ci_closed_form,
                    self.options.max_iterations_closed_form,
                )?;
                (state, model.respiration())
            }
        };

        debug!(
            variant = self.variant.name(),
            leaf_temperature,
            net_assimilation = state.net_assimilation,
            iterations = state.iterations,
            converged = state.converged,
            "Solved leaf gas exchange"
        );

        Ok(LeafGasExchangeResult {
            net_assimilation: state.net_assimilation,
            gross_assimilation: state.net_assimilation + respiration,
            internal_co2: state.internal_co2,
            stomatal_conductance: state.stomatal_conductance * 1e3,
            transpiration: energy.transpiration * WATER_KG_TO_MMOL,
            transpiration_penman: energy.penman * WATER_KG_TO_MMOL,
            transpiration_priestley_taylor: energy.priestley_taylor * WATER_KG_TO_MMOL,
            leaf_temperature,
            boundary_layer_conductance: energy.boundary_layer_conductance,
            iterations: state.iterations,
            converged: state.converged,
        })
    }

    /// Solve many independent leaves in parallel.
    ///
    /// Results are returned in input order and match solving each leaf with
    /// [`LeafGasExchange::solve_leaf`].
    pub fn solve_batch(
        &self,
        leaves: &[(LeafEnvironment, LeafParameters)],
    ) -> Vec<LeafResult<LeafGasExchangeResult>> {
        leaves
            .par_iter()
            .map(|(environment, leaf)| self.solve_leaf(environment, leaf))
            .collect()
    }

    /// Fixed point iteration between assimilation, stomatal conductance and
    /// internal CO2 at a fixed leaf temperature.
    fn converge(
        &self,
        model: &dyn NetAssimilationModel,
        environment: &LeafEnvironment,
        leaf: &LeafParameters,
        initial_ci_partial_pressure: FloatValue,
        max_iterations: usize,
    ) -> LeafResult<Convergence> {
        let pressure = environment.atmospheric_pressure;
        let ambient_co2 = environment.ambient_co2();
        let ambient_co2_partial_pressure = environment.ambient_co2_partial_pressure();

        let mut ci_partial_pressure = initial_ci_partial_pressure;
        let mut previous = 0.0;
        let mut state = Convergence {
            net_assimilation: 0.0,
            internal_co2: ci_partial_pressure / pressure * 1e6,
            stomatal_conductance: stomatal_conductance(
                0.0,
                ambient_co2,
                environment.relative_humidity,
                leaf,
            ),
            iterations: 0,
            converged: false,
        };

        while state.iterations < max_iterations {
            let ci = ci_partial_pressure / pressure * 1e6;
            let assimilation = model.net_assimilation(ci)?;
            let gs = stomatal_conductance(
                assimilation,
                ambient_co2,
                environment.relative_humidity,
                leaf,
            );

            ci_partial_pressure = ambient_co2_partial_pressure
                - assimilation * 1e-6 * WATER_TO_CO2_DIFFUSIVITY_RATIO * pressure / gs;
            if ci_partial_pressure < 0.0 {
                ci_partial_pressure = MINIMUM_INTERNAL_CO2_PARTIAL_PRESSURE;
            }

            state.net_assimilation = assimilation;
            state.internal_co2 = ci;
            state.stomatal_conductance = gs;
            state.iterations += 1;
            trace!(
                iteration = state.iterations,
                ci,
                assimilation,
                gs,
                "assimilation-conductance loop"
            );

            if (assimilation - previous).abs() < self.options.assimilation_tolerance {
                state.converged = true;
                break;
            }
            previous = assimilation;
        }

        if !state.converged {
            warn!(
                iterations = state.iterations,
                net_assimilation = state.net_assimilation,
                "Assimilation did not converge; returning the last iterate"
            );
        }
        Ok(state)
    }
}

impl LeafGasExchange {
    fn environment_from_state(input_state: &InputState) -> LeafResult<LeafEnvironment> {
        Ok(LeafEnvironment {
            incident_ppfd: input_state.get(VAR_INCIDENT_PPFD.name)?,
            absorbed_shortwave: input_state.get(VAR_ABSORBED_SHORTWAVE.name)?,
            air_temperature: input_state.get(VAR_AIR_TEMPERATURE.name)?,
            relative_humidity: input_state.get(VAR_RELATIVE_HUMIDITY.name)?,
            wind_speed: input_state.get(VAR_WIND_SPEED.name)?,
            wind_speed_height: input_state.get(VAR_WIND_SPEED_HEIGHT.name)?,
            canopy_height: input_state.get(VAR_CANOPY_HEIGHT.name)?,
            atmospheric_co2: input_state.get(VAR_ATMOSPHERIC_CO2.name)?,
            atmospheric_pressure: input_state.get(VAR_ATMOSPHERIC_PRESSURE.name)?,
            atmospheric_o2: input_state.get(VAR_ATMOSPHERIC_O2.name)?,
            specific_heat_of_air: input_state.get(VAR_SPECIFIC_HEAT_OF_AIR.name)?,
        })
    }

    fn leaf_from_state(input_state: &InputState) -> LeafResult<LeafParameters> {
        let approach =
            WaterStressApproach::try_from(input_state.get(VAR_WATER_STRESS_APPROACH.name)?)?;

        Ok(LeafParameters {
            vcmax: input_state.get(VAR_VCMAX.name)?,
            jmax: input_state.get(VAR_JMAX.name)?,
            tpu_rate_max: input_state.get(VAR_TPU_RATE_MAX.name)?,
            dark_respiration: input_state.get(VAR_DARK_RESPIRATION.name)?,
            ball_berry_intercept: input_state.get(VAR_BALL_BERRY_INTERCEPT.name)?,
            ball_berry_slope: input_state.get(VAR_BALL_BERRY_SLOPE.name)?,
            minimum_stomatal_conductance: input_state.get(VAR_MINIMUM_STOMATAL_CONDUCTANCE.name)?,
            minimum_boundary_layer_conductance: input_state
                .get(VAR_MINIMUM_BOUNDARY_LAYER_CONDUCTANCE.name)?,
            water_stress_factor: input_state.get(VAR_WATER_STRESS_FACTOR.name)?,
            water_stress_approach: approach,
            electrons_per_carboxylation: input_state.get(VAR_ELECTRONS_PER_CARBOXYLATION.name)?,
            electrons_per_oxygenation: input_state.get(VAR_ELECTRONS_PER_OXYGENATION.name)?,
            theta: input_state.get(VAR_CURVATURE.name)?,
            ..LeafParameters::default()
        })
    }
}

#[typetag::serde]
impl Component for LeafGasExchange {
    fn definitions(&self) -> Vec<RequirementDefinition> {
        LEAF_INPUTS
            .iter()
            .map(|variable| RequirementDefinition::input(variable))
            .chain(
                LEAF_OUTPUTS
                    .iter()
                    .map(|variable| RequirementDefinition::output(variable)),
            )
            .collect()
    }

    fn solve(&self, input_state: &InputState) -> LeafResult<OutputState> {
        let environment = Self::environment_from_state(input_state)?;
        let leaf = Self::leaf_from_state(input_state)?;
        let result = self.solve_leaf(&environment, &leaf)?;

        Ok(OutputState::from([
            (VAR_NET_ASSIMILATION.name.to_string(), result.net_assimilation),
            (VAR_GROSS_ASSIMILATION.name.to_string(), result.gross_assimilation),
            (VAR_INTERNAL_CO2.name.to_string(), result.internal_co2),
            (VAR_STOMATAL_CONDUCTANCE.name.to_string(), result.stomatal_conductance),
            (VAR_TRANSPIRATION.name.to_string(), result.transpiration),
            (VAR_TRANSPIRATION_PENMAN.name.to_string(), result.transpiration_penman),
            (
                VAR_TRANSPIRATION_PRIESTLEY_TAYLOR.name.to_string(),
                result.transpiration_priestley_taylor,
            ),
            (VAR_LEAF_TEMPERATURE.name.to_string(), result.leaf_temperature),
            (
                VAR_BOUNDARY_LAYER_CONDUCTANCE.name.to_string(),
                result.boundary_layer_conductance,
            ),
            (VAR_SOLVER_ITERATIONS.name.to_string(), result.iterations as FloatValue),
        ]))
    }
}
