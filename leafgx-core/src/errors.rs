use thiserror::Error;

/// Error type for invalid inputs and failed collaborators.
///
/// Physical-validity clamps (CO2 floors, conductance floors, the leaf
/// temperature offset clamp) are never reported through this type; they are
/// applied silently by the components.
#[derive(Error, Debug)]
pub enum LeafError {
    #[error("Relative humidity must lie in [0, 1], got {0}")]
    RelativeHumidityOutOfRange(f64),
    #[error("Stomatal conductance must be positive for the energy balance, got {0} mol / m^2 / s")]
    NonPositiveStomatalConductance(f64),
    #[error("Saturation water vapour density is negative ({0} kg / m^3)")]
    NegativeVaporDensity(f64),
    #[error("Boundary layer conductance is negative ({0} m / s)")]
    NegativeBoundaryLayerConductance(f64),
    #[error("External assimilation model failed: {0}")]
    ExternalModel(String),
    #[error("The C3 external variant was selected but no external assimilation model is attached")]
    MissingExternalModel,
    #[error("Biochemical variant `{0}` is not implemented")]
    NotImplemented(String),
    #[error("Required input `{0}` is missing from the input state")]
    MissingInput(String),
    #[error("Invalid water stress approach {0}. Expected 0 (scale assimilation) or 1 (interpolate conductance)")]
    InvalidWaterStressApproach(f64),
    #[error("Could not parse configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Convenience type for `Result<T, LeafError>`.
pub type LeafResult<T> = Result<T, LeafError>;
