//! Error types for pump evaluations.

use orc_core::CoreError;
use orc_fluids::FluidError;
use thiserror::Error;

/// Structural failures that abort an evaluation.
///
/// Infeasible operating points and out-of-bounds exhaust states are not
/// errors: they are reported through [`Flag`](crate::Flag) on a complete result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PumpError {
    #[error("Property lookup failed: {0}")]
    PropertyLookup(#[from] FluidError),

    #[error(
        "Invalid model type '{tag}' (expected ConstantEfficiency, PolynomialEfficiency or SemiEmpirical)"
    )]
    InvalidModelType { tag: String },

    #[error("Invalid configuration: {what}")]
    InvalidConfig { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Could not read configuration: {message}")]
    Parse { message: String },
}

pub type PumpResult<T> = Result<T, PumpError>;

impl From<CoreError> for PumpError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::NonFinite { what, .. }
            | CoreError::NotPositive { what, .. }
            | CoreError::InvalidArg { what } => PumpError::InvalidArg { what },
        }
    }
}

impl From<serde_yaml::Error> for PumpError {
    fn from(e: serde_yaml::Error) -> Self {
        PumpError::Parse {
            message: e.to_string(),
        }
    }
}
