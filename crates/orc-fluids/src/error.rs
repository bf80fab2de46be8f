//! Property lookup errors.

use crate::property::Property;
use orc_core::CoreError;
use thiserror::Error;

/// Result type for property lookups.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors raised by a [`PropertyProvider`](crate::PropertyProvider).
///
/// Every variant aborts the evaluation that issued the lookup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Fluid identifier not known to the provider.
    #[error("Unknown fluid: {fluid}")]
    UnknownFluid { fluid: String },

    /// The two known properties do not define a state for this provider.
    #[error("Unsupported input pair: ({first}, {second})")]
    UnsupportedInputPair { first: Property, second: Property },

    /// State lies outside the valid region of the correlation.
    #[error("Value out of range for {what}")]
    OutOfRange { what: &'static str },

    /// Non-physical input or output (negative pressure, NaN, ...).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Backend (CoolProp) error.
    #[error("Backend error: {message}")]
    Backend { message: String },
}

impl From<CoreError> for FluidError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, .. } | CoreError::NotPositive { what, .. } => {
                FluidError::NonPhysical { what }
            }
            CoreError::InvalidArg { what } => FluidError::OutOfRange { what },
        }
    }
}
