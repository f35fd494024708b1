//! Error types for inflow calculations.

use esp_core::EspError;
use esp_fluids::FluidError;
use thiserror::Error;

pub type InflowResult<T> = Result<T, InflowError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InflowError {
    #[error("Invalid inflow input: {what}")]
    InvalidInflowInput { what: &'static str },

    #[error("Fluid error: {0}")]
    Fluid(#[from] FluidError),
}

impl From<EspError> for InflowError {
    fn from(err: EspError) -> Self {
        match err {
            EspError::NonFinite { what, .. } => InflowError::InvalidInflowInput { what },
            EspError::InvalidArg { what } => InflowError::InvalidInflowInput { what },
            EspError::Invariant { what } => InflowError::InvalidInflowInput { what },
        }
    }
}

impl From<InflowError> for EspError {
    fn from(err: InflowError) -> Self {
        match err {
            InflowError::InvalidInflowInput { what } => EspError::InvalidArg { what },
            InflowError::Fluid(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_become_invalid_input() {
        let err: InflowError = EspError::InvalidArg {
            what: "reservoir pressure",
        }
        .into();
        assert_eq!(
            err,
            InflowError::InvalidInflowInput {
                what: "reservoir pressure"
            }
        );
        assert!(err.to_string().contains("reservoir pressure"));
    }
}
