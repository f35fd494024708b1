//! Fluid property errors.

use esp_core::EspError;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during fluid property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical values (negative density, gravity, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Value out of valid range.
    #[error("Value out of range for {what}: {value}")]
    OutOfRange { what: &'static str, value: f64 },
}

impl From<EspError> for FluidError {
    fn from(err: EspError) -> Self {
        match err {
            EspError::NonFinite { what, .. } => FluidError::NonPhysical { what },
            EspError::InvalidArg { what } => FluidError::NonPhysical { what },
            EspError::Invariant { what } => FluidError::NonPhysical { what },
        }
    }
}

impl From<FluidError> for EspError {
    fn from(err: FluidError) -> Self {
        match err {
            FluidError::NonPhysical { what } => EspError::Invariant { what },
            FluidError::OutOfRange { what, .. } => EspError::InvalidArg { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FluidError::OutOfRange {
            what: "water cut",
            value: 120.0,
        };
        assert!(err.to_string().contains("water cut"));
        assert!(err.to_string().contains("120"));
    }

    #[test]
    fn error_to_core_error() {
        let fluid_err = FluidError::NonPhysical { what: "density" };
        let core_err: EspError = fluid_err.into();
        assert!(matches!(core_err, EspError::Invariant { .. }));
    }
}
