//! Error types for component operations.

use esp_core::error::EspError;
use esp_fluids::FluidError;
use thiserror::Error;

/// Errors that can occur during component calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Fluid error: {0}")]
    Fluid(#[from] FluidError),
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl From<ComponentError> for EspError {
    fn from(e: ComponentError) -> Self {
        match e {
            ComponentError::NonPhysical { what } => EspError::Invariant { what },
            ComponentError::InvalidArg { what } => EspError::InvalidArg { what },
            ComponentError::Fluid(f) => f.into(),
        }
    }
}
