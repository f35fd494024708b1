//! Error types for solver operations.

use esp_components::ComponentError;
use esp_core::error::EspError;
use esp_fluids::FluidError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid installation: {what}")]
    InvalidInstallation { what: &'static str },

    #[error("Component error: {0}")]
    Component(#[from] ComponentError),

    #[error("Fluid error: {0}")]
    Fluid(#[from] FluidError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<EspError> for SolverError {
    fn from(e: EspError) -> Self {
        match e {
            EspError::NonFinite { what, .. }
            | EspError::InvalidArg { what }
            | EspError::Invariant { what } => SolverError::InvalidInstallation { what },
        }
    }
}

impl From<SolverError> for EspError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::InvalidInstallation { what } => EspError::InvalidArg { what },
            SolverError::Component(c) => c.into(),
            SolverError::Fluid(f) => f.into(),
        }
    }
}
