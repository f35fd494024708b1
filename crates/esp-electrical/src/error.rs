//! Error types for the electrical cascade.

use esp_core::error::EspError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ElectricalError {
    #[error("Pump shaft power missing or not positive")]
    MissingShaftPower,

    #[error("Invalid or missing motor efficiency")]
    InvalidMotorEfficiency,

    #[error("Invalid or missing motor power factor")]
    InvalidPowerFactor,

    #[error("Missing motor nameplate value: {what}")]
    MissingNameplate { what: &'static str },

    #[error("Missing cable parameters: {}", .missing.join(", "))]
    MissingCableParameters { missing: Vec<&'static str> },

    #[error("No specification found for cable '{id}'")]
    UnknownCable { id: String },

    #[error("Invalid frequency: {value}")]
    InvalidFrequency { value: f64 },
}

pub type ElectricalResult<T> = Result<T, ElectricalError>;

impl From<ElectricalError> for EspError {
    fn from(e: ElectricalError) -> Self {
        match e {
            ElectricalError::MissingShaftPower => EspError::InvalidArg {
                what: "shaft power",
            },
            ElectricalError::InvalidMotorEfficiency => EspError::InvalidArg {
                what: "motor efficiency",
            },
            ElectricalError::InvalidPowerFactor => EspError::InvalidArg {
                what: "motor power factor",
            },
            ElectricalError::MissingNameplate { what } => EspError::InvalidArg { what },
            ElectricalError::MissingCableParameters { .. } => EspError::InvalidArg {
                what: "cable parameters",
            },
            ElectricalError::UnknownCable { .. } => EspError::InvalidArg { what: "cable id" },
            ElectricalError::InvalidFrequency { .. } => EspError::InvalidArg { what: "frequency" },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cable_parameters_are_listed() {
        let err = ElectricalError::MissingCableParameters {
            missing: vec!["mle_cable_id", "surface_length_m"],
        };
        assert_eq!(
            err.to_string(),
            "Missing cable parameters: mle_cable_id, surface_length_m"
        );
    }
}
