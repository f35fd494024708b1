//! Catalog validation.

use crate::schema::{CATALOG_VERSION, CatalogFile};
use esp_components::ComponentError;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: &'static str },

    #[error("Empty ID in {context}")]
    EmptyId { context: &'static str },

    #[error("Invalid value: {id}.{field} = {value} ({reason})")]
    InvalidValue {
        id: String,
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid pump {id}: {source}")]
    Pump { id: String, source: ComponentError },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn unique<'a>(
    ids: impl Iterator<Item = &'a str>,
    context: &'static str,
) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyId { context });
        }
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateId {
                id: id.to_string(),
                context,
            });
        }
    }
    Ok(())
}

fn positive_if_present(
    id: &str,
    field: &'static str,
    value: Option<f64>,
) -> Result<(), ValidationError> {
    match value {
        Some(v) if !(v.is_finite() && v > 0.0) => Err(ValidationError::InvalidValue {
            id: id.to_string(),
            field,
            value: v,
            reason: "must be positive",
        }),
        _ => Ok(()),
    }
}

pub fn validate_catalog(file: &CatalogFile) -> Result<(), ValidationError> {
    if file.version > CATALOG_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    unique(file.pumps.iter().map(|p| p.id.as_str()), "pumps")?;
    unique(file.motors.iter().map(|m| m.id.as_str()), "motors")?;
    unique(file.cables.iter().map(|c| c.id.as_str()), "cables")?;

    for pump in &file.pumps {
        pump.validate().map_err(|source| ValidationError::Pump {
            id: pump.id.clone(),
            source,
        })?;
    }

    for motor in &file.motors {
        positive_if_present(&motor.id, "hp_nominal", motor.hp_nominal)?;
        positive_if_present(&motor.id, "voltage_nominal_v", motor.voltage_nominal_v)?;
        positive_if_present(&motor.id, "frequency_nominal_hz", motor.frequency_nominal_hz)?;
        positive_if_present(&motor.id, "efficiency", motor.efficiency)?;
        positive_if_present(&motor.id, "power_factor", motor.power_factor)?;
        positive_if_present(&motor.id, "rated_current_a", motor.rated_current_a)?;
        positive_if_present(&motor.id, "shaft_diameter", motor.shaft_diameter)?;
        for (field, value) in [("efficiency", motor.efficiency), ("power_factor", motor.power_factor)] {
            if let Some(v) = value.filter(|v| *v > 100.0) {
                return Err(ValidationError::InvalidValue {
                    id: motor.id.clone(),
                    field,
                    value: v,
                    reason: "fraction or percent cannot exceed 100",
                });
            }
        }
    }

    for cable in &file.cables {
        let r = cable.resistance_ohm_per_km_20c;
        if !(r.is_finite() && r >= 0.0) {
            return Err(ValidationError::InvalidValue {
                id: cable.id.clone(),
                field: "resistance_ohm_per_km_20c",
                value: r,
                reason: "must be finite and non-negative",
            });
        }
        if !cable.temp_coefficient_per_c.is_finite() {
            return Err(ValidationError::InvalidValue {
                id: cable.id.clone(),
                field: "temp_coefficient_per_c",
                value: cable.temp_coefficient_per_c,
                reason: "must be finite",
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use esp_electrical::{CableSpecs, MotorSpecs, MotorType};

    fn motor(id: &str) -> MotorSpecs {
        MotorSpecs {
            id: id.into(),
            hp_nominal: Some(100.0),
            voltage_nominal_v: Some(2000.0),
            frequency_nominal_hz: Some(60.0),
            efficiency: Some(0.85),
            power_factor: Some(0.8),
            motor_type: MotorType::Induction,
            rated_current_a: None,
            max_temperature_c: None,
            rpm: None,
            shaft_diameter: None,
            is_complete: true,
        }
    }

    #[test]
    fn duplicate_motor_id() {
        let file = CatalogFile {
            motors: vec![motor("M1"), motor("M1")],
            ..CatalogFile::default()
        };
        assert!(matches!(
            validate_catalog(&file),
            Err(ValidationError::DuplicateId { context: "motors", .. })
        ));
    }

    #[test]
    fn negative_voltage() {
        let mut m = motor("M1");
        m.voltage_nominal_v = Some(-1.0);
        let file = CatalogFile {
            motors: vec![m],
            ..CatalogFile::default()
        };
        assert!(matches!(
            validate_catalog(&file),
            Err(ValidationError::InvalidValue {
                field: "voltage_nominal_v",
                ..
            })
        ));
    }

    #[test]
    fn nan_cable_resistance() {
        let file = CatalogFile {
            cables: vec![CableSpecs {
                id: "C".into(),
                resistance_ohm_per_km_20c: f64::NAN,
                temp_coefficient_per_c: 0.004,
            }],
            ..CatalogFile::default()
        };
        assert!(validate_catalog(&file).is_err());
    }

    #[test]
    fn future_version_rejected() {
        let file = CatalogFile {
            version: CATALOG_VERSION + 1,
            ..CatalogFile::default()
        };
        assert!(matches!(
            validate_catalog(&file),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }
}
