//! Nameplate, cable and thermal inputs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotorType {
    #[default]
    #[serde(alias = "IM", alias = "induction_motor")]
    Induction,
    /// Permanent magnet motors run at twice the frequency effect.
    #[serde(alias = "PM", alias = "pm")]
    PermanentMagnet,
}

/// Motor nameplate. Efficiency and power factor may be given as fractions or
/// percents; values above 1.5 are read as percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotorSpecs {
    pub id: String,
    #[serde(default)]
    pub hp_nominal: Option<f64>,
    #[serde(default)]
    pub voltage_nominal_v: Option<f64>,
    #[serde(default)]
    pub frequency_nominal_hz: Option<f64>,
    #[serde(default)]
    pub efficiency: Option<f64>,
    #[serde(default)]
    pub power_factor: Option<f64>,
    #[serde(default)]
    pub motor_type: MotorType,
    #[serde(default)]
    pub rated_current_a: Option<f64>,
    #[serde(default)]
    pub max_temperature_c: Option<f64>,
    #[serde(default)]
    pub rpm: Option<f64>,
    /// Shaft diameter; values above 50 are millimetres, otherwise metres.
    #[serde(default)]
    pub shaft_diameter: Option<f64>,
    #[serde(default = "default_true")]
    pub is_complete: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CableSpecs {
    pub id: String,
    pub resistance_ohm_per_km_20c: f64,
    /// Linear temperature coefficient (1/°C)
    pub temp_coefficient_per_c: f64,
}

/// Three cable runs: motor lead extension alongside the pump, the downhole
/// run up to surface, and the surface run to the drive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CableLayout {
    pub mle_cable_id: Option<String>,
    pub mle_length_m: Option<f64>,
    pub downhole_cable_id: Option<String>,
    pub surface_cable_id: Option<String>,
    pub surface_length_m: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThermalProfile {
    /// Temperature at the top of the geothermal gradient (°C)
    pub surface_gradient_temp_c: f64,
    /// °C per metre of depth
    pub geothermal_gradient_c_per_m: f64,
    pub surface_ambient_c: f64,
}

impl Default for ThermalProfile {
    fn default() -> Self {
        Self {
            surface_gradient_temp_c: 15.0,
            geothermal_gradient_c_per_m: 0.0425,
            surface_ambient_c: 25.0,
        }
    }
}

impl ThermalProfile {
    pub fn temperature_at(&self, depth_m: f64) -> f64 {
        self.surface_gradient_temp_c + self.geothermal_gradient_c_per_m * depth_m
    }
}

/// Well data the cascade needs beyond the operating point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WellContext {
    pub setting_depth_m: f64,
    pub specific_gravity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motor_type_aliases() {
        let pm: MotorType = serde_json::from_str("\"PM\"").unwrap();
        assert_eq!(pm, MotorType::PermanentMagnet);
        let im: MotorType = serde_json::from_str("\"induction\"").unwrap();
        assert_eq!(im, MotorType::Induction);
    }

    #[test]
    fn motor_defaults() {
        let m: MotorSpecs = serde_json::from_str(r#"{ "id": "M1" }"#).unwrap();
        assert!(m.is_complete);
        assert_eq!(m.motor_type, MotorType::Induction);
        assert!(m.hp_nominal.is_none());
    }

    #[test]
    fn intake_temperature() {
        let t = ThermalProfile::default();
        assert!((t.temperature_at(2000.0) - 100.0).abs() < 1e-9);
    }
}
