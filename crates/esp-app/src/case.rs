//! Well case files: everything one sizing request needs.

use crate::error::{AppError, AppResult};
use crate::scenario::{ScenarioKey, ScenarioOverrides};
use esp_components::{RoughnessPreset, tubing_by_name};
use esp_electrical::{CableLayout, ThermalProfile};
use esp_inflow::WellInflowSpec;
use esp_solver::InstallationSpec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Frequency used when a case gives none (Hz).
pub const DEFAULT_FREQUENCY_HZ: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PumpSelection {
    pub pump_id: Option<String>,
    pub stages: u32,
    pub frequency_hz: Option<f64>,
    pub point_count: usize,
}

impl Default for PumpSelection {
    fn default() -> Self {
        Self {
            pump_id: None,
            stages: 1,
            frequency_hz: None,
            point_count: esp_components::DEFAULT_PUMP_POINTS,
        }
    }
}

impl PumpSelection {
    /// Operating frequency, falling back to 50 Hz for missing or non-positive values.
    pub fn base_frequency(&self) -> f64 {
        positive_frequency(self.frequency_hz).unwrap_or(DEFAULT_FREQUENCY_HZ)
    }
}

pub(crate) fn positive_frequency(value: Option<f64>) -> Option<f64> {
    value.filter(|f| f.is_finite() && *f > 0.0)
}

/// Field estimates consumed only by the design checks and gas screening.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignInputs {
    pub annular_velocity_m_s: Option<f64>,
    pub bottomhole_temperature_c: Option<f64>,
    pub cable_length_m: Option<f64>,
    pub cable_resistance_ohm_per_km: Option<f64>,
    pub estimated_current_a: Option<f64>,
    pub supply_voltage_v: Option<f64>,
    pub gas_oil_ratio: Option<f64>,
    /// Overrides the intake pressure found at the operating point.
    pub intake_pressure_bar: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WellCase {
    pub name: Option<String>,
    pub well: WellInflowSpec,
    pub installation: InstallationSpec,
    /// Named API tubing size; replaces `installation.tubing_id_mm` when set.
    pub tubing_size: Option<String>,
    /// Replaces `installation.tubing_roughness_mm` when set.
    pub tubing_roughness: Option<RoughnessPreset>,
    pub pump: PumpSelection,
    pub motor_id: Option<String>,
    pub cable: CableLayout,
    pub thermal: ThermalProfile,
    pub scenarios: BTreeMap<ScenarioKey, ScenarioOverrides>,
    pub design: DesignInputs,
}

impl WellCase {
    /// Installation with tubing size and roughness presets applied.
    ///
    /// # Errors
    /// Returns error for an unknown tubing size name.
    pub fn resolved_installation(&self) -> AppResult<InstallationSpec> {
        let mut inst = self.installation.clone();
        if let Some(name) = &self.tubing_size {
            let size = tubing_by_name(name)
                .ok_or_else(|| AppError::InvalidInput(format!("unknown tubing size '{name}'")))?;
            inst.tubing_id_mm = size.id_mm;
        }
        if let Some(preset) = self.tubing_roughness {
            inst.tubing_roughness_mm = preset.roughness_mm();
        }
        Ok(inst)
    }
}

/// Load a case from a YAML file.
pub fn load_case_yaml(path: &Path) -> AppResult<WellCase> {
    let content = read(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Load a case from a JSON file.
pub fn load_case_json(path: &Path) -> AppResult<WellCase> {
    let content = read(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load by extension: `.yaml`/`.yml` or `.json`.
pub fn load_case(path: &Path) -> AppResult<WellCase> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "yaml" | "yml" => load_case_yaml(path),
        "json" => load_case_json(path),
        other => Err(AppError::UnsupportedFormat(other.to_string())),
    }
}

fn read(path: &Path) -> AppResult<String> {
    std::fs::read_to_string(path).map_err(|e| AppError::CaseFileRead {
        path: path.to_path_buf(),
        source: e,
    })
}
