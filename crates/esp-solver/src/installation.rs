//! Pump installation geometry and boundary pressures.

use crate::error::{SolverError, SolverResult};
use esp_components::Tubing;
use esp_core::numeric::ensure_finite;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallationSpec {
    /// Pump setting depth (m). Also the tubing length.
    pub setting_depth_m: f64,
    /// Dynamic fluid level below surface (m), used by the static system curve.
    pub dynamic_fluid_level_m: f64,
    /// Target wellhead tubing pressure (bar)
    pub surface_pressure_bar: f64,
    pub casing_pressure_bar: f64,
    pub tubing_id_mm: f64,
    pub tubing_roughness_mm: f64,
}

impl Default for InstallationSpec {
    fn default() -> Self {
        Self {
            setting_depth_m: 1500.0,
            dynamic_fluid_level_m: 500.0,
            surface_pressure_bar: 10.0,
            casing_pressure_bar: 0.0,
            tubing_id_mm: 62.0,
            tubing_roughness_mm: 0.046,
        }
    }
}

impl InstallationSpec {
    /// # Errors
    /// Returns error for non-finite values or a non-positive setting depth.
    pub fn validate(&self) -> SolverResult<()> {
        ensure_finite(self.setting_depth_m, "setting depth")?;
        ensure_finite(self.dynamic_fluid_level_m, "dynamic fluid level")?;
        ensure_finite(self.surface_pressure_bar, "surface pressure")?;
        ensure_finite(self.casing_pressure_bar, "casing pressure")?;
        if self.setting_depth_m <= 0.0 {
            return Err(SolverError::InvalidInstallation {
                what: "setting depth must be positive",
            });
        }
        Ok(())
    }

    /// Tubing string from surface down to the pump.
    pub fn tubing(&self) -> SolverResult<Tubing> {
        Ok(Tubing::from_field_units(
            self.setting_depth_m,
            self.tubing_id_mm,
            self.tubing_roughness_mm,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tubing_length_is_setting_depth() {
        let inst = InstallationSpec::default();
        let t = inst.tubing().unwrap();
        assert!((t.length.value - 1500.0).abs() < 1e-9);
        assert!((t.diameter_mm() - 62.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_zero_depth() {
        let inst = InstallationSpec {
            setting_depth_m: 0.0,
            ..InstallationSpec::default()
        };
        assert!(inst.validate().is_err());
    }
}
