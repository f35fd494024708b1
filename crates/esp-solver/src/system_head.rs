//! Static system head curve from the dynamic fluid level.
//!
//! Independent of the inflow model:
//! `TDH = (depth − level) + (p_surface − p_casing)/grad + Δp_friction/grad`.

use crate::error::{SolverError, SolverResult};
use crate::installation::InstallationSpec;
use esp_core::series::linspace;
use esp_fluids::FluidProperties;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemHeadPoint {
    pub flow_m3d: f64,
    pub tdh_m: f64,
    pub friction_loss_bar: f64,
}

/// TDH at `n_points + 1` flows evenly spaced on `[0, q_max]`.
pub fn compute_system_head(
    installation: &InstallationSpec,
    fluid: &FluidProperties,
    q_max: f64,
    n_points: usize,
) -> SolverResult<Vec<SystemHeadPoint>> {
    installation.validate()?;
    if !(q_max.is_finite() && q_max > 0.0) || n_points == 0 {
        return Err(SolverError::InvalidInstallation {
            what: "system head curve needs a positive flow range",
        });
    }
    let grad = fluid.gradient_bar_per_m;
    let tubing = installation.tubing()?;
    let lift = installation.setting_depth_m - installation.dynamic_fluid_level_m;
    let pressure_head =
        (installation.surface_pressure_bar - installation.casing_pressure_bar) / grad;

    linspace(0.0, q_max, n_points + 1)
        .into_iter()
        .map(|q| -> SolverResult<SystemHeadPoint> {
            let friction = tubing.pressure_drop_bar(q, fluid)?;
            Ok(SystemHeadPoint {
                flow_m3d: q,
                tdh_m: lift + pressure_head + friction / grad,
                friction_loss_bar: friction,
            })
        })
        .collect()
}
