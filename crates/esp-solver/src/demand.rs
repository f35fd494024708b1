//! Hydraulic demand curve: head the pump must add at each inflow rate.
//!
//! ```text
//! TDH = depth + Δp_friction/grad + p_surface/grad − PIP/grad
//! PIP = pwf + p_casing
//! ```
//!
//! Every demand point reuses the flow of the matching inflow point, so the two
//! curves share one flow axis.

use crate::error::{SolverError, SolverResult};
use crate::installation::InstallationSpec;
use esp_core::series::interpolate;
use esp_fluids::FluidProperties;
use esp_inflow::InflowCurve;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemandPoint {
    pub flow_m3d: f64,
    pub required_head_m: f64,
    pub intake_pressure_bar: f64,
    pub pwf_bar: f64,
    pub friction_loss_bar: f64,
    pub fluid_level_m: f64,
    pub submergence_m: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandCurve {
    pub points: Vec<DemandPoint>,
    pub gradient_bar_per_m: f64,
    pub setting_depth_m: f64,
    pub surface_pressure_bar: f64,
    pub casing_pressure_bar: f64,
}

impl DemandCurve {
    pub fn flows(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.flow_m3d).collect()
    }

    pub fn heads(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.required_head_m).collect()
    }

    /// Interpolate one field of the curve at flow `q`.
    pub fn value_at(&self, q: f64, field: impl Fn(&DemandPoint) -> f64) -> Option<f64> {
        let xs = self.flows();
        let ys: Vec<f64> = self.points.iter().map(field).collect();
        interpolate(&xs, &ys, q)
    }

    pub fn head_at(&self, q: f64) -> Option<f64> {
        self.value_at(q, |p| p.required_head_m)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Build the demand curve on the inflow curve's flow axis.
///
/// # Errors
/// Returns error for an invalid installation or tubing, or a non-positive
/// fluid gradient.
pub fn compute_demand(
    installation: &InstallationSpec,
    fluid: &FluidProperties,
    inflow: &InflowCurve,
) -> SolverResult<DemandCurve> {
    installation.validate()?;
    let grad = fluid.gradient_bar_per_m;
    if !(grad.is_finite() && grad > 0.0) {
        return Err(SolverError::InvalidInstallation {
            what: "fluid gradient must be positive",
        });
    }
    let tubing = installation.tubing()?;
    let depth = installation.setting_depth_m;
    let surface_head = installation.surface_pressure_bar / grad;

    let points = inflow
        .points
        .iter()
        .map(|ip| -> SolverResult<DemandPoint> {
            let intake = ip.pwf_bar + installation.casing_pressure_bar;
            let friction = tubing.pressure_drop_bar(ip.flow_m3d, fluid)?;
            Ok(DemandPoint {
                flow_m3d: ip.flow_m3d,
                required_head_m: depth + friction / grad + surface_head - intake / grad,
                intake_pressure_bar: intake,
                pwf_bar: ip.pwf_bar,
                friction_loss_bar: friction,
                fluid_level_m: ip.fluid_level_m,
                submergence_m: (depth - ip.fluid_level_m).max(0.0),
            })
        })
        .collect::<SolverResult<Vec<_>>>()?;

    tracing::debug!(
        points = points.len(),
        gradient = grad,
        depth,
        "demand curve computed"
    );

    Ok(DemandCurve {
        points,
        gradient_bar_per_m: grad,
        setting_depth_m: depth,
        surface_pressure_bar: installation.surface_pressure_bar,
        casing_pressure_bar: installation.casing_pressure_bar,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use esp_inflow::{WellInflowSpec, compute_inflow};

    fn setup() -> (InstallationSpec, FluidProperties, InflowCurve) {
        let spec = WellInflowSpec::default();
        let fluid = FluidProperties::from_spec(&spec.fluid).unwrap();
        let inflow = compute_inflow(&spec).unwrap();
        (InstallationSpec::default(), fluid, inflow)
    }

    #[test]
    fn index_aligned_with_inflow() {
        let (inst, fluid, inflow) = setup();
        let demand = compute_demand(&inst, &fluid, &inflow).unwrap();
        assert_eq!(demand.points.len(), inflow.points.len());
        for (d, i) in demand.points.iter().zip(&inflow.points) {
            assert_eq!(d.flow_m3d, i.flow_m3d);
            assert_eq!(d.pwf_bar, i.pwf_bar);
        }
    }

    #[test]
    fn zero_flow_head_is_static() {
        let (inst, fluid, inflow) = setup();
        let demand = compute_demand(&inst, &fluid, &inflow).unwrap();
        let first = demand.points[0];
        let grad = fluid.gradient_bar_per_m;
        let expected = 1500.0 + 10.0 / grad - 150.0 / grad;
        assert_eq!(first.friction_loss_bar, 0.0);
        assert!((first.required_head_m - expected).abs() < 1e-9);
    }

    #[test]
    fn casing_pressure_raises_intake() {
        let (mut inst, fluid, inflow) = setup();
        let base = compute_demand(&inst, &fluid, &inflow).unwrap();
        inst.casing_pressure_bar = 5.0;
        let with_casing = compute_demand(&inst, &fluid, &inflow).unwrap();
        let dh = base.points[3].required_head_m - with_casing.points[3].required_head_m;
        assert!((dh - 5.0 / fluid.gradient_bar_per_m).abs() < 1e-9);
    }

    #[test]
    fn submergence_clamped() {
        let (mut inst, fluid, inflow) = setup();
        inst.setting_depth_m = 100.0;
        let demand = compute_demand(&inst, &fluid, &inflow).unwrap();
        assert!(demand.points.iter().all(|p| p.submergence_m >= 0.0));
        assert_eq!(demand.points.last().unwrap().submergence_m, 0.0);
    }
}
