//! Inflow curve output.

use crate::spec::IprMethod;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InflowPoint {
    pub flow_m3d: f64,
    pub pwf_bar: f64,
    /// Fluid level below the static level, (pr - pwf) / gradient.
    pub fluid_level_m: f64,
}

/// Parameters derived while building the curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InflowParameters {
    pub reservoir_pressure_bar: f64,
    pub bubble_point_bar: f64,
    /// Productivity index above bubble point (m³/d/bar)
    pub productivity_index: f64,
    pub fetkovich_c: Option<f64>,
    pub fetkovich_n: Option<f64>,
    pub gradient_bar_per_m: f64,
    pub specific_gravity: f64,
}

/// Ordered flow/pressure pairs; flow rises as pwf falls. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflowCurve {
    pub method: IprMethod,
    pub label: String,
    pub points: Vec<InflowPoint>,
    pub flow_max_m3d: f64,
    pub parameters: InflowParameters,
}

impl InflowCurve {
    /// Copy with every flow and the absolute open flow multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> InflowCurve {
        InflowCurve {
            method: self.method,
            label: self.label.clone(),
            points: self
                .points
                .iter()
                .map(|p| InflowPoint {
                    flow_m3d: p.flow_m3d * factor,
                    ..*p
                })
                .collect(),
            flow_max_m3d: self.flow_max_m3d * factor,
            parameters: self.parameters,
        }
    }

    pub fn flows(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.flow_m3d).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
