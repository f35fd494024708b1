//! Well inflow input description.

use esp_fluids::FluidSpec;
use serde::{Deserialize, Serialize};

/// Inflow correlation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IprMethod {
    #[default]
    Linear,
    Vogel,
    Fetkovich,
    Darcy,
}

impl IprMethod {
    pub fn label(self) -> &'static str {
        match self {
            IprMethod::Linear => "Linear (PI)",
            IprMethod::Vogel => "Vogel (composite)",
            IprMethod::Fetkovich => "Fetkovich",
            IprMethod::Darcy => "Darcy (radial)",
        }
    }
}

/// Measured well test: stabilized rate at a flowing bottomhole pressure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestPoint {
    pub flow_m3d: f64,
    pub pwf_bar: f64,
}

/// Reservoir block for the Darcy radial correlation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DarcyParams {
    pub permeability_md: f64,
    pub thickness_m: f64,
    pub drainage_radius_m: f64,
    pub wellbore_radius_m: f64,
    pub formation_volume_factor: f64,
    pub skin: f64,
}

impl Default for DarcyParams {
    fn default() -> Self {
        Self {
            permeability_md: 100.0,
            thickness_m: 15.0,
            drainage_radius_m: 300.0,
            wellbore_radius_m: 0.15,
            formation_volume_factor: 1.2,
            skin: 0.0,
        }
    }
}

/// Everything needed to build an inflow curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WellInflowSpec {
    pub method: IprMethod,
    pub reservoir_pressure_bar: f64,
    /// Defaults to 80% of reservoir pressure when absent.
    pub bubble_point_bar: Option<f64>,
    #[serde(flatten)]
    pub fluid: FluidSpec,
    pub test_point: Option<TestPoint>,
    /// m³/d/bar
    pub productivity_index: Option<f64>,
    pub fetkovich_n: f64,
    pub darcy: DarcyParams,
    pub n_points: usize,
}

pub const DEFAULT_PRODUCTIVITY_INDEX: f64 = 5.0;
pub const DEFAULT_POINT_COUNT: usize = 50;

impl Default for WellInflowSpec {
    fn default() -> Self {
        Self {
            method: IprMethod::default(),
            reservoir_pressure_bar: 150.0,
            bubble_point_bar: None,
            fluid: FluidSpec::default(),
            test_point: None,
            productivity_index: None,
            fetkovich_n: 1.0,
            darcy: DarcyParams::default(),
            n_points: DEFAULT_POINT_COUNT,
        }
    }
}

impl WellInflowSpec {
    pub fn bubble_point(&self) -> f64 {
        self.bubble_point_bar
            .unwrap_or(0.8 * self.reservoir_pressure_bar)
    }

    pub fn productivity_index_or_default(&self) -> f64 {
        self.productivity_index
            .unwrap_or(DEFAULT_PRODUCTIVITY_INDEX)
    }

    /// Test point usable for calibration: positive rate, pressure in (0, pr).
    pub fn usable_test_point(&self) -> Option<TestPoint> {
        self.test_point.filter(|t| {
            t.flow_m3d.is_finite()
                && t.pwf_bar.is_finite()
                && t.flow_m3d > 0.0
                && t.pwf_bar >= 0.0
                && t.pwf_bar < self.reservoir_pressure_bar
        })
    }
}
