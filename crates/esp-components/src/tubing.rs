//! Production tubing with Darcy-Weisbach friction.

use crate::common::{EPSILON_FLOW, check_finite};
use crate::error::{ComponentError, ComponentResult};
use esp_core::units::{Area, Length, Pressure, Velocity, bar, m, m3_per_day, mm};
use esp_fluids::FluidProperties;
use serde::{Deserialize, Serialize};
use uom::si::area::square_meter;
use uom::si::length::millimeter;
use uom::si::velocity::meter_per_second;

/// Friction factor used in the laminar/turbulent transition band.
pub const TRANSITION_FRICTION_FACTOR: f64 = 0.032;

/// Tubing string carrying the pump discharge to surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Tubing {
    pub length: Length,
    /// Internal diameter
    pub diameter: Length,
    /// Absolute roughness
    pub roughness: Length,
}

impl Tubing {
    /// # Errors
    /// Returns error for a non-positive diameter, negative roughness or length.
    pub fn new(length: Length, diameter: Length, roughness: Length) -> ComponentResult<Self> {
        check_finite(length.value, "tubing length")?;
        check_finite(diameter.value, "tubing diameter")?;
        check_finite(roughness.value, "tubing roughness")?;
        if diameter.value <= 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "tubing diameter must be positive",
            });
        }
        if roughness.value < 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "tubing roughness cannot be negative",
            });
        }
        if length.value < 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "tubing length cannot be negative",
            });
        }
        Ok(Self {
            length,
            diameter,
            roughness,
        })
    }

    /// Tubing from field units: length m, diameter and roughness mm.
    pub fn from_field_units(length_m: f64, id_mm: f64, roughness_mm: f64) -> ComponentResult<Self> {
        Self::new(m(length_m), mm(id_mm), mm(roughness_mm))
    }

    pub fn flow_area(&self) -> Area {
        let d = self.diameter.value;
        Area::new::<square_meter>(std::f64::consts::PI * d * d / 4.0)
    }

    /// Mean velocity at a flow in m³/d.
    pub fn velocity(&self, flow_m3d: f64) -> Velocity {
        let q = m3_per_day(flow_m3d.max(0.0)).value;
        Velocity::new::<meter_per_second>(q / self.flow_area().value)
    }

    pub fn reynolds(&self, flow_m3d: f64, fluid: &FluidProperties) -> f64 {
        let mu = fluid.viscosity().value;
        if mu <= 0.0 {
            return 0.0;
        }
        fluid.density().value * self.velocity(flow_m3d).value * self.diameter.value / mu
    }

    /// Darcy friction factor: Swamee-Jain above Re 4000, a fixed value in the
    /// transition band, 64/Re when laminar.
    pub fn friction_factor(&self, reynolds: f64) -> f64 {
        if reynolds > 4000.0 {
            let e_d = self.roughness.value / self.diameter.value;
            let a = e_d / 3.7;
            let b = 5.74 / reynolds.powf(0.9);
            0.25 / (a + b).log10().powi(2)
        } else if reynolds > 2300.0 || reynolds <= 0.0 {
            TRANSITION_FRICTION_FACTOR
        } else {
            64.0 / reynolds
        }
    }

    /// Frictional pressure drop over the whole string.
    pub fn pressure_drop(&self, flow_m3d: f64, fluid: &FluidProperties) -> ComponentResult<Pressure> {
        check_finite(flow_m3d, "flow")?;
        if flow_m3d <= EPSILON_FLOW {
            return Ok(bar(0.0));
        }

        let v = self.velocity(flow_m3d).value;
        let re = self.reynolds(flow_m3d, fluid);
        check_finite(re, "Reynolds number")?;

        let f = self.friction_factor(re);
        let rho = fluid.density().value;

        // ΔP = f·(L/D)·ρv²/2
        let dp = f * (self.length.value / self.diameter.value) * 0.5 * rho * v * v;
        check_finite(dp, "friction pressure drop")?;

        use uom::si::pressure::pascal;
        Ok(Pressure::new::<pascal>(dp))
    }

    /// Frictional pressure drop in bar.
    pub fn pressure_drop_bar(&self, flow_m3d: f64, fluid: &FluidProperties) -> ComponentResult<f64> {
        Ok(esp_core::units::to_bar(self.pressure_drop(flow_m3d, fluid)?))
    }

    pub fn diameter_mm(&self) -> f64 {
        self.diameter.get::<millimeter>()
    }
}

/// Standard API tubing size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TubingSize {
    pub name: &'static str,
    pub od_inch: f64,
    pub od_mm: f64,
    pub id_mm: f64,
    pub weight_lb_ft: f64,
}

pub const TUBING_SIZES: &[TubingSize] = &[
    TubingSize {
        name: "Tbg 2-3/8\"",
        od_inch: 2.375,
        od_mm: 60.3,
        id_mm: 52.5,
        weight_lb_ft: 4.6,
    },
    TubingSize {
        name: "Tbg 2-7/8\"",
        od_inch: 2.875,
        od_mm: 73.0,
        id_mm: 62.0,
        weight_lb_ft: 6.5,
    },
    TubingSize {
        name: "Tbg 3-1/2\"",
        od_inch: 3.5,
        od_mm: 88.9,
        id_mm: 76.2,
        weight_lb_ft: 9.3,
    },
    TubingSize {
        name: "Tbg 4\"",
        od_inch: 4.0,
        od_mm: 101.6,
        id_mm: 88.9,
        weight_lb_ft: 11.0,
    },
    TubingSize {
        name: "Tbg 4-1/2\"",
        od_inch: 4.5,
        od_mm: 114.3,
        id_mm: 101.6,
        weight_lb_ft: 12.75,
    },
];

pub fn tubing_by_name(name: &str) -> Option<&'static TubingSize> {
    TUBING_SIZES.iter().find(|t| t.name == name)
}

/// Typical absolute roughness by pipe condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoughnessPreset {
    NewSteel,
    UsedSteel,
    CorrodedSteel,
    ScaledSteel,
    InternallyCoated,
}

impl RoughnessPreset {
    pub const ALL: [RoughnessPreset; 5] = [
        RoughnessPreset::NewSteel,
        RoughnessPreset::UsedSteel,
        RoughnessPreset::CorrodedSteel,
        RoughnessPreset::ScaledSteel,
        RoughnessPreset::InternallyCoated,
    ];

    pub fn roughness_mm(self) -> f64 {
        match self {
            RoughnessPreset::NewSteel => 0.046,
            RoughnessPreset::UsedSteel => 0.15,
            RoughnessPreset::CorrodedSteel => 0.5,
            RoughnessPreset::ScaledSteel => 1.5,
            RoughnessPreset::InternallyCoated => 0.01,
        }
    }
}
