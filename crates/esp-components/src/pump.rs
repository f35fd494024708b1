//! Pump performance curve synthesis.
//!
//! Catalog curves are polynomials in flow for one stage at the catalog speed.
//! An installed pump runs `stages` stages at `frequency·60` rpm, so the catalog
//! curve is scaled by the affinity laws:
//!
//! ```text
//! ratio = (frequency·60) / catalog_rpm
//! Q  → Q·ratio
//! H  → H·stages·ratio²
//! P  → P·stages·ratio³
//! ```
//!
//! Efficiency has no catalog fit. It is derived from head and power:
//! `η = Q·H / (6570·P_hp)`.

use crate::common::{check_finite, polyval};
use crate::error::{ComponentError, ComponentResult};
use esp_core::series::interpolate;
use serde::{Deserialize, Serialize};

/// Catalog power units to hp.
pub const HP_PER_CATALOG_POWER: f64 = 1.34 / 1000.0;

/// Hydraulic efficiency constant for flow, head and hp.
pub const EFFICIENCY_CONSTANT: f64 = 6570.0;

pub const DEFAULT_PUMP_POINTS: usize = 300;

/// Resolution of the zero-head search, as a fraction of the rated max flow.
const ZERO_HEAD_SEARCH_STEPS: usize = 1000;

/// Catalog polynomials for one pump model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpCoefficientSet {
    pub id: String,
    pub min_flow_m3d: f64,
    pub max_flow_m3d: f64,
    #[serde(default)]
    pub nominal_rpm: Option<f64>,
    /// Ascending powers of flow.
    pub head_coefficients: Vec<f64>,
    pub power_coefficients: Vec<f64>,
    /// Carried from the catalog, not used for synthesis.
    #[serde(default)]
    pub efficiency_coefficients: Vec<f64>,
}

impl PumpCoefficientSet {
    /// # Errors
    /// Returns error for empty head coefficients, non-finite values or an
    /// inconsistent operating window.
    pub fn validate(&self) -> ComponentResult<()> {
        if self.head_coefficients.is_empty() {
            return Err(ComponentError::InvalidArg {
                what: "pump head coefficients are empty",
            });
        }
        for c in self.head_coefficients.iter().chain(&self.power_coefficients) {
            check_finite(*c, "pump coefficient")?;
        }
        check_finite(self.min_flow_m3d, "pump min flow")?;
        check_finite(self.max_flow_m3d, "pump max flow")?;
        if self.max_flow_m3d <= 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "pump max flow must be positive",
            });
        }
        if self.min_flow_m3d < 0.0 || self.min_flow_m3d > self.max_flow_m3d {
            return Err(ComponentError::InvalidArg {
                what: "pump min flow must lie in [0, max flow]",
            });
        }
        if let Some(rpm) = self.nominal_rpm {
            check_finite(rpm, "pump nominal rpm")?;
        }
        Ok(())
    }

    /// Single-stage head at catalog speed.
    pub fn base_head(&self, q: f64) -> f64 {
        polyval(&self.head_coefficients, q)
    }

    /// Single-stage power at catalog speed, catalog units.
    pub fn base_power(&self, q: f64) -> f64 {
        polyval(&self.power_coefficients, q)
    }

    /// Operating speed over catalog speed; 1 without a usable catalog rpm.
    pub fn speed_ratio(&self, frequency_hz: f64) -> f64 {
        match self.nominal_rpm {
            Some(rpm) if rpm > 0.0 => frequency_hz * 60.0 / rpm,
            _ => 1.0,
        }
    }

    /// First base flow where base head reaches zero, else the rated max flow.
    pub fn zero_head_flow(&self) -> f64 {
        let step = self.max_flow_m3d / ZERO_HEAD_SEARCH_STEPS as f64;
        (0..2 * ZERO_HEAD_SEARCH_STEPS)
            .map(|i| i as f64 * step)
            .find(|&q| self.base_head(q) <= 0.0)
            .unwrap_or(self.max_flow_m3d)
    }
}

/// Parallel samples over a common flow axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PumpSeries {
    pub flow_m3d: Vec<f64>,
    pub head_m: Vec<f64>,
    /// hp on the scaled basis; catalog units on the raw basis
    pub power: Vec<f64>,
    pub efficiency: Vec<f64>,
}

impl PumpSeries {
    fn push(&mut self, q: f64, head: f64, power: f64, efficiency: f64) {
        self.flow_m3d.push(q);
        self.head_m.push(head);
        self.power.push(power);
        self.efficiency.push(efficiency);
    }

    pub fn len(&self) -> usize {
        self.flow_m3d.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flow_m3d.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingRange {
    pub min_flow_m3d: f64,
    pub max_flow_m3d: f64,
}

/// Pump performance at one stage count and frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpCurve {
    pub pump_id: String,
    pub stages: u32,
    pub frequency_hz: f64,
    pub speed_ratio: f64,
    /// Installed pump at operating frequency, power in hp.
    pub scaled: PumpSeries,
    /// One stage at catalog speed.
    pub raw: PumpSeries,
    pub operating_range: OperatingRange,
}

impl PumpCurve {
    pub fn head_at(&self, q: f64) -> Option<f64> {
        interpolate(&self.scaled.flow_m3d, &self.scaled.head_m, q)
    }

    pub fn power_at(&self, q: f64) -> Option<f64> {
        interpolate(&self.scaled.flow_m3d, &self.scaled.power, q)
    }

    pub fn efficiency_at(&self, q: f64) -> Option<f64> {
        interpolate(&self.scaled.flow_m3d, &self.scaled.efficiency, q)
    }

    /// Sample nearest the middle of the curve (used for quick design checks).
    pub fn mid_point(&self) -> Option<(f64, f64, f64)> {
        let n = self.scaled.len();
        if n == 0 {
            return None;
        }
        let i = n / 2;
        Some((
            self.scaled.flow_m3d[i],
            self.scaled.head_m[i],
            self.scaled.power[i],
        ))
    }
}

fn efficiency(q: f64, head: f64, power_hp: f64) -> f64 {
    if power_hp == 0.0 {
        0.0
    } else {
        q * head / (EFFICIENCY_CONSTANT * power_hp)
    }
}

/// Build the installed pump curve.
///
/// Points are spaced evenly from zero to the base zero-head flow and reported
/// at scaled flow. Generation stops at the first negative scaled head.
///
/// # Errors
/// Returns error for zero stages, non-positive frequency, fewer than two points
/// or invalid coefficients.
pub fn synthesize(
    coeffs: &PumpCoefficientSet,
    frequency_hz: f64,
    stages: u32,
    point_count: usize,
) -> ComponentResult<PumpCurve> {
    coeffs.validate()?;
    check_finite(frequency_hz, "frequency")?;
    if frequency_hz <= 0.0 {
        return Err(ComponentError::InvalidArg {
            what: "frequency must be positive",
        });
    }
    if stages == 0 {
        return Err(ComponentError::InvalidArg {
            what: "stage count must be positive",
        });
    }
    if point_count < 2 {
        return Err(ComponentError::InvalidArg {
            what: "pump curve needs at least two points",
        });
    }

    let ratio = coeffs.speed_ratio(frequency_hz);
    let stage_factor = f64::from(stages);
    let head_factor = stage_factor * ratio * ratio;
    let power_factor = stage_factor * ratio.powi(3);

    let q_zero = coeffs.zero_head_flow();
    let step = if q_zero > 0.0 {
        q_zero / (point_count - 1) as f64
    } else {
        1.0
    };

    let mut scaled = PumpSeries::default();
    let mut raw = PumpSeries::default();

    for i in 0..point_count {
        let q_base = step * i as f64;
        let q_scaled = q_base * ratio;

        let base_h = coeffs.base_head(q_base);
        let base_p = coeffs.base_power(q_base);

        let head = base_h * head_factor;
        if head < 0.0 {
            break;
        }
        let power_hp = base_p * power_factor * HP_PER_CATALOG_POWER;

        scaled.push(q_scaled, head, power_hp, efficiency(q_scaled, head, power_hp));
        raw.push(
            q_base,
            base_h,
            base_p,
            efficiency(q_base, base_h, base_p * HP_PER_CATALOG_POWER),
        );
    }

    tracing::debug!(
        pump = coeffs.id.as_str(),
        stages,
        frequency_hz,
        ratio,
        points = scaled.len(),
        "pump curve synthesized"
    );

    Ok(PumpCurve {
        pump_id: coeffs.id.clone(),
        stages,
        frequency_hz,
        speed_ratio: ratio,
        scaled,
        raw,
        operating_range: OperatingRange {
            min_flow_m3d: coeffs.min_flow_m3d * ratio,
            max_flow_m3d: coeffs.max_flow_m3d * ratio,
        },
    })
}
