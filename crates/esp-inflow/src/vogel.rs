//! Composite Vogel inflow.
//!
//! Above the bubble point the well behaves linearly with index `J`. Below it the
//! Vogel shape takes over, joined continuously at `pwf = pb`:
//!
//! ```text
//! qb = J·(pr − pb)
//! q  = qb + (J·pb/1.8)·(1 − 0.2·(pwf/pb) − 0.8·(pwf/pb)²)     pwf < pb
//! ```
//!
//! A saturated reservoir (`pr ≤ pb`) reduces to plain Vogel with
//! `qmax = J·pr/1.8`.

use crate::spec::WellInflowSpec;
use crate::traits::InflowCorrelation;

/// Dimensionless Vogel shape, 1 − 0.2r − 0.8r².
pub fn vogel_ratio(r: f64) -> f64 {
    1.0 - 0.2 * r - 0.8 * r * r
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeVogel {
    pub reservoir_pressure: f64,
    /// Effective bubble point, never above reservoir pressure.
    pub bubble_point: f64,
    pub j: f64,
}

impl CompositeVogel {
    pub fn new(reservoir_pressure: f64, bubble_point: f64, j: f64) -> Self {
        Self {
            reservoir_pressure,
            bubble_point: bubble_point.clamp(0.0, reservoir_pressure),
            j,
        }
    }

    pub fn is_saturated(&self) -> bool {
        self.bubble_point >= self.reservoir_pressure
    }

    pub fn from_spec(spec: &WellInflowSpec) -> Self {
        let pr = spec.reservoir_pressure_bar;
        let pb = spec.bubble_point().clamp(0.0, pr);
        let fallback = spec.productivity_index_or_default();

        let j = match spec.usable_test_point() {
            Some(t) if pb >= pr => {
                // Saturated: back-solve qmax, then J = 1.8·qmax/pr.
                let shape = vogel_ratio(t.pwf_bar / pr);
                if shape > 0.0 {
                    1.8 * (t.flow_m3d / shape) / pr
                } else {
                    fallback
                }
            }
            Some(t) if t.pwf_bar >= pb => t.flow_m3d / (pr - t.pwf_bar),
            Some(t) => {
                let denom = (pr - pb) + pb / 1.8 * vogel_ratio(t.pwf_bar / pb);
                if denom > 0.0 {
                    t.flow_m3d / denom
                } else {
                    fallback
                }
            }
            None => fallback,
        };

        Self::new(pr, pb, j)
    }

    /// Rate at the bubble point.
    pub fn flow_at_bubble_point(&self) -> f64 {
        self.j * (self.reservoir_pressure - self.bubble_point)
    }
}

impl InflowCorrelation for CompositeVogel {
    fn method_label(&self) -> &'static str {
        "Vogel (composite)"
    }

    fn flow_at(&self, pwf: f64) -> f64 {
        let pr = self.reservoir_pressure;
        let pb = self.bubble_point;
        let pwf = pwf.clamp(0.0, pr);

        if pwf >= pb {
            return self.j * (pr - pwf);
        }
        let qb = self.flow_at_bubble_point();
        qb + (self.j * pb / 1.8) * vogel_ratio(pwf / pb)
    }

    fn flow_max(&self) -> f64 {
        self.flow_at_bubble_point() + self.j * self.bubble_point / 1.8
    }

    fn productivity_index(&self) -> f64 {
        self.j
    }
}
