//! Straight-line productivity index model.

use crate::spec::WellInflowSpec;
use crate::traits::InflowCorrelation;

/// q = PI·(pr − pwf)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearPi {
    pub reservoir_pressure: f64,
    pub pi: f64,
}

impl LinearPi {
    pub fn new(reservoir_pressure: f64, pi: f64) -> Self {
        Self {
            reservoir_pressure,
            pi,
        }
    }

    /// PI from the test point when one is usable, else the given/default PI.
    pub fn from_spec(spec: &WellInflowSpec) -> Self {
        let pr = spec.reservoir_pressure_bar;
        let pi = match spec.usable_test_point() {
            Some(t) => t.flow_m3d / (pr - t.pwf_bar),
            None => spec.productivity_index_or_default(),
        };
        Self::new(pr, pi)
    }
}

impl InflowCorrelation for LinearPi {
    fn method_label(&self) -> &'static str {
        "Linear (PI)"
    }

    fn flow_at(&self, pwf: f64) -> f64 {
        (self.pi * (self.reservoir_pressure - pwf)).max(0.0)
    }

    fn flow_max(&self) -> f64 {
        self.reservoir_pressure * self.pi
    }

    fn productivity_index(&self) -> f64 {
        self.pi
    }
}
