//! Fetkovich back-pressure model, q = C·(prⁿ − pwfⁿ).

use crate::spec::WellInflowSpec;
use crate::traits::InflowCorrelation;

/// Fallback coefficient when the test point gives no usable pressure term.
const FALLBACK_C: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fetkovich {
    pub reservoir_pressure: f64,
    pub c: f64,
    pub n: f64,
}

impl Fetkovich {
    pub fn from_spec(spec: &WellInflowSpec) -> Self {
        let pr = spec.reservoir_pressure_bar;
        let n = spec.fetkovich_n;
        let c = match spec.test_point {
            Some(t) if t.flow_m3d > 0.0 => {
                let term = pr.powf(n) - t.pwf_bar.max(0.0).powf(n);
                if term > 0.0 { t.flow_m3d / term } else { FALLBACK_C }
            }
            _ => spec.productivity_index_or_default() / pr,
        };
        Self {
            reservoir_pressure: pr,
            c,
            n,
        }
    }
}

impl InflowCorrelation for Fetkovich {
    fn method_label(&self) -> &'static str {
        "Fetkovich"
    }

    fn flow_at(&self, pwf: f64) -> f64 {
        let pwf = pwf.clamp(0.0, self.reservoir_pressure);
        (self.c * (self.reservoir_pressure.powf(self.n) - pwf.powf(self.n))).max(0.0)
    }

    /// Slope dq/dpwf at reservoir pressure.
    fn productivity_index(&self) -> f64 {
        self.c * self.n * self.reservoir_pressure.powf(self.n - 1.0)
    }

    fn backpressure_coefficients(&self) -> Option<(f64, f64)> {
        Some((self.c, self.n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::TestPoint;

    #[test]
    fn c_from_test_point() {
        let spec = WellInflowSpec {
            test_point: Some(TestPoint {
                flow_m3d: 200.0,
                pwf_bar: 50.0,
            }),
            fetkovich_n: 1.0,
            ..WellInflowSpec::default()
        };
        let ipr = Fetkovich::from_spec(&spec);
        assert!((ipr.c - 2.0).abs() < 1e-12);
        assert!((ipr.flow_at(50.0) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_point_at_reservoir_pressure_falls_back() {
        let spec = WellInflowSpec {
            test_point: Some(TestPoint {
                flow_m3d: 10.0,
                pwf_bar: 150.0,
            }),
            ..WellInflowSpec::default()
        };
        assert_eq!(Fetkovich::from_spec(&spec).c, FALLBACK_C);
    }

    #[test]
    fn default_c_from_pi() {
        let ipr = Fetkovich::from_spec(&WellInflowSpec::default());
        assert!((ipr.c - 5.0 / 150.0).abs() < 1e-15);
        assert!((ipr.flow_max() - 5.0).abs() < 1e-9);
        assert_eq!(ipr.backpressure_coefficients(), Some((ipr.c, 1.0)));
    }
}
