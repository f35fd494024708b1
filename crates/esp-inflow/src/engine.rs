//! Inflow curve construction.

use crate::curve::{InflowCurve, InflowParameters, InflowPoint};
use crate::darcy::DarcyRadial;
use crate::error::{InflowError, InflowResult};
use crate::fetkovich::Fetkovich;
use crate::linear::LinearPi;
use crate::spec::{IprMethod, WellInflowSpec};
use crate::traits::InflowCorrelation;
use crate::vogel::CompositeVogel;
use esp_core::numeric::ensure_finite;
use esp_core::series::linspace;
use esp_fluids::FluidProperties;

fn validate(spec: &WellInflowSpec) -> InflowResult<()> {
    ensure_finite(spec.reservoir_pressure_bar, "reservoir pressure")?;
    if spec.reservoir_pressure_bar <= 0.0 {
        return Err(InflowError::InvalidInflowInput {
            what: "reservoir pressure must be positive",
        });
    }
    if spec.n_points == 0 {
        return Err(InflowError::InvalidInflowInput {
            what: "point count must be positive",
        });
    }
    if let Some(pb) = spec.bubble_point_bar {
        ensure_finite(pb, "bubble point pressure")?;
        if pb < 0.0 {
            return Err(InflowError::InvalidInflowInput {
                what: "bubble point pressure cannot be negative",
            });
        }
    }
    if let Some(pi) = spec.productivity_index {
        ensure_finite(pi, "productivity index")?;
        if pi <= 0.0 {
            return Err(InflowError::InvalidInflowInput {
                what: "productivity index must be positive",
            });
        }
    }
    if spec.method == IprMethod::Fetkovich && !(spec.fetkovich_n.is_finite() && spec.fetkovich_n > 0.0) {
        return Err(InflowError::InvalidInflowInput {
            what: "Fetkovich exponent must be positive",
        });
    }
    Ok(())
}

/// Calibrate the selected correlation against the well data.
pub fn build_correlation(spec: &WellInflowSpec) -> InflowResult<Box<dyn InflowCorrelation>> {
    validate(spec)?;
    let corr: Box<dyn InflowCorrelation> = match spec.method {
        IprMethod::Linear => Box::new(LinearPi::from_spec(spec)),
        IprMethod::Vogel => Box::new(CompositeVogel::from_spec(spec)),
        IprMethod::Fetkovich => Box::new(Fetkovich::from_spec(spec)),
        IprMethod::Darcy => Box::new(DarcyRadial::new(
            spec.reservoir_pressure_bar,
            &spec.darcy,
            spec.fluid.viscosity_cp,
        )?),
    };
    Ok(corr)
}

/// Build the inflow curve: pwf from reservoir pressure down to zero in
/// `n_points` steps, with the flow and fluid level at each pressure.
///
/// # Errors
/// `InvalidInflowInput` for non-positive reservoir pressure, a zero point count
/// or an invalid correlation parameter. Fluid errors propagate.
pub fn compute_inflow(spec: &WellInflowSpec) -> InflowResult<InflowCurve> {
    let fluid = FluidProperties::from_spec(&spec.fluid)?;
    let corr = build_correlation(spec)?;
    let pr = spec.reservoir_pressure_bar;

    let points: Vec<InflowPoint> = linspace(pr, 0.0, spec.n_points + 1)
        .into_iter()
        .map(|pwf| InflowPoint {
            flow_m3d: corr.flow_at(pwf).max(0.0),
            pwf_bar: pwf.max(0.0),
            fluid_level_m: fluid.level_below(pwf, pr).max(0.0),
        })
        .collect();

    let (fetkovich_c, fetkovich_n) = match corr.backpressure_coefficients() {
        Some((c, n)) => (Some(c), Some(n)),
        None => (None, None),
    };

    let curve = InflowCurve {
        method: spec.method,
        label: corr.method_label().to_string(),
        points,
        flow_max_m3d: corr.flow_max(),
        parameters: InflowParameters {
            reservoir_pressure_bar: pr,
            bubble_point_bar: spec.bubble_point(),
            productivity_index: corr.productivity_index(),
            fetkovich_c,
            fetkovich_n,
            gradient_bar_per_m: fluid.gradient_bar_per_m,
            specific_gravity: fluid.specific_gravity,
        },
    };

    tracing::debug!(
        method = curve.label.as_str(),
        points = curve.points.len(),
        flow_max = curve.flow_max_m3d,
        "inflow curve computed"
    );

    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::TestPoint;

    #[test]
    fn rejects_non_positive_reservoir_pressure() {
        for pr in [0.0, -10.0] {
            let spec = WellInflowSpec {
                reservoir_pressure_bar: pr,
                ..WellInflowSpec::default()
            };
            assert!(matches!(
                compute_inflow(&spec),
                Err(InflowError::InvalidInflowInput { .. })
            ));
        }
    }

    #[test]
    fn rejects_zero_points() {
        let spec = WellInflowSpec {
            n_points: 0,
            ..WellInflowSpec::default()
        };
        assert!(compute_inflow(&spec).is_err());
    }

    #[test]
    fn bad_water_cut_is_a_fluid_error() {
        let mut spec = WellInflowSpec::default();
        spec.fluid.water_cut_percent = 150.0;
        assert!(matches!(compute_inflow(&spec), Err(InflowError::Fluid(_))));
    }

    #[test]
    fn point_count_and_end_points() {
        let spec = WellInflowSpec {
            n_points: 10,
            ..WellInflowSpec::default()
        };
        let curve = compute_inflow(&spec).unwrap();
        assert_eq!(curve.len(), 11);
        assert_eq!(curve.points[0].pwf_bar, 150.0);
        assert_eq!(curve.points[0].flow_m3d, 0.0);
        assert_eq!(curve.points[10].pwf_bar, 0.0);
        assert!((curve.points[10].flow_m3d - curve.flow_max_m3d).abs() < 1e-9);
    }

    #[test]
    fn fluid_level_follows_gradient() {
        let spec = WellInflowSpec {
            n_points: 2,
            ..WellInflowSpec::default()
        };
        let curve = compute_inflow(&spec).unwrap();
        let grad = curve.parameters.gradient_bar_per_m;
        assert!((curve.points[1].fluid_level_m - 75.0 / grad).abs() < 1e-9);
    }

    #[test]
    fn fetkovich_reports_coefficients() {
        let spec = WellInflowSpec {
            method: IprMethod::Fetkovich,
            test_point: Some(TestPoint {
                flow_m3d: 100.0,
                pwf_bar: 100.0,
            }),
            ..WellInflowSpec::default()
        };
        let curve = compute_inflow(&spec).unwrap();
        assert!(curve.parameters.fetkovich_c.is_some());
        assert_eq!(curve.parameters.fetkovich_n, Some(1.0));
    }

    #[test]
    fn scaled_multiplies_flows_only() {
        let curve = compute_inflow(&WellInflowSpec::default()).unwrap();
        let half = curve.scaled(0.5);
        assert_eq!(half.flow_max_m3d, curve.flow_max_m3d * 0.5);
        for (a, b) in curve.points.iter().zip(&half.points) {
            assert_eq!(b.flow_m3d, a.flow_m3d * 0.5);
            assert_eq!(b.pwf_bar, a.pwf_bar);
            assert_eq!(b.fluid_level_m, a.fluid_level_m);
        }
    }
}
