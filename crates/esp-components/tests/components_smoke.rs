//! Integration tests for esp-components.

use esp_components::{PumpCoefficientSet, RoughnessPreset, TUBING_SIZES, Tubing, synthesize};
use esp_fluids::{FluidProperties, FluidSpec};
use proptest::prelude::*;

fn catalog_pump() -> PumpCoefficientSet {
    PumpCoefficientSet {
        id: "P-400".into(),
        min_flow_m3d: 60.0,
        max_flow_m3d: 220.0,
        nominal_rpm: Some(3500.0),
        head_coefficients: vec![12.0, -0.01, -0.0002],
        power_coefficients: vec![140.0, 0.9, -0.001],
        efficiency_coefficients: vec![0.0, 0.01, -0.00003],
    }
}

#[test]
fn doubling_speed_quadruples_head_and_multiplies_power_by_eight() {
    let coeffs = catalog_pump();
    let slow = synthesize(&coeffs, 30.0, 50, 120).unwrap();
    let fast = synthesize(&coeffs, 60.0, 50, 120).unwrap();
    assert_eq!(slow.scaled.len(), fast.scaled.len());

    for i in 0..slow.scaled.len() {
        let (q1, q2) = (slow.scaled.flow_m3d[i], fast.scaled.flow_m3d[i]);
        assert!((q2 - 2.0 * q1).abs() <= 1e-9 * q2.max(1.0));
        let (h1, h2) = (slow.scaled.head_m[i], fast.scaled.head_m[i]);
        assert!((h2 - 4.0 * h1).abs() <= 1e-9 * h2.abs().max(1.0));
        let (p1, p2) = (slow.scaled.power[i], fast.scaled.power[i]);
        assert!((p2 - 8.0 * p1).abs() <= 1e-9 * p2.abs().max(1.0));
    }
}

#[test]
fn raw_series_ignores_stages_and_frequency() {
    let coeffs = catalog_pump();
    let a = synthesize(&coeffs, 50.0, 10, 50).unwrap();
    let b = synthesize(&coeffs, 60.0, 200, 50).unwrap();
    assert_eq!(a.raw, b.raw);
}

#[test]
fn every_standard_size_builds_a_tubing() {
    let fluid = FluidProperties::from_spec(&FluidSpec::default()).unwrap();
    let mut last = f64::INFINITY;
    for size in TUBING_SIZES {
        let t = Tubing::from_field_units(1500.0, size.id_mm, RoughnessPreset::UsedSteel.roughness_mm())
            .unwrap();
        let dp = t.pressure_drop_bar(300.0, &fluid).unwrap();
        assert!(dp > 0.0);
        assert!(dp < last, "larger tubing must lose less");
        last = dp;
    }
}

proptest! {
    #[test]
    fn affinity_ratio_squared_and_cubed(f in 20.0_f64..70.0, stages in 1u32..400) {
        let coeffs = catalog_pump();
        let curve = synthesize(&coeffs, f, stages, 30).unwrap();
        let ratio = f * 60.0 / 3500.0;
        let expected_h0 = 12.0 * f64::from(stages) * ratio * ratio;
        let expected_p0 = 140.0 * f64::from(stages) * ratio.powi(3) * 1.34 / 1000.0;
        prop_assert!((curve.scaled.head_m[0] - expected_h0).abs() <= 1e-9 * expected_h0);
        prop_assert!((curve.scaled.power[0] - expected_p0).abs() <= 1e-9 * expected_p0);
    }
}
