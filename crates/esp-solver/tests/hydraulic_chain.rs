//! End-to-end hydraulic chain: inflow → demand → pump → operating point.

use esp_components::{PumpCoefficientSet, synthesize};
use esp_fluids::{FluidProperties, FluidSpec};
use esp_inflow::{IprMethod, TestPoint, WellInflowSpec, compute_inflow};
use esp_solver::{InstallationSpec, compute_demand, find_operating_point};
use proptest::prelude::*;

fn well(method: IprMethod) -> WellInflowSpec {
    WellInflowSpec {
        method,
        reservoir_pressure_bar: 150.0,
        bubble_point_bar: Some(120.0),
        fluid: FluidSpec {
            api_gravity: 21.0,
            water_cut_percent: 95.0,
            ..FluidSpec::default()
        },
        test_point: Some(TestPoint {
            flow_m3d: 100.0,
            pwf_bar: 20.0,
        }),
        ..WellInflowSpec::default()
    }
}

fn pump() -> PumpCoefficientSet {
    PumpCoefficientSet {
        id: "P-200".into(),
        min_flow_m3d: 40.0,
        max_flow_m3d: 180.0,
        nominal_rpm: Some(3000.0),
        head_coefficients: vec![8.0, -0.005, -0.0002],
        power_coefficients: vec![120.0, 0.6],
        efficiency_coefficients: vec![],
    }
}

#[test]
fn demand_strictly_increasing_for_every_correlation() {
    let inst = InstallationSpec::default();
    for method in [
        IprMethod::Linear,
        IprMethod::Vogel,
        IprMethod::Fetkovich,
        IprMethod::Darcy,
    ] {
        let spec = well(method);
        let fluid = FluidProperties::from_spec(&spec.fluid).unwrap();
        let inflow = compute_inflow(&spec).unwrap();
        let demand = compute_demand(&inst, &fluid, &inflow).unwrap();
        for w in demand.points.windows(2) {
            assert!(
                w[1].required_head_m > w[0].required_head_m,
                "{method:?}: {} !> {}",
                w[1].required_head_m,
                w[0].required_head_m
            );
        }
    }
}

#[test]
fn pump_meets_demand() {
    let spec = well(IprMethod::Vogel);
    let fluid = FluidProperties::from_spec(&spec.fluid).unwrap();
    let inflow = compute_inflow(&spec).unwrap();
    let inst = InstallationSpec::default();
    let demand = compute_demand(&inst, &fluid, &inflow).unwrap();
    let curve = synthesize(&pump(), 50.0, 250, 300).unwrap();

    let op = find_operating_point(&curve, &demand, inst.setting_depth_m).unwrap();
    assert!(op.flow_m3d > 0.0 && op.flow_m3d < inflow.flow_max_m3d);
    let demand_head = demand.head_at(op.flow_m3d).unwrap();
    assert!((op.head_m - demand_head).abs() < 1.0, "{} vs {}", op.head_m, demand_head);
    assert!(op.shaft_power_hp > 0.0);
    assert!(op.intake_pressure_bar > 0.0 && op.intake_pressure_bar < 150.0);
}

#[test]
fn weak_pump_has_no_operating_point() {
    let spec = well(IprMethod::Linear);
    let fluid = FluidProperties::from_spec(&spec.fluid).unwrap();
    let inflow = compute_inflow(&spec).unwrap();
    let inst = InstallationSpec::default();
    let demand = compute_demand(&inst, &fluid, &inflow).unwrap();
    let curve = synthesize(&pump(), 50.0, 1, 300).unwrap();
    assert!(find_operating_point(&curve, &demand, inst.setting_depth_m).is_none());
}

proptest! {
    #[test]
    fn demand_increasing_over_well_space(
        pr in 50.0_f64..300.0,
        pi in 0.5_f64..20.0,
        wc in 0.0_f64..100.0,
        depth in 300.0_f64..3000.0,
        id_mm in 40.0_f64..110.0,
    ) {
        let spec = WellInflowSpec {
            reservoir_pressure_bar: pr,
            productivity_index: Some(pi),
            fluid: FluidSpec { water_cut_percent: wc, ..FluidSpec::default() },
            n_points: 30,
            ..WellInflowSpec::default()
        };
        let inst = InstallationSpec {
            setting_depth_m: depth,
            tubing_id_mm: id_mm,
            ..InstallationSpec::default()
        };
        let fluid = FluidProperties::from_spec(&spec.fluid).unwrap();
        let inflow = compute_inflow(&spec).unwrap();
        let demand = compute_demand(&inst, &fluid, &inflow).unwrap();
        for w in demand.points.windows(2) {
            prop_assert!(w[1].required_head_m > w[0].required_head_m);
        }
    }
}
