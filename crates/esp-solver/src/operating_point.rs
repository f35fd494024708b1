//! Pump/demand intersection.

use crate::demand::DemandCurve;
use esp_components::PumpCurve;
use esp_core::series::interpolate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingPoint {
    pub flow_m3d: f64,
    pub head_m: f64,
    pub shaft_power_hp: f64,
    pub efficiency: f64,
    pub intake_pressure_bar: f64,
    pub pwf_bar: f64,
    pub fluid_level_m: f64,
    pub submergence_m: f64,
}

/// Flow where the pump head first meets the demand head, walking the pump
/// curve from low flow.
///
/// Demand head is interpolated (clamped) at each pump sample. A segment
/// qualifies on an exact zero at its first end or a strict sign change, and the
/// crossing flow comes from one linear interpolation step. Returns `None` when
/// the curves do not cross.
pub fn find_operating_point(
    pump: &PumpCurve,
    demand: &DemandCurve,
    setting_depth_m: f64,
) -> Option<OperatingPoint> {
    let pump_q = &pump.scaled.flow_m3d;
    let pump_h = &pump.scaled.head_m;
    if pump_q.is_empty() || demand.is_empty() {
        return None;
    }

    let demand_q = demand.flows();
    let demand_h = demand.heads();

    for i in 0..pump_q.len().saturating_sub(1) {
        let (q1, q2) = (pump_q[i], pump_q[i + 1]);
        if q1 == q2 {
            continue;
        }
        let (Some(d1), Some(d2)) = (
            interpolate(&demand_q, &demand_h, q1),
            interpolate(&demand_q, &demand_h, q2),
        ) else {
            continue;
        };

        let diff1 = pump_h[i] - d1;
        let diff2 = pump_h[i + 1] - d2;

        let q = if diff1 == 0.0 {
            q1
        } else if diff1 * diff2 < 0.0 {
            q1 + diff1 / (diff1 - diff2) * (q2 - q1)
        } else {
            continue;
        };

        let Some(head) = interpolate(pump_q, pump_h, q) else {
            continue;
        };

        let fluid_level = demand.value_at(q, |p| p.fluid_level_m).unwrap_or(0.0);
        let submergence = demand
            .value_at(q, |p| p.submergence_m)
            .unwrap_or(setting_depth_m - fluid_level)
            .max(0.0);

        let point = OperatingPoint {
            flow_m3d: q,
            head_m: head,
            shaft_power_hp: pump.power_at(q).unwrap_or(0.0),
            efficiency: pump.efficiency_at(q).unwrap_or(0.0),
            intake_pressure_bar: demand.value_at(q, |p| p.intake_pressure_bar).unwrap_or(0.0),
            pwf_bar: demand.value_at(q, |p| p.pwf_bar).unwrap_or(0.0),
            fluid_level_m: fluid_level,
            submergence_m: submergence,
        };
        tracing::debug!(flow = q, head, "operating point found");
        return Some(point);
    }

    tracing::debug!(pump = pump.pump_id.as_str(), "pump and demand curves do not cross");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demand::DemandPoint;
    use esp_components::{OperatingRange, PumpSeries};

    fn pump(qs: &[f64], hs: &[f64]) -> PumpCurve {
        let series = PumpSeries {
            flow_m3d: qs.to_vec(),
            head_m: hs.to_vec(),
            power: qs.iter().map(|q| 10.0 + q * 0.1).collect(),
            efficiency: qs.iter().map(|q| q / 1000.0).collect(),
        };
        PumpCurve {
            pump_id: "test".into(),
            stages: 1,
            frequency_hz: 50.0,
            speed_ratio: 1.0,
            scaled: series.clone(),
            raw: series,
            operating_range: OperatingRange {
                min_flow_m3d: 0.0,
                max_flow_m3d: 1000.0,
            },
        }
    }

    fn demand(qs: &[f64], hs: &[f64]) -> DemandCurve {
        DemandCurve {
            points: qs
                .iter()
                .zip(hs)
                .map(|(&q, &h)| DemandPoint {
                    flow_m3d: q,
                    required_head_m: h,
                    intake_pressure_bar: 100.0 - q * 0.1,
                    pwf_bar: 100.0 - q * 0.1,
                    friction_loss_bar: 0.0,
                    fluid_level_m: q,
                    submergence_m: (1000.0 - q).max(0.0),
                })
                .collect(),
            gradient_bar_per_m: 0.1,
            setting_depth_m: 1000.0,
            surface_pressure_bar: 0.0,
            casing_pressure_bar: 0.0,
        }
    }

    #[test]
    fn single_crossing() {
        // pump 1000 - q, demand 200 + q: cross at q = 400, h = 600
        let p = pump(&[0.0, 250.0, 500.0, 750.0], &[1000.0, 750.0, 500.0, 250.0]);
        let d = demand(&[0.0, 800.0], &[200.0, 1000.0]);
        let op = find_operating_point(&p, &d, 1000.0).unwrap();
        assert!((op.flow_m3d - 400.0).abs() < 1e-9);
        assert!((op.head_m - 600.0).abs() < 1e-9);
        assert!((op.shaft_power_hp - 50.0).abs() < 1e-9);
        assert!((op.efficiency - 0.4).abs() < 1e-12);
        assert!((op.pwf_bar - 60.0).abs() < 1e-9);
        assert!((op.submergence_m - 600.0).abs() < 1e-9);
    }

    #[test]
    fn no_crossing_is_none() {
        let p = pump(&[0.0, 100.0, 200.0], &[100.0, 90.0, 80.0]);
        let d = demand(&[0.0, 200.0], &[500.0, 700.0]);
        assert!(find_operating_point(&p, &d, 1000.0).is_none());
    }

    #[test]
    fn exact_zero_at_segment_start() {
        let p = pump(&[0.0, 100.0, 200.0], &[300.0, 200.0, 100.0]);
        let d = demand(&[0.0, 200.0], &[100.0, 300.0]);
        let op = find_operating_point(&p, &d, 1000.0).unwrap();
        assert_eq!(op.flow_m3d, 100.0);
        assert_eq!(op.head_m, 200.0);
    }

    #[test]
    fn first_crossing_wins() {
        // pump dips below demand then back above: two crossings
        let p = pump(&[0.0, 100.0, 200.0, 300.0], &[500.0, 100.0, 500.0, 100.0]);
        let d = demand(&[0.0, 300.0], &[300.0, 300.0]);
        let op = find_operating_point(&p, &d, 1000.0).unwrap();
        assert!((op.flow_m3d - 50.0).abs() < 1e-9);
    }

    #[test]
    fn empty_curves_are_none() {
        let p = pump(&[], &[]);
        let d = demand(&[0.0, 1.0], &[1.0, 2.0]);
        assert!(find_operating_point(&p, &d, 1000.0).is_none());
    }
}
