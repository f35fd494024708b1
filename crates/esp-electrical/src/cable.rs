//! Cable resistance and I²R losses.

use crate::error::{ElectricalError, ElectricalResult};
use crate::specs::{CableLayout, CableSpecs};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Read-only access to cable specifications by id.
pub trait CableLookup {
    fn cable(&self, id: &str) -> Option<&CableSpecs>;
}

impl CableLookup for HashMap<String, CableSpecs> {
    fn cable(&self, id: &str) -> Option<&CableSpecs> {
        self.get(id)
    }
}

impl CableLookup for [CableSpecs] {
    fn cable(&self, id: &str) -> Option<&CableSpecs> {
        self.iter().find(|c| c.id == id)
    }
}

/// Resistance (Ω) of `length_m` of cable at `temp_c`. Negative lengths count as zero.
pub fn segment_resistance(spec: &CableSpecs, length_m: f64, temp_c: f64) -> f64 {
    let r_oper = spec.resistance_ohm_per_km_20c * (1.0 + spec.temp_coefficient_per_c * (temp_c - 20.0));
    r_oper / 1000.0 * length_m.max(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CableSection {
    pub mle_length_m: f64,
    pub downhole_length_m: f64,
    pub surface_length_m: f64,
    pub resistance_ohm: f64,
    pub loss_kw: f64,
    pub voltage_drop_v: f64,
}

/// Losses for the three runs carrying `current_a`.
///
/// MLE and downhole runs sit at intake temperature; the surface run at ambient.
/// The downhole run covers the setting depth less the MLE.
pub fn cable_losses(
    layout: &CableLayout,
    cables: &(impl CableLookup + ?Sized),
    setting_depth_m: f64,
    intake_temp_c: f64,
    surface_temp_c: f64,
    current_a: f64,
) -> ElectricalResult<CableSection> {
    let mut missing = Vec::new();
    if layout.mle_cable_id.is_none() {
        missing.push("mle_cable_id");
    }
    if layout.mle_length_m.is_none() {
        missing.push("mle_length_m");
    }
    if layout.downhole_cable_id.is_none() {
        missing.push("downhole_cable_id");
    }
    if layout.surface_cable_id.is_none() {
        missing.push("surface_cable_id");
    }
    if layout.surface_length_m.is_none() {
        missing.push("surface_length_m");
    }
    let (Some(mle_id), Some(mle_len), Some(dh_id), Some(sf_id), Some(sf_len)) = (
        layout.mle_cable_id.as_deref(),
        layout.mle_length_m,
        layout.downhole_cable_id.as_deref(),
        layout.surface_cable_id.as_deref(),
        layout.surface_length_m,
    ) else {
        return Err(ElectricalError::MissingCableParameters { missing });
    };

    let lookup = |id: &str| {
        cables
            .cable(id)
            .ok_or_else(|| ElectricalError::UnknownCable { id: id.to_string() })
    };

    let downhole_len = (setting_depth_m - mle_len).max(0.0);
    let r_total = segment_resistance(lookup(mle_id)?, mle_len, intake_temp_c)
        + segment_resistance(lookup(dh_id)?, downhole_len, intake_temp_c)
        + segment_resistance(lookup(sf_id)?, sf_len, surface_temp_c);

    Ok(CableSection {
        mle_length_m: mle_len.max(0.0),
        downhole_length_m: downhole_len,
        surface_length_m: sf_len.max(0.0),
        resistance_ohm: r_total,
        loss_kw: 3.0 * current_a * current_a * r_total / 1000.0,
        voltage_drop_v: current_a * r_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cables() -> Vec<CableSpecs> {
        vec![CableSpecs {
            id: "AWG4".into(),
            resistance_ohm_per_km_20c: 1.0,
            temp_coefficient_per_c: 0.004,
        }]
    }

    fn layout(mle: f64, surface: f64) -> CableLayout {
        CableLayout {
            mle_cable_id: Some("AWG4".into()),
            mle_length_m: Some(mle),
            downhole_cable_id: Some("AWG4".into()),
            surface_cable_id: Some("AWG4".into()),
            surface_length_m: Some(surface),
        }
    }

    #[test]
    fn resistance_temperature_correction() {
        let spec = &cables()[0];
        assert!((segment_resistance(spec, 1000.0, 20.0) - 1.0).abs() < 1e-12);
        assert!((segment_resistance(spec, 1000.0, 70.0) - 1.2).abs() < 1e-12);
        assert_eq!(segment_resistance(spec, -5.0, 70.0), 0.0);
    }

    #[test]
    fn three_runs() {
        let sec = cable_losses(&layout(50.0, 100.0), cables().as_slice(), 1050.0, 70.0, 20.0, 10.0)
            .unwrap();
        assert_eq!(sec.downhole_length_m, 1000.0);
        // (50 + 1000)·1.2e-3 + 100·1e-3
        let r = 1050.0 * 1.2e-3 + 0.1;
        assert!((sec.resistance_ohm - r).abs() < 1e-12);
        assert!((sec.loss_kw - 3.0 * 100.0 * r / 1000.0).abs() < 1e-12);
        assert!((sec.voltage_drop_v - 10.0 * r).abs() < 1e-12);
    }

    #[test]
    fn mle_longer_than_depth() {
        let sec = cable_losses(&layout(500.0, 0.0), cables().as_slice(), 300.0, 20.0, 20.0, 1.0)
            .unwrap();
        assert_eq!(sec.downhole_length_m, 0.0);
    }

    #[test]
    fn unknown_and_missing() {
        let mut l = layout(10.0, 10.0);
        l.surface_cable_id = Some("NOPE".into());
        assert_eq!(
            cable_losses(&l, cables().as_slice(), 100.0, 20.0, 20.0, 1.0),
            Err(ElectricalError::UnknownCable { id: "NOPE".into() })
        );
        let l = CableLayout::default();
        let Err(ElectricalError::MissingCableParameters { missing }) =
            cable_losses(&l, cables().as_slice(), 100.0, 20.0, 20.0, 1.0)
        else {
            panic!("expected missing parameters");
        };
        assert_eq!(missing.len(), 5);
    }

    #[test]
    fn hashmap_lookup() {
        let map: HashMap<String, CableSpecs> =
            cables().into_iter().map(|c| (c.id.clone(), c)).collect();
        assert!(map.cable("AWG4").is_some());
        assert!(map.cable("x").is_none());
    }
}
