//! Named sensitivity scenarios run over the base case.

use crate::case::{WellCase, positive_frequency};
use crate::error::AppResult;
use crate::service::{DesignElectrical, Hydraulics, compute_hydraulics, electrical_for_design};
use esp_catalog::EquipmentCatalog;
use esp_inflow::{InflowCurve, TestPoint, WellInflowSpec};
use esp_solver::{DemandCurve, InstallationSpec};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKey {
    Optimistic,
    Conservative,
    Pessimistic,
}

impl ScenarioKey {
    pub const ORDER: [ScenarioKey; 3] = [
        ScenarioKey::Optimistic,
        ScenarioKey::Conservative,
        ScenarioKey::Pessimistic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScenarioKey::Optimistic => "Optimistic",
            ScenarioKey::Conservative => "Conservative",
            ScenarioKey::Pessimistic => "Pessimistic",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ScenarioKey::Conservative => {
                "Base case using nominal reservoir and installation inputs."
            }
            ScenarioKey::Optimistic | ScenarioKey::Pessimistic => {
                "Same base inputs; adjust manually via scenario overrides if desired."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q_test: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pwf_test: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_hz: Option<f64>,
}

impl ScenarioOverrides {
    pub fn is_empty(&self) -> bool {
        self.q_test.is_none() && self.pwf_test.is_none() && self.frequency_hz.is_none()
    }

    pub fn has_inflow_override(&self) -> bool {
        self.q_test.is_some() || self.pwf_test.is_some()
    }

    /// Copy of `well` with the test point overridden. A field left unset keeps
    /// the base test point's value; without a base value the override is
    /// incomplete and the test point stays as it was.
    pub fn apply_to(&self, well: &WellInflowSpec) -> WellInflowSpec {
        let mut spec = well.clone();
        let base = well.test_point;
        let flow = self.q_test.or(base.map(|t| t.flow_m3d));
        let pwf = self.pwf_test.or(base.map(|t| t.pwf_bar));
        if let (Some(flow_m3d), Some(pwf_bar)) = (flow, pwf) {
            spec.test_point = Some(TestPoint { flow_m3d, pwf_bar });
        }
        spec
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub key: ScenarioKey,
    pub label: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ScenarioOverrides>,
    pub frequency_hz: f64,
    pub inflow: InflowCurve,
    pub demand: DemandCurve,
    pub electrical: DesignElectrical,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioSet {
    pub order: Vec<ScenarioKey>,
    pub scenarios: BTreeMap<ScenarioKey, ScenarioResult>,
}

impl ScenarioSet {
    pub fn get(&self, key: ScenarioKey) -> Option<&ScenarioResult> {
        self.scenarios.get(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScenarioResult> {
        self.order.iter().filter_map(|k| self.scenarios.get(k))
    }
}

/// Run every scenario over the base hydraulics.
///
/// Scenarios with a test-point override rebuild inflow and demand from a copy
/// of the base well; the rest reuse the base curves. A frequency override only
/// reaches the pump curve and the electrical cascade.
///
/// # Errors
/// Returns error when an overridden well produces invalid inflow or demand.
pub fn run_scenarios(
    case: &WellCase,
    installation: &InstallationSpec,
    base: &Hydraulics,
    catalog: &dyn EquipmentCatalog,
) -> AppResult<ScenarioSet> {
    let base_frequency = case.pump.base_frequency();
    let mut scenarios = BTreeMap::new();

    for key in ScenarioKey::ORDER {
        let overrides = case.scenarios.get(&key).copied().filter(|o| !o.is_empty());
        let ov = overrides.unwrap_or_default();

        let rerun;
        let hydraulics = if ov.has_inflow_override() {
            let well = ov.apply_to(&case.well);
            rerun = compute_hydraulics(&well, installation)?;
            &rerun
        } else {
            base
        };

        let frequency_hz = positive_frequency(ov.frequency_hz).unwrap_or(base_frequency);
        let electrical = electrical_for_design(case, hydraulics, catalog, frequency_hz);

        tracing::debug!(
            scenario = key.label(),
            rerun_inflow = ov.has_inflow_override(),
            frequency_hz,
            flow_max = hydraulics.inflow.flow_max_m3d,
            "scenario computed"
        );

        scenarios.insert(
            key,
            ScenarioResult {
                key,
                label: key.label(),
                description: key.description(),
                overrides,
                frequency_hz,
                inflow: hydraulics.inflow.clone(),
                demand: hydraulics.demand.clone(),
                electrical,
            },
        );
    }

    Ok(ScenarioSet {
        order: ScenarioKey::ORDER.to_vec(),
        scenarios,
    })
}
