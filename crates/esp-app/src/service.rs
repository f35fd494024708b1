//! Conditions pipeline: inflow, demand, pump curve, operating point and the
//! electrical cascade for one case.

use crate::case::WellCase;
use crate::error::{AppError, AppResult};
use crate::gas::{DEFAULT_GAS_OIL_RATIO, GasScreening, screen_gas};
use crate::scenario::{ScenarioSet, run_scenarios};
use esp_catalog::EquipmentCatalog;
use esp_components::{PumpCurve, synthesize};
use esp_electrical::{ElectricalSummary, WellContext, compute_electrical};
use esp_fluids::FluidProperties;
use esp_inflow::{InflowCurve, WellInflowSpec, compute_inflow};
use esp_solver::{
    DemandCurve, InstallationSpec, OperatingPoint, SystemHeadPoint, compute_demand,
    compute_system_head, find_operating_point,
};
use serde::Serialize;

/// Fluid, inflow and demand for one well description.
#[derive(Debug, Clone, Serialize)]
pub struct Hydraulics {
    pub fluid: FluidProperties,
    pub inflow: InflowCurve,
    pub demand: DemandCurve,
}

/// Electrical results for a design. Equipment or cascade failures leave the
/// later fields empty and add a warning instead of failing the request.
#[derive(Debug, Clone, Serialize)]
pub struct DesignElectrical {
    pub frequency_hz: f64,
    pub pump_curve: Option<PumpCurve>,
    pub operating_point: Option<OperatingPoint>,
    pub summary: Option<ElectricalSummary>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Conditions {
    pub name: Option<String>,
    pub installation: InstallationSpec,
    pub fluid: FluidProperties,
    pub inflow: InflowCurve,
    pub system_head: Vec<SystemHeadPoint>,
    pub demand: DemandCurve,
    pub electrical: DesignElectrical,
    /// `None` when no intake pressure is known.
    pub gas: Option<GasScreening>,
    pub scenarios: ScenarioSet,
}

/// # Errors
/// Returns error for invalid fluid, inflow or installation input.
pub fn compute_hydraulics(
    well: &WellInflowSpec,
    installation: &InstallationSpec,
) -> AppResult<Hydraulics> {
    let fluid = FluidProperties::from_spec(&well.fluid)?;
    let inflow = compute_inflow(well)?;
    let demand = compute_demand(installation, &fluid, &inflow)?;
    Ok(Hydraulics {
        fluid,
        inflow,
        demand,
    })
}

/// Synthesize the installed curve for a catalog pump.
///
/// # Errors
/// Returns error for an unknown pump id or invalid curve parameters.
pub fn pump_curve_for(
    catalog: &dyn EquipmentCatalog,
    pump_id: &str,
    frequency_hz: f64,
    stages: u32,
    point_count: usize,
) -> AppResult<PumpCurve> {
    let coeffs = catalog.require_pump(pump_id)?;
    Ok(synthesize(coeffs, frequency_hz, stages, point_count)?)
}

/// The case's selected pump at its base frequency.
///
/// # Errors
/// Returns error when no pump is selected or the curve cannot be built.
pub fn selected_pump_curve(case: &WellCase, catalog: &dyn EquipmentCatalog) -> AppResult<PumpCurve> {
    let pump_id = case
        .pump
        .pump_id
        .as_deref()
        .ok_or_else(|| AppError::InvalidInput("no pump selected".to_string()))?;
    pump_curve_for(
        catalog,
        pump_id,
        case.pump.base_frequency(),
        case.pump.stages,
        case.pump.point_count,
    )
}

/// Pump curve, operating point and electrical cascade at `frequency_hz`.
///
/// Never fails: a missing pump or motor selection, a catalog miss, curves that
/// do not cross and cascade errors each stop the chain with a warning.
pub fn electrical_for_design(
    case: &WellCase,
    hydraulics: &Hydraulics,
    catalog: &dyn EquipmentCatalog,
    frequency_hz: f64,
) -> DesignElectrical {
    let mut out = DesignElectrical {
        frequency_hz,
        pump_curve: None,
        operating_point: None,
        summary: None,
        warnings: Vec::new(),
    };

    let Some(pump_id) = case.pump.pump_id.as_deref() else {
        return skip(out, "No pump selected; electrical calculations skipped".to_string());
    };

    let curve = match pump_curve_for(
        catalog,
        pump_id,
        frequency_hz,
        case.pump.stages,
        case.pump.point_count,
    ) {
        Ok(curve) => curve,
        Err(e) => return skip(out, format!("Pump curve unavailable: {e}")),
    };

    let setting_depth_m = hydraulics.demand.setting_depth_m;
    let op = find_operating_point(&curve, &hydraulics.demand, setting_depth_m);
    out.pump_curve = Some(curve);
    let Some(op) = op else {
        return skip(
            out,
            "No operating point found between pump and demand".to_string(),
        );
    };
    out.operating_point = Some(op);

    let Some(motor_id) = case.motor_id.as_deref() else {
        return skip(out, "No motor selected; electrical calculations skipped".to_string());
    };
    let motor = match catalog.require_motor(motor_id) {
        Ok(motor) => motor,
        Err(e) => return skip(out, format!("{e}; electrical calculations skipped")),
    };

    let well = WellContext {
        setting_depth_m,
        specific_gravity: hydraulics.fluid.specific_gravity,
    };
    match compute_electrical(
        &op,
        motor,
        &case.cable,
        catalog,
        &case.thermal,
        &well,
        frequency_hz,
    ) {
        Ok(summary) => {
            tracing::debug!(
                flow = op.flow_m3d,
                surface_kw = summary.surface_power_kw,
                current_a = summary.motor_current_a,
                "electrical cascade computed"
            );
            out.summary = Some(summary);
            out
        }
        Err(e) => skip(out, e.to_string()),
    }
}

fn skip(mut out: DesignElectrical, warning: String) -> DesignElectrical {
    tracing::warn!(frequency_hz = out.frequency_hz, "{warning}");
    out.warnings.push(warning);
    out
}

/// Full conditions run: base hydraulics, static system head, base electrical,
/// gas screening and every scenario.
///
/// # Errors
/// Returns error for invalid well or installation input. Equipment problems
/// are reported as warnings.
pub fn compute_conditions(case: &WellCase, catalog: &dyn EquipmentCatalog) -> AppResult<Conditions> {
    let installation = case.resolved_installation()?;
    let base = compute_hydraulics(&case.well, &installation)?;
    let system_head = compute_system_head(
        &installation,
        &base.fluid,
        base.inflow.flow_max_m3d,
        case.well.n_points,
    )?;

    let electrical = electrical_for_design(case, &base, catalog, case.pump.base_frequency());

    let intake = case
        .design
        .intake_pressure_bar
        .or(electrical.operating_point.map(|op| op.intake_pressure_bar));
    let gas = intake.map(|pip| {
        screen_gas(
            case.design.gas_oil_ratio.unwrap_or(DEFAULT_GAS_OIL_RATIO),
            pip,
            case.well.bubble_point(),
        )
    });

    let scenarios = run_scenarios(case, &installation, &base, catalog)?;

    tracing::info!(
        method = base.inflow.label.as_str(),
        flow_max = base.inflow.flow_max_m3d,
        operating_flow = electrical.operating_point.map(|op| op.flow_m3d),
        warnings = electrical.warnings.len(),
        "conditions computed"
    );

    Ok(Conditions {
        name: case.name.clone(),
        installation,
        fluid: base.fluid,
        inflow: base.inflow,
        system_head,
        demand: base.demand,
        electrical,
        gas,
        scenarios,
    })
}
