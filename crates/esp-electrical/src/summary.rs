//! Full cascade at an operating point.

use crate::cable::{CableLookup, cable_losses};
use crate::error::ElectricalResult;
use crate::motor::motor_section;
use crate::specs::{CableLayout, MotorSpecs, MotorType, ThermalProfile, WellContext};
use crate::surface::surface_section;
use esp_solver::OperatingPoint;
use serde::{Deserialize, Serialize};

/// Hydraulic power constant for m³/d · m · SG → kW.
pub const HYDRAULIC_POWER_CONSTANT: f64 = 0.000_113_54;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricalSummary {
    pub motor_power_kw: f64,
    pub motor_current_a: f64,
    pub motor_voltage_v: f64,
    pub motor_load_percent: Option<f64>,
    pub motor_apparent_power_kva: f64,
    pub motor_power_factor: f64,
    pub motor_type: MotorType,
    pub fef: f64,
    pub cable_resistance_ohm: f64,
    pub cable_loss_kw: f64,
    pub cable_voltage_drop_v: f64,
    pub surface_voltage_v: f64,
    pub surface_power_kw: f64,
    pub surface_reactive_power_kvar: f64,
    pub surface_apparent_power_kva: f64,
    pub surface_power_factor: Option<f64>,
    pub system_efficiency: Option<f64>,
    /// Surface kW per m³/d per 1000 m of lift
    pub energy_index: Option<f64>,
    pub intake_temperature_c: f64,
    pub surface_temperature_c: f64,
    pub operating_point: OperatingPoint,
    pub warnings: Vec<String>,
}

/// Motor → cable → surface at `frequency_hz`.
///
/// # Errors
/// Missing or non-positive shaft power, invalid nameplate data, missing cable
/// layout values or an unknown cable id.
pub fn compute_electrical(
    operating_point: &OperatingPoint,
    motor: &MotorSpecs,
    layout: &CableLayout,
    cables: &(impl CableLookup + ?Sized),
    thermal: &ThermalProfile,
    well: &WellContext,
    frequency_hz: f64,
) -> ElectricalResult<ElectricalSummary> {
    let m = motor_section(motor, operating_point.shaft_power_hp, frequency_hz)?;

    let intake_temp = thermal.temperature_at(well.setting_depth_m);
    let surface_temp = thermal.surface_ambient_c;
    let cable = cable_losses(
        layout,
        cables,
        well.setting_depth_m,
        intake_temp,
        surface_temp,
        m.current_a,
    )?;
    let s = surface_section(m.power_kw, m.apparent_power_kva, cable.loss_kw);

    let q = operating_point.flow_m3d;
    let hydraulic_kw = q * operating_point.head_m * well.specific_gravity * HYDRAULIC_POWER_CONSTANT;
    let system_efficiency = (s.power_kw > 0.0).then(|| hydraulic_kw / s.power_kw);
    let energy_index = (s.power_kw > 0.0 && q > 0.0 && well.setting_depth_m > 0.0)
        .then(|| s.power_kw / q / well.setting_depth_m * 1000.0);

    let mut warnings = Vec::new();
    if !motor.is_complete {
        warnings.push("Motor nameplate data incomplete; results are approximate".to_string());
    }
    if let Some(load) = m.load_percent.filter(|l| *l > 100.0) {
        warnings.push(format!("Motor overloaded at {load:.1}% of capacity"));
    }

    tracing::debug!(
        motor = motor.id.as_str(),
        motor_kw = m.power_kw,
        current = m.current_a,
        cable_loss_kw = cable.loss_kw,
        surface_kw = s.power_kw,
        "electrical cascade computed"
    );

    Ok(ElectricalSummary {
        motor_power_kw: m.power_kw,
        motor_current_a: m.current_a,
        motor_voltage_v: m.voltage_v,
        motor_load_percent: m.load_percent,
        motor_apparent_power_kva: m.apparent_power_kva,
        motor_power_factor: m.power_factor,
        motor_type: m.motor_type,
        fef: m.fef,
        cable_resistance_ohm: cable.resistance_ohm,
        cable_loss_kw: cable.loss_kw,
        cable_voltage_drop_v: cable.voltage_drop_v,
        surface_voltage_v: m.voltage_v + cable.voltage_drop_v,
        surface_power_kw: s.power_kw,
        surface_reactive_power_kvar: s.reactive_power_kvar,
        surface_apparent_power_kva: s.apparent_power_kva,
        surface_power_factor: s.power_factor,
        system_efficiency,
        energy_index,
        intake_temperature_c: intake_temp,
        surface_temperature_c: surface_temp,
        operating_point: *operating_point,
        warnings,
    })
}
