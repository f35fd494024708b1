//! Engineering checks on a selected pump and motor.

use crate::case::WellCase;
use crate::service::selected_pump_curve;
use esp_catalog::EquipmentCatalog;
use esp_electrical::MotorSpecs;
use serde::Serialize;
use std::f64::consts::PI;

/// Shaft power above this fraction of motor rating draws a warning.
pub const SHAFT_LOAD_LIMIT: f64 = 0.9;
/// Allowable torsional shear for common shaft steel (MPa).
pub const ALLOWED_SHEAR_MPA: f64 = 40.0;
pub const W_PER_HP: f64 = 745.7;
/// Mid-curve head above which protector thrust should be reviewed (m).
pub const THRUST_HEAD_LIMIT_M: f64 = 2000.0;
pub const VOLTAGE_DROP_LIMIT_PERCENT: f64 = 5.0;
/// Rated current multiplier for the 110% load point used in voltage drop.
pub const FULL_LOAD_CURRENT_FACTOR: f64 = 1.1;
pub const MIN_ANNULAR_VELOCITY_M_S: f64 = 0.3;
/// Motor temperature rise per percent of load (°C).
pub const TEMPERATURE_RISE_PER_LOAD_PERCENT: f64 = 0.3;

const DEFAULT_ANNULAR_VELOCITY_M_S: f64 = 1.5;
const DEFAULT_BOTTOMHOLE_TEMPERATURE_C: f64 = 100.0;
const DEFAULT_CABLE_LENGTH_M: f64 = 1000.0;
const DEFAULT_CABLE_RESISTANCE_OHM_PER_KM: f64 = 0.2;
const DEFAULT_CURRENT_A: f64 = 100.0;
const DEFAULT_SUPPLY_VOLTAGE_V: f64 = 2300.0;
const DEFAULT_MOTOR_HP: f64 = 100.0;
const DEFAULT_MOTOR_MAX_TEMPERATURE_C: f64 = 250.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    pub status: CheckStatus,
    pub message: String,
}

impl CheckResult {
    fn ok(message: String) -> Self {
        Self {
            status: CheckStatus::Ok,
            message,
        }
    }

    fn warning(message: String) -> Self {
        Self {
            status: CheckStatus::Warning,
            message,
        }
    }

    fn error(message: String) -> Self {
        Self {
            status: CheckStatus::Error,
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverallStatus {
    Ok,
    ReviewRequired,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub shaft_load: CheckResult,
    pub protector_thrust: CheckResult,
    pub voltage_drop: CheckResult,
    pub motor_cooling: CheckResult,
    pub motor_temperature: CheckResult,
    pub overall_status: OverallStatus,
}

impl ValidationReport {
    pub fn checks(&self) -> [(&'static str, &CheckResult); 5] {
        [
            ("shaft_load", &self.shaft_load),
            ("protector_thrust", &self.protector_thrust),
            ("voltage_drop", &self.voltage_drop),
            ("motor_cooling", &self.motor_cooling),
            ("motor_temperature", &self.motor_temperature),
        ]
    }
}

/// Mid-curve sample of the selected pump: (head m, shaft power hp).
type MidCurve = Result<(f64, f64), String>;

/// Run every design check. Overall status is OK only when every check is OK.
pub fn validate_design(case: &WellCase, catalog: &dyn EquipmentCatalog) -> ValidationReport {
    let mid: MidCurve = selected_pump_curve(case, catalog)
        .map_err(|e| e.to_string())
        .and_then(|curve| {
            curve
                .mid_point()
                .map(|(_, head, power)| (head, power))
                .ok_or_else(|| format!("Pump '{}' has an empty curve", curve.pump_id))
        });
    let motor = case.motor_id.as_deref().and_then(|id| catalog.motor_by_id(id));

    let shaft_load = check_shaft_load(&mid, motor);
    let protector_thrust = check_protector_thrust(&mid);
    let voltage_drop = check_voltage_drop(case, motor);
    let motor_cooling = check_motor_cooling(case);
    let motor_temperature = check_motor_temperature(case, &mid, motor);

    let all_ok = [
        &shaft_load,
        &protector_thrust,
        &voltage_drop,
        &motor_cooling,
        &motor_temperature,
    ]
    .iter()
    .all(|c| c.status == CheckStatus::Ok);
    let overall_status = if all_ok {
        OverallStatus::Ok
    } else {
        OverallStatus::ReviewRequired
    };

    tracing::debug!(?overall_status, "design validated");

    ValidationReport {
        shaft_load,
        protector_thrust,
        voltage_drop,
        motor_cooling,
        motor_temperature,
        overall_status,
    }
}

/// Torsional shear of a solid shaft (MPa). Diameters above 50 are millimetres,
/// otherwise metres.
pub fn torsional_stress_mpa(shaft_power_hp: f64, rpm: f64, shaft_diameter: f64) -> Option<f64> {
    if !(rpm.is_finite() && rpm > 0.0 && shaft_diameter.is_finite() && shaft_diameter > 0.0) {
        return None;
    }
    let d_m = if shaft_diameter > 50.0 {
        shaft_diameter / 1000.0
    } else {
        shaft_diameter
    };
    let torque_nm = shaft_power_hp * W_PER_HP * 60.0 / (2.0 * PI * rpm);
    Some(16.0 * torque_nm / (PI * d_m.powi(3)) / 1e6)
}

fn check_shaft_load(mid: &MidCurve, motor: Option<&MotorSpecs>) -> CheckResult {
    let (_, required_hp) = match mid {
        Ok(m) => *m,
        Err(e) => return CheckResult::error(e.clone()),
    };
    let Some(motor_hp) = motor.and_then(|m| m.hp_nominal) else {
        return CheckResult::warning(
            "Motor power not found; shaft load cannot be validated".to_string(),
        );
    };

    let mut result = if required_hp > motor_hp * SHAFT_LOAD_LIMIT {
        CheckResult::warning(format!(
            "Required shaft power ({required_hp:.2} hp) exceeds 90% of motor rating ({motor_hp:.2} hp)."
        ))
    } else {
        CheckResult::ok(format!(
            "Required shaft power ({required_hp:.2} hp) within motor capacity ({motor_hp:.2} hp)."
        ))
    };

    let stress = motor.and_then(|m| match (m.rpm, m.shaft_diameter) {
        (Some(rpm), Some(d)) => torsional_stress_mpa(required_hp, rpm, d),
        _ => None,
    });
    if let Some(tau) = stress {
        result
            .message
            .push_str(&format!(" Estimated torsional stress: {tau:.1} MPa."));
        if tau > ALLOWED_SHEAR_MPA {
            result.status = CheckStatus::Error;
            result
                .message
                .push_str(&format!(" Exceeds design limit (~{ALLOWED_SHEAR_MPA} MPa)."));
        }
    }
    result
}

fn check_protector_thrust(mid: &MidCurve) -> CheckResult {
    match mid {
        Err(e) => CheckResult::error(e.clone()),
        Ok((head, _)) if *head > THRUST_HEAD_LIMIT_M => CheckResult::warning(format!(
            "High pump head ({head:.1} m). Review axial thrust."
        )),
        Ok((head, _)) => {
            CheckResult::ok(format!("Pump head ({head:.1} m) within reasonable limits."))
        }
    }
}

fn check_voltage_drop(case: &WellCase, motor: Option<&MotorSpecs>) -> CheckResult {
    let d = &case.design;
    let length_m = d.cable_length_m.unwrap_or(DEFAULT_CABLE_LENGTH_M);
    let r_per_km = d
        .cable_resistance_ohm_per_km
        .unwrap_or(DEFAULT_CABLE_RESISTANCE_OHM_PER_KM);
    let amps = motor
        .and_then(|m| m.rated_current_a)
        .filter(|a| *a > 0.0)
        .map(|a| a * FULL_LOAD_CURRENT_FACTOR)
        .or(d.estimated_current_a)
        .unwrap_or(DEFAULT_CURRENT_A);
    let voltage = motor
        .and_then(|m| m.voltage_nominal_v)
        .or(d.supply_voltage_v)
        .unwrap_or(DEFAULT_SUPPLY_VOLTAGE_V);
    if !(voltage.is_finite() && voltage > 0.0) {
        return CheckResult::error(format!("Invalid supply voltage: {voltage}"));
    }

    let drop_percent = amps * r_per_km * (length_m / 1000.0) / voltage * 100.0;
    if drop_percent > VOLTAGE_DROP_LIMIT_PERCENT {
        CheckResult::warning(format!(
            "Estimated voltage drop {drop_percent:.1}% (>5%)."
        ))
    } else {
        CheckResult::ok(format!("Estimated voltage drop {drop_percent:.1}% (<5%)."))
    }
}

fn check_motor_cooling(case: &WellCase) -> CheckResult {
    let v = case
        .design
        .annular_velocity_m_s
        .unwrap_or(DEFAULT_ANNULAR_VELOCITY_M_S);
    if v < MIN_ANNULAR_VELOCITY_M_S {
        CheckResult::warning(format!(
            "Low annular velocity: {v:.2} m/s. Consider a shroud."
        ))
    } else {
        CheckResult::ok(format!("Estimated annular velocity: {v:.2} m/s."))
    }
}

fn check_motor_temperature(
    case: &WellCase,
    mid: &MidCurve,
    motor: Option<&MotorSpecs>,
) -> CheckResult {
    let Some(motor) = motor else {
        return CheckResult::error(match case.motor_id.as_deref() {
            Some(id) => format!("Motor '{id}' not found in catalog"),
            None => "No motor selected".to_string(),
        });
    };
    let bottomhole = case
        .design
        .bottomhole_temperature_c
        .unwrap_or(DEFAULT_BOTTOMHOLE_TEMPERATURE_C);
    let required_hp = mid.as_ref().map(|(_, p)| *p).unwrap_or(0.0);
    let motor_hp = motor.hp_nominal.unwrap_or(DEFAULT_MOTOR_HP);

    let load_percent = if motor_hp > 0.0 {
        (required_hp / motor_hp * 100.0).min(200.0)
    } else {
        100.0
    };
    let estimate = bottomhole + load_percent * TEMPERATURE_RISE_PER_LOAD_PERCENT;
    let limit = motor
        .max_temperature_c
        .unwrap_or(DEFAULT_MOTOR_MAX_TEMPERATURE_C);

    if estimate > limit {
        CheckResult::error(format!(
            "Estimated temperature {estimate:.1}°C exceeds limit {limit}°C."
        ))
    } else {
        CheckResult::ok(format!(
            "Estimated temperature {estimate:.1}°C (< {limit}°C)."
        ))
    }
}
