//! Motor input power, current and loading at the operating frequency.

use crate::error::{ElectricalError, ElectricalResult};
use crate::specs::{MotorSpecs, MotorType};
use esp_core::numeric::as_fraction;
use esp_core::units::constants::SQRT_3;
use esp_core::units::hp_to_kw;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotorSection {
    pub power_kw: f64,
    pub current_a: f64,
    pub voltage_v: f64,
    pub load_percent: Option<f64>,
    pub apparent_power_kva: f64,
    pub power_factor: f64,
    pub efficiency: f64,
    /// Frequency effect factor
    pub fef: f64,
    pub motor_type: MotorType,
}

fn positive(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite() && *x > 0.0)
}

/// ```text
/// fef  = f / f_nominal            (×2 for permanent magnet)
/// V    = V_nominal·fef
/// P_kW = P_hp/η · 0.7457
/// I    = P_kW·1000 / (√3·V·cosφ)
/// ```
pub fn motor_section(
    motor: &MotorSpecs,
    shaft_power_hp: f64,
    frequency_hz: f64,
) -> ElectricalResult<MotorSection> {
    if !(shaft_power_hp.is_finite() && shaft_power_hp > 0.0) {
        return Err(ElectricalError::MissingShaftPower);
    }
    if !(frequency_hz.is_finite() && frequency_hz > 0.0) {
        return Err(ElectricalError::InvalidFrequency {
            value: frequency_hz,
        });
    }
    let efficiency = positive(motor.efficiency.map(as_fraction))
        .ok_or(ElectricalError::InvalidMotorEfficiency)?;
    let power_factor =
        positive(motor.power_factor.map(as_fraction)).ok_or(ElectricalError::InvalidPowerFactor)?;
    let v_nominal = positive(motor.voltage_nominal_v).ok_or(ElectricalError::MissingNameplate {
        what: "nominal voltage",
    })?;
    let hp_nominal = positive(motor.hp_nominal).ok_or(ElectricalError::MissingNameplate {
        what: "nominal horsepower",
    })?;
    let f_nominal = positive(motor.frequency_nominal_hz).ok_or(
        ElectricalError::MissingNameplate {
            what: "nominal frequency",
        },
    )?;

    let mut fef = frequency_hz / f_nominal;
    if motor.motor_type == MotorType::PermanentMagnet {
        fef *= 2.0;
    }

    let voltage = v_nominal * fef;
    let power_kw = hp_to_kw(shaft_power_hp / efficiency);
    let current = power_kw * 1000.0 / (voltage * power_factor * SQRT_3);
    let developed_hp = hp_nominal * fef;
    let load_percent = (developed_hp > 0.0).then(|| shaft_power_hp / developed_hp * 100.0);

    Ok(MotorSection {
        power_kw,
        current_a: current,
        voltage_v: voltage,
        load_percent,
        apparent_power_kva: power_kw / power_factor,
        power_factor,
        efficiency,
        fef,
        motor_type: motor.motor_type,
    })
}
