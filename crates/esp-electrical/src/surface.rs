//! Wellhead power balance.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSection {
    pub power_kw: f64,
    pub reactive_power_kvar: f64,
    pub apparent_power_kva: f64,
    pub power_factor: Option<f64>,
}

/// Real power adds the cable loss. Reactive power is the motor's,
/// `Q = √max(S_m² − P_m², 0)`.
pub fn surface_section(motor_power_kw: f64, motor_apparent_kva: f64, cable_loss_kw: f64) -> SurfaceSection {
    let power = motor_power_kw + cable_loss_kw;
    let reactive = (motor_apparent_kva.powi(2) - motor_power_kw.powi(2)).max(0.0).sqrt();
    let apparent = (power * power + reactive * reactive).sqrt();
    SurfaceSection {
        power_kw: power,
        reactive_power_kvar: reactive,
        apparent_power_kva: apparent,
        power_factor: (apparent > 0.0).then(|| power / apparent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_loss_keeps_motor_power_factor() {
        let s = surface_section(80.0, 100.0, 0.0);
        assert_eq!(s.power_kw, 80.0);
        assert!((s.reactive_power_kvar - 60.0).abs() < 1e-12);
        assert!((s.apparent_power_kva - 100.0).abs() < 1e-12);
        assert!((s.power_factor.unwrap() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn losses_improve_power_factor() {
        let s = surface_section(80.0, 100.0, 10.0);
        assert!(s.power_factor.unwrap() > 0.8);
    }

    #[test]
    fn zero_power() {
        let s = surface_section(0.0, 0.0, 0.0);
        assert!(s.power_factor.is_none());
    }
}
