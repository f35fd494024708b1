//! Free-gas screening at the pump intake.

use serde::{Deserialize, Serialize};

pub const DEFAULT_GAS_OIL_RATIO: f64 = 100.0;
/// Free-gas estimate above which the pump head is derated.
pub const FREE_GAS_LIMIT: f64 = 100.0;
pub const DERATED_HEAD_FACTOR: f64 = 0.95;
pub const DERATED_FREE_GAS_PERCENT: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasScreening {
    pub free_gas_estimate: Option<f64>,
    pub head_correction_factor: f64,
    pub free_gas_percent: f64,
    pub warning: Option<String>,
    pub message: String,
}

/// Screen the intake for free gas.
///
/// Below the bubble point the free gas is estimated as `GOR · pb / pip`. An
/// estimate above [`FREE_GAS_LIMIT`] derates the head by 5 %. A non-positive
/// intake pressure is treated as fully gassed.
pub fn screen_gas(gas_oil_ratio: f64, intake_pressure_bar: f64, bubble_point_bar: f64) -> GasScreening {
    if intake_pressure_bar < bubble_point_bar {
        let estimate = if intake_pressure_bar > 0.0 {
            gas_oil_ratio * (bubble_point_bar / intake_pressure_bar)
        } else {
            f64::INFINITY
        };
        if estimate > FREE_GAS_LIMIT {
            tracing::warn!(
                intake_pressure_bar,
                bubble_point_bar,
                estimate,
                "high free gas at intake"
            );
            let message = "High free gas volume detected".to_string();
            return GasScreening {
                free_gas_estimate: estimate.is_finite().then_some(estimate),
                head_correction_factor: DERATED_HEAD_FACTOR,
                free_gas_percent: DERATED_FREE_GAS_PERCENT,
                warning: Some(message.clone()),
                message,
            };
        }
        return GasScreening {
            free_gas_estimate: Some(estimate),
            ..dissolved()
        };
    }
    dissolved()
}

fn dissolved() -> GasScreening {
    GasScreening {
        free_gas_estimate: None,
        head_correction_factor: 1.0,
        free_gas_percent: 0.0,
        warning: None,
        message: "Dissolved gas, no significant effects expected".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn above_bubble_point_is_dissolved() {
        let g = screen_gas(100.0, 130.0, 120.0);
        assert_eq!(g.head_correction_factor, 1.0);
        assert_eq!(g.free_gas_percent, 0.0);
        assert!(g.warning.is_none());
    }

    #[test]
    fn below_bubble_point_with_high_gor_derates() {
        let g = screen_gas(100.0, 500.0, 600.0);
        assert_eq!(g.head_correction_factor, 0.95);
        assert_eq!(g.free_gas_percent, 10.0);
        assert!(g.warning.is_some());
        assert!((g.free_gas_estimate.unwrap() - 120.0).abs() < 1e-9);
    }

    #[test]
    fn below_bubble_point_with_low_gor_is_not_derated() {
        let g = screen_gas(50.0, 100.0, 120.0);
        assert_eq!(g.head_correction_factor, 1.0);
        assert!((g.free_gas_estimate.unwrap() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn zero_intake_pressure_is_fully_gassed() {
        let g = screen_gas(10.0, 0.0, 120.0);
        assert_eq!(g.head_correction_factor, 0.95);
        assert!(g.free_gas_estimate.is_none());
    }
}
