//! Common utilities for component calculations.

use crate::error::{ComponentError, ComponentResult};
use esp_core::numeric::ensure_finite;

/// Flows below this are treated as zero (m³/d).
pub const EPSILON_FLOW: f64 = 1e-12;

/// Ensure a value is finite, returning ComponentError if not.
pub fn check_finite(value: f64, what: &'static str) -> ComponentResult<()> {
    ensure_finite(value, what).map_err(|_| ComponentError::NonPhysical { what })?;
    Ok(())
}

/// Evaluate Σ cᵢ·xⁱ with coefficients in ascending power (Horner).
pub fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyval_ascending_order() {
        assert_eq!(polyval(&[], 3.0), 0.0);
        assert_eq!(polyval(&[2.0], 3.0), 2.0);
        // 1 + 2x + 3x² at x = 2
        assert_eq!(polyval(&[1.0, 2.0, 3.0], 2.0), 17.0);
    }

    #[test]
    fn check_finite_rejects_inf() {
        assert!(check_finite(f64::INFINITY, "head").is_err());
        assert!(check_finite(1.0, "head").is_ok());
    }
}
