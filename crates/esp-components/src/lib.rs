//! esp-components: equipment models for an ESP installation.
//!
//! Provides:
//! - Tubing with Darcy-Weisbach friction, plus standard sizes and roughness presets
//! - Pump performance curves synthesized from catalog polynomials
//!
//! # Example
//!
//! ```
//! use esp_components::{PumpCoefficientSet, synthesize};
//!
//! let coeffs = PumpCoefficientSet {
//!     id: "demo".into(),
//!     min_flow_m3d: 50.0,
//!     max_flow_m3d: 200.0,
//!     nominal_rpm: Some(3500.0),
//!     head_coefficients: vec![10.0, -0.02, -0.0001],
//!     power_coefficients: vec![150.0, 0.5],
//!     efficiency_coefficients: vec![],
//! };
//! let curve = synthesize(&coeffs, 60.0, 100, 300).unwrap();
//! assert!(curve.scaled.head_m[0] > 0.0);
//! ```

pub mod common;
pub mod error;
pub mod pump;
pub mod tubing;

// Re-exports
pub use error::{ComponentError, ComponentResult};
pub use pump::{
    DEFAULT_PUMP_POINTS, OperatingRange, PumpCoefficientSet, PumpCurve, PumpSeries, synthesize,
};
pub use tubing::{RoughnessPreset, TUBING_SIZES, Tubing, TubingSize, tubing_by_name};
