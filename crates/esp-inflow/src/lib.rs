//! esp-inflow: reservoir inflow performance (IPR) for a producing well.
//!
//! Provides four correlations behind the `InflowCorrelation` trait:
//! - Linear productivity index
//! - Composite Vogel (linear above bubble point, Vogel below)
//! - Fetkovich back-pressure
//! - Darcy radial flow
//!
//! `compute_inflow` discretizes the flowing bottomhole pressure from reservoir
//! pressure down to zero and returns an immutable `InflowCurve`.
//!
//! # Example
//!
//! ```
//! use esp_inflow::{IprMethod, TestPoint, WellInflowSpec, compute_inflow};
//!
//! let spec = WellInflowSpec {
//!     method: IprMethod::Vogel,
//!     reservoir_pressure_bar: 150.0,
//!     bubble_point_bar: Some(120.0),
//!     test_point: Some(TestPoint { flow_m3d: 100.0, pwf_bar: 20.0 }),
//!     ..WellInflowSpec::default()
//! };
//! let curve = compute_inflow(&spec).unwrap();
//! assert_eq!(curve.points[0].pwf_bar, 150.0);
//! ```

pub mod curve;
pub mod darcy;
pub mod engine;
pub mod error;
pub mod fetkovich;
pub mod linear;
pub mod spec;
pub mod traits;
pub mod vogel;

// Re-exports
pub use curve::{InflowCurve, InflowParameters, InflowPoint};
pub use darcy::DarcyRadial;
pub use engine::{build_correlation, compute_inflow};
pub use error::{InflowError, InflowResult};
pub use fetkovich::Fetkovich;
pub use linear::LinearPi;
pub use spec::{DarcyParams, IprMethod, TestPoint, WellInflowSpec};
pub use traits::InflowCorrelation;
pub use vogel::CompositeVogel;
