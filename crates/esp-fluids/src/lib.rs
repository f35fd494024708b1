//! esp-fluids: produced-fluid properties for the ESP sizing chain.
//!
//! The well stream is treated as a dead-oil/water mixture. Oil specific gravity
//! comes from API gravity, water from its own specific gravity, and the mixture
//! is a water-cut weighted average. From that the crate derives:
//! - mixture density (kg/m³)
//! - hydrostatic gradient (bar/m)
//! - dynamic viscosity (cP, passed through from the well data)
//!
//! # Example
//!
//! ```
//! use esp_fluids::{FluidProperties, FluidSpec};
//!
//! let spec = FluidSpec {
//!     api_gravity: 21.0,
//!     water_cut_percent: 95.0,
//!     ..FluidSpec::default()
//! };
//! let props = FluidProperties::from_spec(&spec).unwrap();
//! assert!(props.gradient_bar_per_m > 0.09);
//! ```

pub mod error;
pub mod model;

pub use error::{FluidError, FluidResult};
pub use model::{FluidProperties, FluidSpec, oil_specific_gravity};
