//! esp-core: shared foundation for the ESP sizing workspace.
//!
//! Contains:
//! - units (uom SI types, field-unit constructors and conversions)
//! - numeric (Real + tolerances + float helpers)
//! - series (sampled curves and clamped linear interpolation)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod series;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{EspError, EspResult};
pub use numeric::*;
pub use series::{interpolate, linspace};
pub use units::*;
