//! Hydraulic solver for an ESP installation.
//!
//! Builds the head the pump must deliver at each inflow rate (the demand
//! curve), the static system head curve, and intersects a pump curve with the
//! demand curve to find the operating point.

pub mod demand;
pub mod error;
pub mod installation;
pub mod operating_point;
pub mod system_head;

pub use demand::{DemandCurve, DemandPoint, compute_demand};
pub use error::{SolverError, SolverResult};
pub use installation::InstallationSpec;
pub use operating_point::{OperatingPoint, find_operating_point};
pub use system_head::{SystemHeadPoint, compute_system_head};
