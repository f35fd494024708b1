//! esp-electrical: power cascade from the pump shaft to the wellhead.
//!
//! Motor → cable → surface. Motor input power and current follow from shaft
//! power and nameplate data scaled to the operating frequency. Cable losses use
//! segment resistances corrected to their temperature. Surface power adds the
//! losses while reactive power is carried through from the motor.

pub mod cable;
pub mod error;
pub mod motor;
pub mod specs;
pub mod summary;
pub mod surface;

pub use cable::{CableLookup, CableSection, cable_losses, segment_resistance};
pub use error::{ElectricalError, ElectricalResult};
pub use motor::{MotorSection, motor_section};
pub use specs::{CableLayout, CableSpecs, MotorSpecs, MotorType, ThermalProfile, WellContext};
pub use summary::{ElectricalSummary, compute_electrical};
pub use surface::{SurfaceSection, surface_section};
