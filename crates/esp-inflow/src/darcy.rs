//! Radial Darcy inflow in field-metric units.

use crate::error::{InflowError, InflowResult};
use crate::spec::DarcyParams;
use crate::traits::InflowCorrelation;
use esp_core::numeric::ensure_positive;

/// Unit constant for mD·m / (cP·bar) to m³/d.
pub const DARCY_METRIC_CONSTANT: f64 = 0.543;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DarcyRadial {
    pub reservoir_pressure: f64,
    pub j: f64,
}

impl DarcyRadial {
    /// J = 0.543·k·h / (μ·Bo·(ln(re/rw) + S))
    pub fn new(reservoir_pressure: f64, params: &DarcyParams, viscosity_cp: f64) -> InflowResult<Self> {
        ensure_positive(params.permeability_md, "permeability")?;
        ensure_positive(params.thickness_m, "net thickness")?;
        ensure_positive(params.drainage_radius_m, "drainage radius")?;
        ensure_positive(params.wellbore_radius_m, "wellbore radius")?;
        ensure_positive(params.formation_volume_factor, "formation volume factor")?;
        ensure_positive(viscosity_cp, "viscosity")?;

        if params.wellbore_radius_m >= params.drainage_radius_m {
            return Err(InflowError::InvalidInflowInput {
                what: "wellbore radius must be smaller than drainage radius",
            });
        }

        let log_term = (params.drainage_radius_m / params.wellbore_radius_m).ln() + params.skin;
        if log_term <= 0.0 {
            return Err(InflowError::InvalidInflowInput {
                what: "skin makes the radial resistance non-positive",
            });
        }

        let j = DARCY_METRIC_CONSTANT * params.permeability_md * params.thickness_m
            / (viscosity_cp * params.formation_volume_factor * log_term);

        Ok(Self {
            reservoir_pressure,
            j,
        })
    }
}

impl InflowCorrelation for DarcyRadial {
    fn method_label(&self) -> &'static str {
        "Darcy (radial)"
    }

    fn flow_at(&self, pwf: f64) -> f64 {
        (self.j * (self.reservoir_pressure - pwf)).max(0.0)
    }

    fn productivity_index(&self) -> f64 {
        self.j
    }
}
