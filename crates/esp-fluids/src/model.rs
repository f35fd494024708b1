//! Mixture property model.

use crate::error::{FluidError, FluidResult};
use esp_core::numeric::ensure_finite;
use esp_core::units::constants::BAR_PER_M_PER_SG;
use esp_core::units::{DynVisc, Density, cp, kg_per_m3};
use serde::{Deserialize, Serialize};

/// Produced-fluid description as entered with the well data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluidSpec {
    /// Oil gravity (°API)
    pub api_gravity: f64,
    /// Water cut (percent of total liquid, 0-100)
    pub water_cut_percent: f64,
    /// Produced water specific gravity
    pub water_sg: f64,
    /// Dynamic viscosity of the mixture (cP)
    pub viscosity_cp: f64,
}

impl Default for FluidSpec {
    fn default() -> Self {
        Self {
            api_gravity: 30.0,
            water_cut_percent: 0.0,
            water_sg: 1.0,
            viscosity_cp: 1.0,
        }
    }
}

/// Derived mixture properties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluidProperties {
    /// Mixture specific gravity (water = 1)
    pub specific_gravity: f64,
    /// Mixture density (kg/m³)
    pub density_kg_m3: f64,
    /// Hydrostatic gradient (bar/m)
    pub gradient_bar_per_m: f64,
    /// Dynamic viscosity (cP)
    pub viscosity_cp: f64,
}

/// Oil specific gravity from API gravity.
pub fn oil_specific_gravity(api_gravity: f64) -> f64 {
    141.5 / (131.5 + api_gravity)
}

impl FluidProperties {
    /// Derive mixture properties from the fluid description.
    ///
    /// # Errors
    /// Returns an error for non-finite inputs, water cut outside 0-100, or a
    /// non-positive mixture gravity.
    pub fn from_spec(spec: &FluidSpec) -> FluidResult<Self> {
        ensure_finite(spec.api_gravity, "API gravity")?;
        ensure_finite(spec.water_cut_percent, "water cut")?;
        ensure_finite(spec.water_sg, "water specific gravity")?;
        ensure_finite(spec.viscosity_cp, "viscosity")?;

        if !(0.0..=100.0).contains(&spec.water_cut_percent) {
            return Err(FluidError::OutOfRange {
                what: "water cut",
                value: spec.water_cut_percent,
            });
        }
        if spec.api_gravity <= -131.5 {
            return Err(FluidError::OutOfRange {
                what: "API gravity",
                value: spec.api_gravity,
            });
        }
        if spec.water_sg <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "water specific gravity must be positive",
            });
        }
        if spec.viscosity_cp < 0.0 {
            return Err(FluidError::NonPhysical {
                what: "viscosity cannot be negative",
            });
        }

        let fw = spec.water_cut_percent / 100.0;
        let sg = oil_specific_gravity(spec.api_gravity) * (1.0 - fw) + spec.water_sg * fw;

        Ok(Self {
            specific_gravity: sg,
            density_kg_m3: sg * 1000.0,
            gradient_bar_per_m: sg * BAR_PER_M_PER_SG,
            viscosity_cp: spec.viscosity_cp,
        })
    }

    pub fn density(&self) -> Density {
        kg_per_m3(self.density_kg_m3)
    }

    pub fn viscosity(&self) -> DynVisc {
        cp(self.viscosity_cp)
    }

    /// Convert a pressure (bar) into an equivalent column of this fluid (m).
    pub fn head_from_pressure(&self, p_bar: f64) -> f64 {
        if self.gradient_bar_per_m == 0.0 {
            return 0.0;
        }
        p_bar / self.gradient_bar_per_m
    }

    /// Pressure (bar) exerted by a column of this fluid (m).
    pub fn pressure_from_head(&self, head_m: f64) -> f64 {
        head_m * self.gradient_bar_per_m
    }

    /// Fluid level below the reference pressure, (reference - p) / gradient.
    pub fn level_below(&self, p_bar: f64, reference_bar: f64) -> f64 {
        self.head_from_pressure(reference_bar - p_bar)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn mixture_gravity_between_components(api in 5.0_f64..60.0, wc in 0.0_f64..=100.0) {
            let spec = FluidSpec { api_gravity: api, water_cut_percent: wc, ..FluidSpec::default() };
            let props = FluidProperties::from_spec(&spec).unwrap();
            let oil = oil_specific_gravity(api);
            let lo = oil.min(1.0) - 1e-12;
            let hi = oil.max(1.0) + 1e-12;
            prop_assert!(props.specific_gravity >= lo && props.specific_gravity <= hi);
        }
    }
}
