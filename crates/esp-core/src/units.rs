// esp-core/src/units.rs
//
// The sizing chain works in oilfield-metric units (bar, m, m³/d, mm, cP, hp, kW).
// These helpers move field values into uom SI quantities and back, so every
// unit change happens in one place.

use uom::si::f64::{
    Area as UomArea, DynamicViscosity as UomDynamicViscosity, Length as UomLength,
    MassDensity as UomMassDensity, Pressure as UomPressure,
    Velocity as UomVelocity, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type Velocity = UomVelocity;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

/// Dynamic viscosity from centipoise (1 cP = 1 mPa·s).
#[inline]
pub fn cp(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v * 1e-3)
}

/// Volumetric flow from m³/d.
#[inline]
pub fn m3_per_day(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v / constants::SECONDS_PER_DAY)
}

/// Pressure in bar.
#[inline]
pub fn to_bar(p: Pressure) -> f64 {
    use uom::si::pressure::bar;
    p.get::<bar>()
}

/// Shaft horsepower to kW with the oilfield factor used by motor nameplates.
#[inline]
pub fn hp_to_kw(hp: f64) -> f64 {
    hp * constants::KW_PER_HP
}

pub mod constants {
    pub const SECONDS_PER_DAY: f64 = 86_400.0;

    /// Hydrostatic gradient of a 1 g/cm³ column, bar/m (ρ·g with g = 9.81).
    pub const BAR_PER_M_PER_SG: f64 = 0.0981;

    /// Nameplate conversion, kW per hp.
    pub const KW_PER_HP: f64 = 0.7457;

    /// √3 as used for three-phase power on motor data sheets.
    pub const SQRT_3: f64 = 1.73205;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = bar(150.0);
        let _l = m(1500.0);
        let _d = mm(62.0);
        let _rho = kg_per_m3(990.0);
        let _mu = cp(1.0);
        let _q = m3_per_day(100.0);
    }

    #[test]
    fn field_units_round_trip_through_si() {
        assert!((to_bar(bar(12.5)) - 12.5).abs() < 1e-12);
        assert!((bar(1.0).value - 100_000.0).abs() < 1e-9);
        assert!((mm(62.0).value - 0.062).abs() < 1e-12);
        assert!((cp(2.0).value - 0.002).abs() < 1e-15);
        assert!((m3_per_day(86_400.0).value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn horsepower_uses_nameplate_factor() {
        assert!((hp_to_kw(100.0) - 74.57).abs() < 1e-9);
    }
}
