//! Conversions for imperial psychrometric units.
//!
//! `uom` covers temperature, pressure, length, mass, and density in imperial
//! units directly. The per-pound energy and volume units used on
//! psychrometric charts are built here from their exact SI definitions.

use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{Mass, SpecificHeatCapacity, Volume},
    mass::pound,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    volume::cubic_foot,
};

use crate::{SpecificEnthalpy, SpecificGasConstant, SpecificVolume};

/// J/kg in one Btu (IT) per pound.
pub const JOULE_PER_KILOGRAM_PER_BTU_PER_POUND: f64 = 2_326.0;

/// J/(kg·K) in one Btu (IT) per pound per degree Fahrenheit.
pub const JOULE_PER_KILOGRAM_KELVIN_PER_BTU_PER_POUND_FAHRENHEIT: f64 = 4_186.8;

/// J/(kg·K) in one foot pound-force per pound per degree Rankine.
pub const JOULE_PER_KILOGRAM_KELVIN_PER_FOOT_POUND_FORCE_PER_POUND_RANKINE: f64 = 5.380_320_456;

/// Creates a specific enthalpy from Btu/lb.
#[must_use]
pub fn btu_per_pound(value: f64) -> SpecificEnthalpy {
    SpecificEnthalpy::new::<joule_per_kilogram>(value * JOULE_PER_KILOGRAM_PER_BTU_PER_POUND)
}

/// Returns a specific enthalpy in Btu/lb.
#[must_use]
pub fn in_btu_per_pound(enthalpy: SpecificEnthalpy) -> f64 {
    enthalpy.get::<joule_per_kilogram>() / JOULE_PER_KILOGRAM_PER_BTU_PER_POUND
}

/// Creates a specific heat capacity from Btu/(lb·°F).
#[must_use]
pub fn btu_per_pound_fahrenheit(value: f64) -> SpecificHeatCapacity {
    SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(
        value * JOULE_PER_KILOGRAM_KELVIN_PER_BTU_PER_POUND_FAHRENHEIT,
    )
}

/// Returns a specific heat capacity in Btu/(lb·°F).
#[must_use]
pub fn in_btu_per_pound_fahrenheit(cp: SpecificHeatCapacity) -> f64 {
    cp.get::<joule_per_kilogram_kelvin>() / JOULE_PER_KILOGRAM_KELVIN_PER_BTU_PER_POUND_FAHRENHEIT
}

/// Creates a specific gas constant from ft·lbf/(lb·°R).
#[must_use]
pub fn foot_pound_force_per_pound_rankine(value: f64) -> SpecificGasConstant {
    SpecificGasConstant::new::<joule_per_kilogram_kelvin>(
        value * JOULE_PER_KILOGRAM_KELVIN_PER_FOOT_POUND_FORCE_PER_POUND_RANKINE,
    )
}

/// Returns a specific gas constant in ft·lbf/(lb·°R).
#[must_use]
pub fn in_foot_pound_force_per_pound_rankine(r: SpecificGasConstant) -> f64 {
    r.get::<joule_per_kilogram_kelvin>()
        / JOULE_PER_KILOGRAM_KELVIN_PER_FOOT_POUND_FORCE_PER_POUND_RANKINE
}

/// Creates a specific volume from ft³/lb.
#[must_use]
pub fn cubic_feet_per_pound(value: f64) -> SpecificVolume {
    Volume::new::<cubic_foot>(value) / Mass::new::<pound>(1.0)
}

/// Returns a specific volume in ft³/lb.
#[must_use]
pub fn in_cubic_feet_per_pound(volume: SpecificVolume) -> f64 {
    let per_pound: Volume = volume * Mass::new::<pound>(1.0);
    per_pound.get::<cubic_foot>()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::kilojoule_per_kilogram,
        specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    };

    #[test]
    fn enthalpy_round_trip() {
        let h = btu_per_pound(1061.0);
        assert_relative_eq!(h.get::<kilojoule_per_kilogram>(), 2467.886, epsilon = 1e-9);
        assert_relative_eq!(in_btu_per_pound(h), 1061.0, epsilon = 1e-12);
    }

    #[test]
    fn specific_heat_matches_water_reference() {
        // One Btu/(lb·°F) is the IT calorie-based heat capacity of water.
        let cp = btu_per_pound_fahrenheit(1.0);
        assert_relative_eq!(cp.get::<kilojoule_per_kilogram_kelvin>(), 4.1868);
        assert_relative_eq!(in_btu_per_pound_fahrenheit(cp), 1.0);
    }

    #[test]
    fn dry_air_gas_constant() {
        let r = foot_pound_force_per_pound_rankine(53.352);
        assert_relative_eq!(r.get::<joule_per_kilogram_kelvin>(), 287.05, epsilon = 0.01);
        assert_relative_eq!(in_foot_pound_force_per_pound_rankine(r), 53.352, epsilon = 1e-12);
    }

    #[test]
    fn specific_volume_units() {
        let v = cubic_feet_per_pound(13.33);
        // 1 ft³/lb = 0.062428 m³/kg
        assert_relative_eq!(v.value, 13.33 * 0.062_427_960_576, epsilon = 1e-9);
        assert_relative_eq!(in_cubic_feet_per_pound(v), 13.33, epsilon = 1e-12);
    }
}
