//! Physical constants and specific-heat correlations for moist air.

use psychro_units::{
    SpecificEnthalpy, SpecificGasConstant,
    imperial::{btu_per_pound, btu_per_pound_fahrenheit, foot_pound_force_per_pound_rankine},
};
use uom::si::{
    f64::{Ratio, SpecificHeatCapacity, ThermodynamicTemperature},
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::{degree_celsius, degree_fahrenheit},
};

/// Grains in one pound-mass.
pub const GRAINS_PER_POUND: f64 = 7_000.0;

/// Returns the zero of the imperial enthalpy scale, 0 °F.
///
/// Sensible enthalpies of dry air, vapor, and liquid water are measured from
/// this temperature.
#[must_use]
pub fn enthalpy_datum() -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_fahrenheit>(0.0)
}

/// The constants table for dry air and water vapor.
///
/// A single table is built once and handed to the engine at construction.
/// [`MoistAir::default`] holds the published imperial values; a custom table
/// can be supplied to study sensitivity to individual constants.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoistAir {
    /// Specific gas constant of dry air.
    pub gas_constant_dry_air: SpecificGasConstant,
    /// Specific gas constant of water vapor.
    pub gas_constant_vapor: SpecificGasConstant,
    /// Constant specific heat of dry air.
    pub cp_dry_air: SpecificHeatCapacity,
    /// Constant specific heat of liquid water.
    pub cp_water: SpecificHeatCapacity,
    /// Constant specific heat of water vapor.
    pub cp_vapor: SpecificHeatCapacity,
    /// Latent heat of vaporization at the enthalpy datum.
    pub latent_heat: SpecificEnthalpy,
    /// Ratio of the molecular mass of water vapor to that of dry air.
    pub molecular_mass_ratio: Ratio,
    /// Freezing point of pure water, which selects the ice or water
    /// saturation correlation.
    pub freezing_point: ThermodynamicTemperature,
}

impl Default for MoistAir {
    fn default() -> Self {
        Self {
            gas_constant_dry_air: foot_pound_force_per_pound_rankine(53.352),
            gas_constant_vapor: foot_pound_force_per_pound_rankine(85.778),
            cp_dry_air: btu_per_pound_fahrenheit(0.240),
            cp_water: btu_per_pound_fahrenheit(0.999),
            cp_vapor: btu_per_pound_fahrenheit(0.451),
            latent_heat: btu_per_pound(1061.0),
            molecular_mass_ratio: Ratio::new::<ratio>(0.62198),
            freezing_point: ThermodynamicTemperature::new::<degree_fahrenheit>(32.0),
        }
    }
}

impl MoistAir {
    /// Specific heat of liquid water at the wet-bulb temperature.
    ///
    /// Quadratic fit in Celsius from Raznjevic (1975) as used by
    /// Al-Ismaili (2009): `cp = 0.0265·t² − 1.7688·t + 4205.6` J/(kg·K).
    #[must_use]
    pub fn cp_water_at(&self, wet_bulb: ThermodynamicTemperature) -> SpecificHeatCapacity {
        let t = wet_bulb.get::<degree_celsius>();
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(0.0265 * t * t - 1.7688 * t + 4205.6)
    }

    /// Specific heat of water vapor at the dry-bulb temperature.
    ///
    /// `cp = 0.0016·t² + 0.1546·t + 1858.7` J/(kg·K), `t` in Celsius.
    #[must_use]
    pub fn cp_vapor_at(&self, dry_bulb: ThermodynamicTemperature) -> SpecificHeatCapacity {
        let t = dry_bulb.get::<degree_celsius>();
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(0.0016 * t * t + 0.1546 * t + 1858.7)
    }

    /// Specific heat of dry air at the mean of the dry- and wet-bulb temperatures.
    ///
    /// `cp = 0.0667·(t_db + t_wb)/2 + 1005` J/(kg·K), temperatures in Celsius.
    #[must_use]
    pub fn cp_dry_air_at(
        &self,
        dry_bulb: ThermodynamicTemperature,
        wet_bulb: ThermodynamicTemperature,
    ) -> SpecificHeatCapacity {
        let mean = 0.5 * (dry_bulb.get::<degree_celsius>() + wet_bulb.get::<degree_celsius>());
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(0.0667 * mean + 1005.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use psychro_units::imperial::{in_btu_per_pound, in_btu_per_pound_fahrenheit};

    fn fahrenheit(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_fahrenheit>(value)
    }

    #[test]
    fn default_table_values() {
        let air = MoistAir::default();

        assert_relative_eq!(in_btu_per_pound(air.latent_heat), 1061.0, epsilon = 1e-9);
        assert_relative_eq!(in_btu_per_pound_fahrenheit(air.cp_dry_air), 0.240, epsilon = 1e-12);
        assert_relative_eq!(air.freezing_point.get::<degree_celsius>(), 0.0, epsilon = 1e-12);

        // The molecular-mass ratio equals the ratio of the gas constants.
        let from_gas_constants = air.gas_constant_dry_air / air.gas_constant_vapor;
        assert_relative_eq!(
            from_gas_constants.get::<ratio>(),
            air.molecular_mass_ratio.get::<ratio>(),
            epsilon = 1e-4
        );
    }

    #[test]
    fn correlations_near_constant_values() {
        let air = MoistAir::default();
        let t = fahrenheit(70.0);

        // Each correlation stays within a few percent of its constant counterpart.
        assert_relative_eq!(
            in_btu_per_pound_fahrenheit(air.cp_water_at(t)),
            0.999,
            max_relative = 0.01
        );
        assert_relative_eq!(
            in_btu_per_pound_fahrenheit(air.cp_vapor_at(t)),
            0.451,
            max_relative = 0.03
        );
        assert_relative_eq!(
            in_btu_per_pound_fahrenheit(air.cp_dry_air_at(t, fahrenheit(60.0))),
            0.240,
            max_relative = 0.01
        );
    }

    #[test]
    fn correlations_at_freezing() {
        let air = MoistAir::default();
        let t = fahrenheit(32.0);

        // At 0 °C each polynomial reduces to its constant term.
        assert_relative_eq!(air.cp_water_at(t).value, 4205.6, epsilon = 1e-9);
        assert_relative_eq!(air.cp_vapor_at(t).value, 1858.7, epsilon = 1e-9);
        assert_relative_eq!(air.cp_dry_air_at(t, t).value, 1005.0, epsilon = 1e-9);
    }
}
