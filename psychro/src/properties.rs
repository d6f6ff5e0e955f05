//! Bulk properties derived from the humidity ratio.
//!
//! Everything here is per pound of dry air.

use psychro_units::{
    HumidityRatio, RelativeHumidity, SpecificEnthalpy, SpecificVolume, TemperatureOps,
    imperial::cubic_feet_per_pound,
};
use uom::si::{
    f64::{Mass, MassDensity, Pressure, Ratio, ThermodynamicTemperature},
    mass::grain,
    pressure::psi,
    ratio::ratio,
    thermodynamic_temperature::{degree_celsius, degree_fahrenheit, degree_rankine},
};

use crate::{
    DomainError, PsychroError,
    constants::{GRAINS_PER_POUND, MoistAir, enthalpy_datum},
    error::absolute_kelvin,
    humidity_ratio,
};

/// `R_da/144` in ft³·psi/(lb·°R).
const SPECIFIC_VOLUME_COEFFICIENT: f64 = 0.3704;

/// Ratio of the gas constants of water vapor and dry air.
const VAPOR_VOLUME_FACTOR: f64 = 1.6078;

/// Magnus coefficients for relative humidity from dew point (Alduchov & Eskridge).
const MAGNUS_A: f64 = 17.625;
const MAGNUS_B_CELSIUS: f64 = 243.04;

/// Degree of saturation `μ = W/W_s`.
///
/// Read it with [`uom::si::ratio::percent`] for the conventional percentage.
/// Below freezing `W` is measured against water and `W_s` against ice, so
/// `μ` can exceed 100 %.
///
/// # Errors
///
/// Returns a [`DomainError`] if either humidity ratio is undefined.
pub fn degree_of_saturation(
    air: &MoistAir,
    pressure: Pressure,
    dry_bulb: ThermodynamicTemperature,
    relative_humidity: RelativeHumidity,
) -> Result<Ratio, DomainError> {
    let w = humidity_ratio::humidity_ratio(air, pressure, dry_bulb, relative_humidity)?;
    let w_s = humidity_ratio::saturation_humidity_ratio(air, pressure, dry_bulb)?;
    Ok(w / w_s)
}

/// Specific volume of moist air per pound of dry air.
///
/// `v = 0.3704·T·(1 + 1.6078·W)/P` with `T` in °R and `P` in psia.
///
/// # Errors
///
/// Returns a [`DomainError`] if the temperature is unphysical.
pub fn specific_volume(
    pressure: Pressure,
    dry_bulb: ThermodynamicTemperature,
    humidity_ratio: HumidityRatio,
) -> Result<SpecificVolume, DomainError> {
    absolute_kelvin(dry_bulb)?;
    let t = dry_bulb.get::<degree_rankine>();
    let w = humidity_ratio.get::<ratio>();
    let p = pressure.get::<psi>();
    let v = SPECIFIC_VOLUME_COEFFICIENT * t * (1.0 + VAPOR_VOLUME_FACTOR * w) / p;
    Ok(cubic_feet_per_pound(v))
}

/// Density of moist air, the reciprocal of [`specific_volume`].
#[must_use]
pub fn density(specific_volume: SpecificVolume) -> MassDensity {
    specific_volume.recip()
}

/// Sensible enthalpy of the dry air, `cp_da(T_db, T_wb)·(T_db − 0 °F)`.
#[must_use]
pub fn enthalpy_dry_air(
    air: &MoistAir,
    dry_bulb: ThermodynamicTemperature,
    wet_bulb: ThermodynamicTemperature,
) -> SpecificEnthalpy {
    air.cp_dry_air_at(dry_bulb, wet_bulb) * dry_bulb.minus(enthalpy_datum())
}

/// Enthalpy of the vapor, `W·(cp_v(T_db)·(T_db − 0 °F) + h_fg)`.
#[must_use]
pub fn enthalpy_vapor(
    air: &MoistAir,
    dry_bulb: ThermodynamicTemperature,
    humidity_ratio: HumidityRatio,
) -> SpecificEnthalpy {
    let sensible = air.cp_vapor_at(dry_bulb) * dry_bulb.minus(enthalpy_datum());
    humidity_ratio * (sensible + air.latent_heat)
}

/// Relative humidity implied by a dry bulb and dew point.
///
/// `RH = exp(a·T_dp/(b + T_dp)) / exp(a·T_db/(b + T_db))` in Celsius with
/// `a = 17.625` and `b = 243.04 °C`.
///
/// # Errors
///
/// Returns [`DomainError::DewPointAboveDryBulb`] if the dew point is above
/// the dry bulb, and [`DomainError::BelowAbsoluteZero`] or
/// [`DomainError::NonFinite`] if either temperature is unphysical.
pub fn relative_humidity(
    dry_bulb: ThermodynamicTemperature,
    dew_point: ThermodynamicTemperature,
) -> Result<RelativeHumidity, PsychroError> {
    absolute_kelvin(dry_bulb)?;
    absolute_kelvin(dew_point)?;
    let t = dry_bulb.get::<degree_celsius>();
    let t_dp = dew_point.get::<degree_celsius>();
    if t_dp > t {
        return Err(DomainError::DewPointAboveDryBulb {
            dew_point_f: dew_point.get::<degree_fahrenheit>(),
            dry_bulb_f: dry_bulb.get::<degree_fahrenheit>(),
        }
        .into());
    }

    let magnus = |t: f64| (MAGNUS_A * t / (MAGNUS_B_CELSIUS + t)).exp();
    let fraction = (magnus(t_dp) / magnus(t)).min(1.0);
    Ok(RelativeHumidity::from_fraction(fraction)?)
}

/// Moisture content in grains of water per pound of dry air.
#[must_use]
pub fn grains_of_moisture(humidity_ratio: HumidityRatio) -> Mass {
    Mass::new::<grain>(GRAINS_PER_POUND * humidity_ratio.get::<ratio>())
}

/// Specific humidity, the vapor mass per unit mass of moist air: `W/(1 + W)`.
#[must_use]
pub fn specific_humidity(humidity_ratio: HumidityRatio) -> Ratio {
    humidity_ratio / (Ratio::new::<ratio>(1.0) + humidity_ratio)
}

/// Absolute humidity, the vapor mass per unit volume: `W/v`.
#[must_use]
pub fn absolute_humidity(
    humidity_ratio: HumidityRatio,
    specific_volume: SpecificVolume,
) -> MassDensity {
    humidity_ratio / specific_volume
}
