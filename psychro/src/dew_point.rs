//! Dew-point temperature.

use psychro_units::RelativeHumidity;
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::psi,
    thermodynamic_temperature::{degree_celsius, degree_fahrenheit},
};

use crate::{DomainError, error::absolute_kelvin};

/// Magnus–Tetens coefficients for the dew point.
const MAGNUS_A: f64 = 17.27;
const MAGNUS_B_CELSIUS: f64 = 237.3;

/// Dew point by inverting the Magnus approximation.
///
/// ```text
/// α = ln(RH) + a·T/(b + T)
/// T_dp = b·α/(a − α)
/// ```
///
/// with `T` in Celsius. At saturation the dew point equals the dry bulb.
///
/// # Errors
///
/// Returns [`DomainError::ZeroHumidity`] for dry air, which has no dew point,
/// and [`DomainError::BelowAbsoluteZero`] or [`DomainError::NonFinite`] for
/// an unphysical dry bulb.
pub fn magnus(
    dry_bulb: ThermodynamicTemperature,
    relative_humidity: RelativeHumidity,
) -> Result<ThermodynamicTemperature, DomainError> {
    let fraction = relative_humidity.fraction();
    if fraction <= 0.0 {
        return Err(DomainError::ZeroHumidity);
    }

    absolute_kelvin(dry_bulb)?;
    let t = dry_bulb.get::<degree_celsius>();
    let alpha = fraction.ln() + MAGNUS_A * t / (MAGNUS_B_CELSIUS + t);
    let t_dp = MAGNUS_B_CELSIUS * alpha / (MAGNUS_A - alpha);
    Ok(ThermodynamicTemperature::new::<degree_celsius>(t_dp))
}

/// Dew point from the ASHRAE (2005) polynomial in `ln p_w`.
///
/// ```text
/// α = ln(p_w)                                   p_w in psia
/// T_dp = 100.45 + 33.193α + 2.319α² + 0.17074α³ + 1.2063·p_w^0.1984   (T_db ≥ freezing)
/// T_dp = 90.12 + 26.142α + 0.8927α²                                    (T_db < freezing)
/// ```
///
/// in °F. The branch follows the dry bulb rather than the result, so the
/// two pieces do not join.
///
/// # Errors
///
/// Returns [`DomainError::ZeroHumidity`] if the vapor pressure is not positive.
#[deprecated(note = "use `dew_point::magnus`, which is continuous across freezing")]
pub fn polynomial(
    dry_bulb: ThermodynamicTemperature,
    vapor_pressure: Pressure,
    freezing_point: ThermodynamicTemperature,
) -> Result<ThermodynamicTemperature, DomainError> {
    let p_w = vapor_pressure.get::<psi>();
    if p_w.is_nan() || p_w <= 0.0 {
        return Err(DomainError::ZeroHumidity);
    }

    let a = p_w.ln();
    let t_dp = if dry_bulb >= freezing_point {
        100.45 + 33.193 * a + 2.319 * a * a + 0.170_74 * a.powi(3) + 1.2063 * p_w.powf(0.1984)
    } else {
        90.12 + 26.142 * a + 0.8927 * a * a
    };
    Ok(ThermodynamicTemperature::new::<degree_fahrenheit>(t_dp))
}
